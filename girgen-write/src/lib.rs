//! Rendering of a loaded introspection document as GtkAda packages.
//!
//! A [`Generator`] walks the classes in document order, accumulates their declarations into a
//! [`PackageRegistry`](package::PackageRegistry) and serializes every package once at the end. Anything that cannot
//! be bound is left out and reported as a [`Diagnostic`].

use std::path::Path;

use girgen_extract::{Overrides, Repository};
use girgen_translate::{Naming, PropertyTypes, SignatureBuilder, Skip, TypeResolver};
use girgen_util::GenConfig;
use indoc::indoc;
use log::*;

pub mod class;
pub mod doc;
pub mod error;
pub mod gen_ada;
pub mod package;

use class::ClassGenerator;
use doc::DocCleaner;
use error::Error;
use gen_ada::AdaWriter;
use package::PackageRegistry;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Written before every package specification and body
pub const COPYRIGHT_HEADER: &str = indoc! {"
    ------------------------------------------------------------------------------
    --                  GtkAda - Ada95 binding for Gtk+/Gnome                   --
    --                                                                          --
    -- This library is free software;  you can redistribute it and/or modify it --
    -- under terms of the  GNU General Public License  as published by the Free --
    -- Software  Foundation;  either version 3,  or (at your  option) any later --
    -- version. This library is distributed in the hope that it will be useful, --
    -- but WITHOUT ANY WARRANTY;  without even the implied warranty of MERCHAN- --
    -- TABILITY or FITNESS FOR A PARTICULAR PURPOSE.                            --
    --                                                                          --
    -- This file is generated from the introspection data. Edit the override    --
    -- database rather than this file.                                          --
    ------------------------------------------------------------------------------

    pragma Style_Checks (Off);
    pragma Warnings (Off, \"*is already use-visible*\");
"};

/// A construct that was left out of the output, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The native identifier: a C symbol, or `Type:property` / `Type::signal`
    pub identifier: String,
    pub reason: Skip,
}

impl Diagnostic {
    pub fn new(identifier: &str, reason: Skip) -> Diagnostic {
        Diagnostic {
            identifier: identifier.to_string(),
            reason,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Skipping {}: {}", self.identifier, self.reason)
    }
}

/// The result of a run
#[derive(Debug)]
pub struct Output {
    /// All packages, ready to be written
    pub text: String,
    /// Everything that was skipped, in the order it was encountered
    pub diagnostics: Vec<Diagnostic>,
    pub num_packages: usize,
}

pub struct Generator<'a> {
    repository: &'a Repository,
    overrides: &'a dyn Overrides,
    config: &'a GenConfig,
    naming: Naming,
    cleaner: DocCleaner,
    property_types: PropertyTypes,
}

impl<'a> Generator<'a> {
    pub fn new(
        repository: &'a Repository,
        overrides: &'a dyn Overrides,
        config: &'a GenConfig,
    ) -> Result<Generator<'a>> {
        let naming = Naming::new(repository.namespace())
            .with_exceptions(config.naming_exceptions.iter().cloned());

        Ok(Generator {
            repository,
            overrides,
            config,
            naming,
            cleaner: DocCleaner::new()?,
            property_types: PropertyTypes::default(),
        })
    }

    /// Generate every class that is not a hook class (or only the configured one) and serialize the result
    pub fn generate(&self) -> Result<Output> {
        let mut registry = PackageRegistry::new();
        let diagnostics = self.generate_into(&mut registry)?;
        let num_packages = registry.len();
        let text = registry.serialize(COPYRIGHT_HEADER)?;

        Ok(Output {
            text,
            diagnostics,
            num_packages,
        })
    }

    /// Add the generated classes to `registry`, returning what was skipped
    pub fn generate_into(&self, registry: &mut PackageRegistry) -> Result<Vec<Diagnostic>> {
        let resolver = TypeResolver::new(self.repository, &self.naming);
        let builder = SignatureBuilder::new(&resolver, self.overrides);
        let writer = AdaWriter::new(&self.naming, &self.cleaner);
        let generator = ClassGenerator {
            naming: &self.naming,
            overrides: self.overrides,
            resolver: &resolver,
            builder: &builder,
            writer: &writer,
            property_types: &self.property_types,
        };

        let classes = match &self.config.only_class {
            Some(name) => vec![(name.as_str(), self.repository.get_class(name)?)],
            None => self
                .repository
                .classes()
                .filter(|(name, _)| !self.config.is_hook_class(name))
                .collect(),
        };

        let mut diagnostics = Vec::new();
        for (name, class) in classes {
            debug!("generating {name}");
            generator
                .generate(class, registry, &mut diagnostics)
                .map_err(|source| Error::FailedToGenerateClass {
                    name: name.to_string(),
                    source: Box::new(source),
                })?;
        }

        for d in &diagnostics {
            warn!("{d}");
        }

        Ok(diagnostics)
    }
}

/// Write the generated text, creating the parent directory if needed
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let map_err = |source| Error::FailedToWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(map_err)?;
    }
    std::fs::write(path, text).map_err(map_err)
}
