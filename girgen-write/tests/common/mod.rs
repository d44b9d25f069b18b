#![allow(dead_code)]

use girgen_extract::{OverrideRegistry, Repository};
use girgen_util::GenConfig;
use girgen_write::{package::PackageRegistry, Diagnostic, Generator};

pub(crate) use girgen_util::{compare, init_log, run_test, Error};

/// Generate everything in `gir` with the given override database, returning the filled registry
pub(crate) fn generate(
    gir: &str,
    overrides: &str,
) -> Result<(PackageRegistry, Vec<Diagnostic>), Error> {
    let repository = Repository::from_str(gir)?;
    let overrides = OverrideRegistry::from_str(overrides)?;
    let config = GenConfig::default();

    let generator = Generator::new(&repository, &overrides, &config)?;
    let mut registry = PackageRegistry::new();
    let diagnostics = generator.generate_into(&mut registry)?;
    Ok((registry, diagnostics))
}

/// The spec part of one generated package
pub(crate) fn package_spec(registry: &PackageRegistry, name: &str) -> Result<String, Error> {
    let package = registry
        .get(name)
        .ok_or_else(|| Error::Any(format!("no package {name}").into()))?;
    Ok(package.spec_text()?)
}

pub(crate) fn testdata(base: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(std::env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("girgen-extract")
        .join("testdata")
        .join(base)
}

pub(crate) fn gir(classes: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<repository version="1.2"
            xmlns="http://www.gtk.org/introspection/core/1.0"
            xmlns:c="http://www.gtk.org/introspection/c/1.0"
            xmlns:glib="http://www.gtk.org/introspection/glib/1.0">
  <namespace name="Gtk">
{classes}
  </namespace>
</repository>
"#
    )
}

pub(crate) const NO_OVERRIDES: &str = "<GIR/>";
