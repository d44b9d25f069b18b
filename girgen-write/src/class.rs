//! Generation of everything one class contributes to its package.

use std::fmt::Write;

use girgen_extract::{Class, Overrides};
use girgen_translate::{
    ClassNames, Naming, PropertyBinding, PropertyTypes, Signature, SignatureBuilder, TypeResolver,
};
use tracing::instrument;

use crate::error::Error;
use crate::gen_ada::{commented_profile, AdaWriter, INDENT};
use crate::package::{
    Package, PackageRegistry, CONSTRUCTORS, METHODS, PROPERTIES, SIGNALS, TYPES,
};
use crate::Diagnostic;

type Result<T, E = Error> = std::result::Result<T, E>;

/// The root of every class hierarchy, used when a class has no parent
const ROOT_TYPE: &str = "Glib.Object.GObject";

pub struct ClassGenerator<'a> {
    pub naming: &'a Naming,
    pub overrides: &'a dyn Overrides,
    pub resolver: &'a TypeResolver<'a>,
    pub builder: &'a SignatureBuilder<'a>,
    pub writer: &'a AdaWriter<'a>,
    pub property_types: &'a PropertyTypes,
}

impl<'a> ClassGenerator<'a> {
    /// Add the class's declarations to its package, which is created if needed. Constructs that cannot be bound
    /// are left out and reported in `diagnostics`.
    #[instrument(level = "debug", skip_all, fields(class = class.name()))]
    pub fn generate(
        &self,
        class: &Class,
        registry: &mut PackageRegistry,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let names = ClassNames::new(self.naming, class.name());
        let package_name = self
            .overrides
            .merge_into(&names.package)
            .unwrap_or(&names.package);
        let package = registry.get_package(package_name);

        if let Some(doc) = self.overrides.package_doc(&names.package) {
            package.set_doc(doc);
        } else if package_name == names.package {
            // a merged class does not document its host package
            if let Some(doc) = class.doc() {
                package.set_doc(&self.writer.clean_doc(doc));
            }
        }

        self.type_declaration(class, &names, package)?;
        self.constructors(class, &names, package, diagnostics)?;
        self.methods(class, &names, package, diagnostics)?;
        self.properties(class, &names, package, diagnostics)?;
        self.signals(class, &names, package, diagnostics)?;

        Ok(())
    }

    fn type_declaration(&self, class: &Class, names: &ClassNames, package: &mut Package) -> Result<()> {
        let parent_type = match class.parent() {
            Some(parent) => {
                let parent = ClassNames::new(self.naming, parent);
                package.add_with(&parent.package);
                parent.type_name
            }
            None => {
                package.add_with("Glib.Object");
                ROOT_TYPE.to_string()
            }
        };

        let mut text = String::new();
        if self.overrides.get_type(&names.type_name).is_subtype() {
            writeln!(text, "{INDENT}subtype {} is {parent_type}_Record;", names.record)?;
            writeln!(text, "{INDENT}subtype {} is {parent_type};", names.type_name)?;
        } else {
            writeln!(
                text,
                "{INDENT}type {} is new {parent_type}_Record with null record;",
                names.record
            )?;
            writeln!(
                text,
                "{INDENT}type {} is access all {}'Class;",
                names.type_name, names.record
            )?;
        }

        package.section(TYPES).add(text);
        Ok(())
    }

    fn constructors(
        &self,
        class: &Class,
        names: &ClassNames,
        package: &mut Package,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        for ctor in class.constructors() {
            let sig = match self.builder.build(ctor) {
                Ok(sig) => sig,
                Err(reason) => {
                    diagnostics.push(Diagnostic::new(ctor.identifier(), reason));
                    continue;
                }
            };

            let subprograms = self.builder.constructor(names, &sig);
            self.add_withs(package, &sig);
            package.add_with("Glib.Object");
            package.add_with("System");
            package
                .section(CONSTRUCTORS)
                .add(self.writer.declaration(&subprograms, INDENT)?);
            for sub in &subprograms {
                if let Some(body) = self.writer.body(sub, INDENT)? {
                    package.add_body(body);
                }
            }
        }

        match self.builder.get_type(class) {
            Ok(Some(get_type)) => {
                package.add_with("Glib");
                package
                    .section(CONSTRUCTORS)
                    .add(self.writer.declaration(std::slice::from_ref(&get_type), INDENT)?);
            }
            Ok(None) => (),
            Err(reason) => {
                if let Some(id) = class.get_type() {
                    diagnostics.push(Diagnostic::new(id, reason));
                }
            }
        }

        Ok(())
    }

    fn methods(
        &self,
        class: &Class,
        names: &ClassNames,
        package: &mut Package,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        for method in class.methods() {
            let sig = match self.builder.build(method) {
                Ok(sig) => sig,
                Err(reason) => {
                    diagnostics.push(Diagnostic::new(method.identifier(), reason));
                    continue;
                }
            };

            let sub = self.builder.method(names, &sig);
            self.add_withs(package, &sig);
            package.add_with("Glib.Object");
            package.add_with("System");
            package
                .section(METHODS)
                .add(self.writer.declaration(std::slice::from_ref(&sub), INDENT)?);
            if let Some(body) = self.writer.body(&sub, INDENT)? {
                package.add_body(body);
            }
        }

        Ok(())
    }

    fn properties(
        &self,
        class: &Class,
        names: &ClassNames,
        package: &mut Package,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let (bound, skipped) = self.property_types.bind_class(self.resolver, class);
        for (name, reason) in skipped {
            diagnostics.push(Diagnostic::new(&format!("{}:{name}", names.type_name), reason));
        }

        if bound.is_empty() {
            return Ok(());
        }

        let mut listing = String::new();
        writeln!(
            listing,
            "{INDENT}--  The following properties are defined for this widget. See"
        )?;
        writeln!(
            listing,
            "{INDENT}--  Glib.Properties for more information on properties."
        )?;
        for p in &bound {
            writeln!(listing, "{INDENT}--")?;
            self.property_comment(&mut listing, p)?;
        }

        let mut constants = String::new();
        let mut private = String::new();
        for p in &bound {
            package.add_with(&p.package);
            writeln!(
                constants,
                "{INDENT}{} : constant {};",
                p.ada_name,
                p.property_type()
            )?;
            writeln!(
                private,
                "{INDENT}{} : constant {} :=\n{INDENT}  {}.Build (\"{}\");",
                p.ada_name,
                p.property_type(),
                p.package,
                p.native_name
            )?;
        }

        let section = package.section(PROPERTIES);
        section.add(listing);
        section.add(constants);
        package.add_private(private);
        Ok(())
    }

    fn property_comment(&self, out: &mut String, p: &PropertyBinding) -> Result<()> {
        writeln!(out, "{INDENT}--  Name:  {}", p.ada_name)?;
        writeln!(out, "{INDENT}--  Type:  {}", p.type_name)?;
        writeln!(out, "{INDENT}--  Flags: {}", p.flags)?;
        if let Some(doc) = &p.doc {
            out.push_str(&self.writer.doc(std::slice::from_ref(doc), INDENT));
        }
        Ok(())
    }

    fn signals(
        &self,
        class: &Class,
        names: &ClassNames,
        package: &mut Package,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let mut signals = class.signals().iter().collect::<Vec<_>>();
        signals.sort_by(|a, b| a.name().cmp(b.name()));

        let mut bound = Vec::new();
        for signal in signals {
            match self.builder.build(signal) {
                Ok(sig) => bound.push(sig),
                Err(reason) => diagnostics.push(Diagnostic::new(
                    &format!("{}::{}", names.type_name, signal.name()),
                    reason,
                )),
            }
        }

        if bound.is_empty() {
            return Ok(());
        }

        package.add_with("Glib");
        package
            .section(SIGNALS)
            .add(format!("{INDENT}--  The following new signals are defined for this widget:\n"));

        for sig in &bound {
            self.add_withs(package, sig);
            let text = self.signal(names, sig)?;
            package.section(SIGNALS).add(text);
        }

        Ok(())
    }

    fn signal(&self, names: &ClassNames, sig: &Signature) -> Result<String> {
        let mut text = String::new();
        writeln!(
            text,
            "{INDENT}{} : constant Glib.Signal_Name := \"{}\";",
            sig.ada_name(),
            sig.native_name()
        )?;
        let handler = self.builder.signal_handler(names, sig);
        text.push_str(&commented_profile(&handler, INDENT));
        let doc = sig.doc_paragraphs();
        if !doc.is_empty() {
            text.push_str(&self.writer.doc(&doc, INDENT));
        }
        Ok(text)
    }

    fn add_withs(&self, package: &mut Package, sig: &Signature) {
        for p in sig.packages() {
            package.add_with(&p);
        }
    }
}
