//! Output accumulators: one [`Package`] per emitted Ada unit, held in a [`PackageRegistry`] until the run ends.

use std::collections::BTreeSet;
use std::fmt::Write;

use hashbrown::HashMap;

use crate::doc::comment;
use crate::error::Error;
use crate::gen_ada::INDENT;

type Result<T, E = Error> = std::result::Result<T, E>;

pub const TYPES: &str = "";
pub const CONSTRUCTORS: &str = "Constructors";
pub const METHODS: &str = "Methods";
pub const PROPERTIES: &str = "Properties";
pub const SIGNALS: &str = "Signals";

/// Output order of the known sections. Any other section follows them.
const SECTION_ORDER: [&str; 5] = [TYPES, CONSTRUCTORS, METHODS, PROPERTIES, SIGNALS];

fn section_rank(name: &str) -> usize {
    SECTION_ORDER
        .iter()
        .position(|s| *s == name)
        .unwrap_or(SECTION_ORDER.len())
}

/// A named group of declarations in a package's public part. Text blocks are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    blocks: Vec<String>,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, text: impl Into<String>) {
        self.blocks.push(text.into());
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn write(&self, out: &mut String) -> Result<()> {
        if !self.name.is_empty() {
            let rule = "-".repeat(self.name.len() + 6);
            writeln!(out, "{INDENT}{rule}")?;
            writeln!(out, "{INDENT}-- {} --", self.name)?;
            writeln!(out, "{INDENT}{rule}")?;
            writeln!(out)?;
        }

        for block in &self.blocks {
            out.push_str(block);
            if !block.ends_with('\n') {
                writeln!(out)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

/// Everything generated for one Ada package, possibly from several classes
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    doc: Option<String>,
    withs: BTreeSet<String>,
    sections: Vec<Section>,
    private: Vec<String>,
    body: Vec<String>,
}

impl Package {
    pub fn new(name: &str) -> Package {
        Package {
            name: name.to_string(),
            doc: None,
            withs: BTreeSet::new(),
            sections: Vec::new(),
            private: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_doc(&mut self, doc: &str) {
        self.doc = Some(doc.to_string());
    }

    /// Add a `with` clause. The package itself and its ancestors are visible already and are ignored.
    pub fn add_with(&mut self, package: &str) {
        let is_ancestor = self.name == package || self.name.starts_with(&format!("{package}."));
        if !package.is_empty() && !is_ancestor {
            self.withs.insert(package.to_string());
        }
    }

    pub fn withs(&self) -> impl Iterator<Item = &str> {
        self.withs.iter().map(String::as_str)
    }

    /// The section with this name, created if it does not exist yet. Sections are kept in output order whatever
    /// order they are first requested in: types, constructors, methods, properties, signals, then the rest as
    /// they come.
    pub fn section(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                let rank = section_rank(name);
                let index = self
                    .sections
                    .iter()
                    .position(|s| section_rank(&s.name) > rank)
                    .unwrap_or(self.sections.len());
                self.sections.insert(
                    index,
                    Section {
                        name: name.to_string(),
                        blocks: Vec::new(),
                    },
                );
                index
            }
        };
        &mut self.sections[index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn add_private(&mut self, text: impl Into<String>) {
        self.private.push(text.into());
    }

    pub fn add_body(&mut self, text: impl Into<String>) {
        self.body.push(text.into());
    }

    /// The package specification. Empty sections are left out.
    pub fn spec_text(&self) -> Result<String> {
        let mut out = String::new();

        for with in &self.withs {
            writeln!(out, "with {with}; use {with};")?;
        }
        if !self.withs.is_empty() {
            writeln!(out)?;
        }

        writeln!(out, "package {} is", self.name)?;
        writeln!(out)?;

        if let Some(doc) = &self.doc {
            let paragraphs = doc
                .split("\n\n")
                .map(str::to_string)
                .collect::<Vec<_>>();
            out.push_str(&comment(&paragraphs, ""));
            writeln!(out)?;
        }

        for section in self.sections.iter().filter(|s| !s.is_empty()) {
            section.write(&mut out)?;
        }

        if !self.private.is_empty() {
            writeln!(out, "private")?;
            for text in &self.private {
                out.push_str(text);
                if !text.ends_with('\n') {
                    writeln!(out)?;
                }
            }
        }

        writeln!(out, "end {};", self.name)?;
        Ok(out)
    }

    /// The package body, or `None` if nothing needs one
    pub fn body_text(&self) -> Result<Option<String>> {
        if self.body.is_empty() {
            return Ok(None);
        }

        let mut out = String::new();
        writeln!(out, "package body {} is", self.name)?;
        writeln!(out)?;
        for text in &self.body {
            out.push_str(text);
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "end {};", self.name)?;
        Ok(Some(out))
    }
}

/// All the packages of a run, looked up case-insensitively and created on first access
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: HashMap<String, Package>,
}

impl PackageRegistry {
    pub fn new() -> PackageRegistry {
        PackageRegistry::default()
    }

    /// The package with this name. The first call decides the spelling used in the output.
    pub fn get_package(&mut self, name: &str) -> &mut Package {
        self.packages
            .entry(name.to_lowercase())
            .or_insert_with(|| Package::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Render every package, specs then bodies, ordered by name, each preceded by `header`.
    /// Consumes the registry: packages are serialized exactly once.
    pub fn serialize(self, header: &str) -> Result<String> {
        let mut packages = self.packages.into_iter().collect::<Vec<_>>();
        packages.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        for (_, package) in &packages {
            out.push_str(header);
            out.push_str(&package.spec_text()?);
            writeln!(out)?;
        }
        for (_, package) in &packages {
            if let Some(body) = package.body_text()? {
                out.push_str(header);
                out.push_str(&body);
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = PackageRegistry::new();
        registry.get_package("Widget").add_with("Glib");
        registry.get_package("widget").add_with("Gtk.Enums");

        assert_eq!(registry.len(), 1);
        let package = registry.get("WIDGET").unwrap();
        assert_eq!(package.name(), "Widget");
        assert_eq!(package.withs().collect::<Vec<_>>(), vec!["Glib", "Gtk.Enums"]);
    }

    #[test]
    fn same_accumulator_instance() {
        let mut registry = PackageRegistry::new();
        let first = registry.get_package("Widget") as *const Package;
        let second = registry.get_package("widget") as *const Package;
        assert_eq!(first, second);
    }

    #[test]
    fn sections_skip_empty() {
        let mut package = Package::new("Gtk.Frame");
        package.section(TYPES).add("   type Gtk_Frame is null record;\n");
        package.section(CONSTRUCTORS);
        package.section(METHODS).add("   procedure Show;\n");
        package.section(TYPES).add("   X : Integer;\n");
        package.add_with("Gtk.Frame");
        package.add_with("Gtk");

        let names = package.sections().iter().map(Section::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["", "Constructors", "Methods"]);
        assert_eq!(package.withs().count(), 0);

        assert_eq!(
            package.spec_text().unwrap(),
            indoc! {"
                package Gtk.Frame is

                   type Gtk_Frame is null record;

                   X : Integer;

                   -------------
                   -- Methods --
                   -------------

                   procedure Show;

                end Gtk.Frame;
            "}
        );
        assert_eq!(package.body_text().unwrap(), None);
    }

    #[test]
    fn sections_follow_the_fixed_order() {
        let mut package = Package::new("Gtk.Bin");
        package.section(METHODS).add("   procedure Show;\n");
        package.section("Extra").add("   Y : Integer;\n");
        package.section(SIGNALS).add("   Signal_Activate : constant String;\n");
        package.section(CONSTRUCTORS).add("   procedure Gtk_New;\n");
        package.section("Misc").add("   Z : Integer;\n");
        package.section(TYPES).add("   type Gtk_Bin is null record;\n");
        package.section(PROPERTIES).add("   Label_Property : constant Integer;\n");
        package.section(METHODS).add("   procedure Hide;\n");

        let names = package.sections().iter().map(Section::name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["", "Constructors", "Methods", "Properties", "Signals", "Extra", "Misc"]
        );

        let text = package.spec_text().unwrap();
        let at = |s: &str| text.find(s).unwrap();
        assert!(at("type Gtk_Bin") < at("-- Constructors --"));
        assert!(at("procedure Gtk_New") < at("-- Methods --"));
        assert!(at("procedure Hide") < at("-- Properties --"));
        assert!(at("-- Signals --") < at("-- Extra --"));
        assert!(at("Y : Integer") < at("-- Misc --"));
    }

    #[test]
    fn serialization_is_sorted() {
        let mut registry = PackageRegistry::new();
        registry.get_package("Gtk.Window");
        registry.get_package("Gtk.Frame").add_body("   null;\n");

        let text = registry.serialize("-- header\n").unwrap();
        let frame = text.find("package Gtk.Frame is").unwrap();
        let window = text.find("package Gtk.Window is").unwrap();
        let body = text.find("package body Gtk.Frame is").unwrap();
        assert!(frame < window && window < body);
        assert_eq!(text.matches("-- header").count(), 3);
    }
}
