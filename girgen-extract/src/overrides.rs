//! The override registry: hand-maintained corrections to the introspection data.
//!
//! The database is an XML document of this form:
//!
//! ```xml
//! <GIR>
//!   <package id="Gtk.Frame" into="Gtk.Bin">
//!     <doc>Package documentation</doc>
//!     <type id="Gtk_Frame" subtype="true"/>
//!     <method id="gtk_frame_new" ada="Gtk_New_With_Label" bind="true">
//!       <parameter name="label" default='""'/>
//!     </method>
//!   </package>
//! </GIR>
//! ```
//!
//! Entries are looked up by native identifier only: method and type entries are indexed globally no matter which
//! package element they sit under.

use std::path::Path;

use log::*;
use ustr::{Ustr, UstrMap};

use crate::error::{Error, ParseError};
use crate::xml::{self, Element, QName};

type Result<T, E = Error> = std::result::Result<T, E>;

const ROOT: QName = QName::local("GIR");
const PACKAGE: QName = QName::local("package");
const METHOD: QName = QName::local("method");
const PARAMETER: QName = QName::local("parameter");
const TYPE: QName = QName::local("type");
const DOC: QName = QName::local("doc");
const ID: QName = QName::local("id");
const NAME: QName = QName::local("name");
const ADA: QName = QName::local("ada");
const BIND: QName = QName::local("bind");
const DEFAULT: QName = QName::local("default");
const INTO: QName = QName::local("into");
const SUBTYPE: QName = QName::local("subtype");

/// How a class's Ada type is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeOverride {
    /// `type X_Record is new Parent_Record with null record;`
    #[default]
    NewType,
    /// `subtype X_Record is Parent_Record;`
    Subtype,
}

impl TypeOverride {
    pub fn is_subtype(&self) -> bool {
        matches!(self, TypeOverride::Subtype)
    }
}

/// Lookups the generator makes against the override data. Every query has a typed "absent" answer so callers
/// never need to know what the defaults are.
pub trait Overrides {
    /// Should a binding be generated for this native identifier? Absent entries are bound.
    fn bind(&self, native_id: &str) -> bool;
    /// Replacement Ada name for this native identifier
    fn ada_name(&self, native_id: &str) -> Option<&str>;
    /// Ada default value expression for a parameter
    fn get_default(&self, native_id: &str, param: &str) -> Option<&str>;
    /// Another package this package's output should be merged into
    fn merge_into(&self, package: &str) -> Option<&str>;
    /// Whether the Ada type for this type name is a subtype of its parent or a new type
    fn get_type(&self, type_name: &str) -> TypeOverride;
    /// Documentation for a whole package
    fn package_doc(&self, package: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default)]
pub struct MethodOverride {
    pub ada_name: Option<String>,
    pub bind: Option<bool>,
    pub defaults: Vec<(String, String)>,
}

impl MethodOverride {
    pub fn renamed(ada_name: &str) -> MethodOverride {
        MethodOverride {
            ada_name: Some(ada_name.to_string()),
            ..Default::default()
        }
    }

    pub fn unbound() -> MethodOverride {
        MethodOverride {
            bind: Some(false),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, param: &str, value: &str) -> MethodOverride {
        self.defaults.push((param.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageOverride {
    pub into: Option<String>,
    pub doc: Option<String>,
}

/// Override data loaded from a database file, or assembled in code
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    methods: UstrMap<MethodOverride>,
    packages: UstrMap<PackageOverride>,
    types: UstrMap<TypeOverride>,
}

impl OverrideRegistry {
    pub fn new() -> OverrideRegistry {
        OverrideRegistry::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<OverrideRegistry> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FailedToRead {
            path: path.display().to_string(),
            source,
        })?;

        OverrideRegistry::from_str(&contents).map_err(|source| Error::FailedToParseFile {
            path: path.display().to_string(),
            source,
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<OverrideRegistry, ParseError> {
        let root = xml::parse_str(contents)?;
        if !root.is(ROOT) {
            return Err(ParseError::UnexpectedRoot {
                expected: "GIR".to_string(),
                found: root.local_name().to_string(),
            });
        }

        let mut registry = OverrideRegistry::new();
        for pkg in root.find_all(PACKAGE) {
            let id = required(pkg, ID)?;
            registry.packages.insert(
                id,
                PackageOverride {
                    into: pkg.get(INTO).map(str::to_string),
                    doc: pkg.find_text(DOC),
                },
            );

            for ty in pkg.find_all(TYPE) {
                let kind = if parse_flag(ty.get(SUBTYPE)).unwrap_or(false) {
                    TypeOverride::Subtype
                } else {
                    TypeOverride::NewType
                };
                registry.types.insert(required(ty, ID)?, kind);
            }

            for method in pkg.find_all(METHOD) {
                registry
                    .methods
                    .insert(required(method, ID)?, extract_method(method)?);
            }
        }

        debug!(
            "loaded overrides for {} packages, {} methods",
            registry.packages.len(),
            registry.methods.len()
        );

        Ok(registry)
    }

    pub fn add_method(&mut self, native_id: &str, method: MethodOverride) -> &mut Self {
        self.methods.insert(native_id.into(), method);
        self
    }

    pub fn add_package(&mut self, id: &str, package: PackageOverride) -> &mut Self {
        self.packages.insert(id.into(), package);
        self
    }

    pub fn add_type(&mut self, type_name: &str, kind: TypeOverride) -> &mut Self {
        self.types.insert(type_name.into(), kind);
        self
    }

    fn method(&self, native_id: &str) -> Option<&MethodOverride> {
        self.methods.get(&Ustr::from(native_id))
    }

    fn package(&self, id: &str) -> Option<&PackageOverride> {
        self.packages.get(&Ustr::from(id))
    }
}

impl Overrides for OverrideRegistry {
    fn bind(&self, native_id: &str) -> bool {
        self.method(native_id).and_then(|m| m.bind).unwrap_or(true)
    }

    fn ada_name(&self, native_id: &str) -> Option<&str> {
        self.method(native_id).and_then(|m| m.ada_name.as_deref())
    }

    fn get_default(&self, native_id: &str, param: &str) -> Option<&str> {
        self.method(native_id).and_then(|m| {
            m.defaults
                .iter()
                .find(|(name, _)| name == param)
                .map(|(_, value)| value.as_str())
        })
    }

    fn merge_into(&self, package: &str) -> Option<&str> {
        self.package(package).and_then(|p| p.into.as_deref())
    }

    fn get_type(&self, type_name: &str) -> TypeOverride {
        self.types
            .get(&Ustr::from(type_name))
            .copied()
            .unwrap_or_default()
    }

    fn package_doc(&self, package: &str) -> Option<&str> {
        self.package(package).and_then(|p| p.doc.as_deref())
    }
}

fn extract_method(node: &Element) -> Result<MethodOverride, ParseError> {
    let defaults = node
        .find_all(PARAMETER)
        .filter_map(|p| {
            p.get(DEFAULT)
                .map(|d| Ok((required(p, NAME)?.to_string(), d.to_string())))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(MethodOverride {
        ada_name: node.get(ADA).map(str::to_string),
        bind: parse_flag(node.get(BIND)),
        defaults,
    })
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    value.map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
}

fn required(node: &Element, q: QName) -> Result<Ustr, ParseError> {
    node.get_ustr(q).ok_or_else(|| ParseError::MissingAttribute {
        element: node.local_name().to_string(),
        attribute: q.local.to_string(),
    })
}
