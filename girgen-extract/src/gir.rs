//! The metadata store: a GIR document loaded into classes, callables, properties and signals.

use std::fmt::{Debug, Display};
use std::path::Path;

use girgen_util::Trace;
use log::*;
use tracing::instrument;
use ustr::{Ustr, UstrSet};

use crate::error::{Error, ParseError};
use crate::index_map::UstrIndexMap;
use crate::xml::{self, Element, QName};

type Result<T, E = Error> = std::result::Result<T, E>;

pub const CORE_NS: &str = "http://www.gtk.org/introspection/core/1.0";
pub const C_NS: &str = "http://www.gtk.org/introspection/c/1.0";
pub const GLIB_NS: &str = "http://www.gtk.org/introspection/glib/1.0";

pub(crate) mod names {
    use super::{CORE_NS, C_NS, GLIB_NS};
    use crate::xml::QName;

    pub const REPOSITORY: QName = QName::new(CORE_NS, "repository");
    pub const NAMESPACE: QName = QName::new(CORE_NS, "namespace");
    pub const CLASS: QName = QName::new(CORE_NS, "class");
    pub const ENUMERATION: QName = QName::new(CORE_NS, "enumeration");
    pub const BITFIELD: QName = QName::new(CORE_NS, "bitfield");
    pub const CONSTRUCTOR: QName = QName::new(CORE_NS, "constructor");
    pub const METHOD: QName = QName::new(CORE_NS, "method");
    pub const PARAMETERS: QName = QName::new(CORE_NS, "parameters");
    pub const PARAMETER: QName = QName::new(CORE_NS, "parameter");
    pub const RETURN_VALUE: QName = QName::new(CORE_NS, "return-value");
    pub const PROPERTY: QName = QName::new(CORE_NS, "property");
    pub const TYPE: QName = QName::new(CORE_NS, "type");
    pub const ARRAY: QName = QName::new(CORE_NS, "array");
    pub const VARARGS: QName = QName::new(CORE_NS, "varargs");
    pub const DOC: QName = QName::new(CORE_NS, "doc");
    pub const SIGNAL: QName = QName::new(GLIB_NS, "signal");

    pub const NAME: QName = QName::local("name");
    pub const PARENT: QName = QName::local("parent");
    pub const READABLE: QName = QName::local("readable");
    pub const WRITABLE: QName = QName::local("writable");
    pub const DEPRECATED: QName = QName::local("deprecated");
    pub const DEPRECATED_VERSION: QName = QName::local("deprecated-version");
    pub const C_TYPE: QName = QName::new(C_NS, "type");
    pub const C_IDENTIFIER: QName = QName::new(C_NS, "identifier");
    pub const GET_TYPE: QName = QName::new(GLIB_NS, "get-type");
}

use names::*;

/// The semantic and C names carried by a `<type>` element, both exactly as written in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub name: Option<Ustr>,
    pub c_type: Option<Ustr>,
}

impl TypeName {
    fn from_element(e: &Element) -> TypeName {
        TypeName {
            name: e.get_ustr(NAME),
            c_type: e.get_ustr(C_TYPE),
        }
    }
}

/// The shape of whatever type information a parameter, return value or property node carries.
///
/// This records what is in the document without judging it: deciding what can be bound is the job of the type
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A direct `<type>` child
    Direct(TypeName),
    /// An `<array>` child. `element` is its nested `<type>`, if there is one.
    Array {
        c_type: Option<Ustr>,
        element: Option<TypeName>,
    },
    /// A `<varargs>` child
    Varargs,
    /// None of the above. Holds the offending node rendered back to XML.
    Unrecognized(String),
}

impl TypeShape {
    /// Probe a node's children in priority order: type, array, varargs
    fn from_element(node: &Element) -> TypeShape {
        if let Some(t) = node.find(TYPE) {
            TypeShape::Direct(TypeName::from_element(t))
        } else if let Some(a) = node.find(ARRAY) {
            TypeShape::Array {
                c_type: a.get_ustr(C_TYPE),
                element: a.find(TYPE).map(TypeName::from_element),
            }
        } else if node.find(VARARGS).is_some() {
            TypeShape::Varargs
        } else {
            TypeShape::Unrecognized(node.to_xml())
        }
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self, TypeShape::Varargs)
    }
}

impl Display for TypeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opt = |u: &Option<Ustr>| u.map(|u| u.to_string()).unwrap_or_else(|| "?".to_string());
        match self {
            TypeShape::Direct(t) => write!(f, "{} ({})", opt(&t.name), opt(&t.c_type)),
            TypeShape::Array { c_type, element } => match element {
                Some(t) => write!(f, "{}[] ({})", opt(&t.name), opt(&t.c_type)),
                None => write!(f, "[] ({})", opt(c_type)),
            },
            TypeShape::Varargs => write!(f, "..."),
            TypeShape::Unrecognized(_) => write!(f, "UNRECOGNIZED"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    name: Ustr,
    shape: TypeShape,
    doc: Option<String>,
}

impl Parameter {
    pub fn new(name: &str, shape: TypeShape, doc: Option<String>) -> Parameter {
        Parameter {
            name: name.into(),
            shape,
            doc,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A `deprecated` marker: the attribute holds the suggested replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub version: Option<String>,
    pub replacement: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    Constructor,
    Method,
    Signal,
}

/// A constructor, method or signal
#[derive(Clone)]
pub struct Callable {
    kind: CallableKind,
    name: Ustr,
    c_identifier: Option<Ustr>,
    parameters: Vec<Parameter>,
    return_value: Option<TypeShape>,
    doc: Option<String>,
    deprecation: Option<Deprecation>,
}

impl Callable {
    #[instrument(level = "trace", skip(node))]
    fn extract(node: &Element, kind: CallableKind) -> Result<Callable, ParseError> {
        let name = required(node, NAME)?;

        let parameters = node
            .find(PARAMETERS)
            .map(|params| {
                params
                    .find_all(PARAMETER)
                    .map(|p| {
                        Ok(Parameter {
                            name: required(p, NAME)?,
                            shape: TypeShape::from_element(p),
                            doc: p.find_text(DOC),
                        })
                    })
                    .collect::<Result<Vec<_>, ParseError>>()
            })
            .transpose()?
            .unwrap_or_default();

        let deprecation = node.get(DEPRECATED).map(|d| Deprecation {
            version: node.get(DEPRECATED_VERSION).map(str::to_string),
            replacement: d.to_string(),
        });

        Ok(Callable {
            kind,
            name,
            c_identifier: node.get_ustr(C_IDENTIFIER),
            parameters,
            return_value: node.find(RETURN_VALUE).map(TypeShape::from_element),
            doc: node.find_text(DOC),
            deprecation,
        })
    }

    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// The short name, e.g. "new_with_label" or "size-allocate"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native C symbol, e.g. "gtk_frame_new". Signals have none.
    pub fn c_identifier(&self) -> Option<&str> {
        self.c_identifier.as_ref().map(|u| u.as_str())
    }

    /// The identifier used to report on and look up overrides for this callable
    pub fn identifier(&self) -> &str {
        self.c_identifier().unwrap_or(&self.name)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_value(&self) -> Option<&TypeShape> {
        self.return_value.as_ref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn deprecation(&self) -> Option<&Deprecation> {
        self.deprecation.as_ref()
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.shape))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{:?} {}({params})", self.kind, self.identifier())?;
        if let Some(r) = &self.return_value {
            write!(f, " -> {r}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Property {
    name: Ustr,
    shape: TypeShape,
    readable: bool,
    writable: bool,
    doc: Option<String>,
}

impl Property {
    fn extract(node: &Element) -> Result<Property, ParseError> {
        Ok(Property {
            name: required(node, NAME)?,
            shape: TypeShape::from_element(node),
            readable: node.get(READABLE) != Some("0"),
            writable: node.get(WRITABLE) != Some("0"),
            doc: node.find_text(DOC),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn readable(&self) -> bool {
        self.readable
    }

    pub fn writable(&self) -> bool {
        self.writable
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

pub struct Class {
    name: Ustr,
    parent: Option<Ustr>,
    get_type: Option<Ustr>,
    doc: Option<String>,
    constructors: Vec<Callable>,
    methods: Vec<Callable>,
    properties: Vec<Property>,
    signals: Vec<Callable>,
}

impl Class {
    #[instrument(level = "trace", skip(node))]
    fn extract(node: &Element) -> Result<Class, ParseError> {
        let callables = |q: QName, kind: CallableKind| {
            node.find_all(q)
                .map(|c| Callable::extract(c, kind))
                .collect::<Result<Vec<_>, ParseError>>()
        };

        Ok(Class {
            name: required(node, NAME)?,
            parent: node.get_ustr(PARENT),
            get_type: node.get_ustr(GET_TYPE),
            doc: node.find_text(DOC),
            constructors: callables(CONSTRUCTOR, CallableKind::Constructor)?,
            methods: callables(METHOD, CallableKind::Method)?,
            properties: node
                .find_all(PROPERTY)
                .map(Property::extract)
                .collect::<Result<Vec<_>, ParseError>>()?,
            signals: callables(SIGNAL, CallableKind::Signal)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.as_str())
    }

    /// The native "get-type" function, e.g. "gtk_frame_get_type"
    pub fn get_type(&self) -> Option<&str> {
        self.get_type.as_ref().map(|g| g.as_str())
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn constructors(&self) -> &[Callable] {
        &self.constructors
    }

    pub fn methods(&self) -> &[Callable] {
        &self.methods
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn signals(&self) -> &[Callable] {
        &self.signals
    }
}

/// A loaded introspection document
pub struct Repository {
    namespace: Ustr,
    classes: UstrIndexMap<Class>,
    enumerations: UstrSet,
}

impl Repository {
    /// Load and index the document at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Repository> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FailedToRead {
            path: path.display().to_string(),
            source,
        })?;

        Repository::from_str(&contents).map_err(|e| match e {
            Error::Parse(source) => Error::FailedToParseFile {
                path: path.display().to_string(),
                source,
            },
            e => e,
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Repository> {
        let root = xml::parse_str(contents)?;
        Ok(Repository::from_element(&root)?)
    }

    fn from_element(root: &Element) -> Result<Repository, ParseError> {
        if !root.is(REPOSITORY) {
            return Err(ParseError::UnexpectedRoot {
                expected: "repository".to_string(),
                found: root.local_name().to_string(),
            });
        }

        let ns = root.find(NAMESPACE).ok_or(ParseError::MissingNamespace)?;
        let namespace = required(ns, NAME)?;

        let mut classes = UstrIndexMap::new();
        for node in ns.find_all(CLASS) {
            let class = Class::extract(node)?;
            debug!("extracted class {}", class.name());
            classes.insert(class.name, class);
        }

        let enumerations = ns
            .find_all(ENUMERATION)
            .chain(ns.find_all(BITFIELD))
            .filter_map(|e| e.get_ustr(NAME))
            .collect();

        info!(
            "loaded namespace {namespace}: {} classes",
            classes.len()
        );

        Ok(Repository {
            namespace,
            classes,
            enumerations,
        })
    }

    /// The name of the root namespace, e.g. "Gtk"
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn get_class(&self, name: &str) -> Result<&Class> {
        if let Some(class) = self.classes.get(&name.into()) {
            return Ok(class);
        }

        let mut distances = self
            .classes
            .keys()
            .map(|k| (levenshtein::levenshtein(k, name), k))
            .collect::<Vec<_>>();
        distances.sort_by(|a, b| a.0.cmp(&b.0));

        error!("Could not find class \"{name}\" in namespace {}", self.namespace);
        if !distances.is_empty() {
            error!("Did you mean one of:");
            for (_, sug) in distances.iter().take(3) {
                error!("  {sug}");
            }
        }

        Err(Error::ClassNotFound {
            name: name.to_string(),
            namespace: self.namespace.to_string(),
            source: Trace::new(),
        })
    }

    /// Every class, in document order
    pub fn classes(&self) -> impl Iterator<Item = (&str, &Class)> {
        self.classes.iter_with_keys()
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn is_class(&self, name: &str) -> bool {
        self.classes.contains_key(&name.into())
    }

    /// Is `name` an enumeration or bitfield declared in this namespace?
    pub fn is_enumeration(&self, name: &str) -> bool {
        self.enumerations.contains(&Ustr::from(name))
    }
}

fn required(node: &Element, q: QName) -> Result<Ustr, ParseError> {
    node.get_ustr(q).ok_or_else(|| ParseError::MissingAttribute {
        element: node.local_name().to_string(),
        attribute: q.local.to_string(),
    })
}
