//! Type resolution: from the type shape recorded in the document to the pair of Ada types (public and foreign)
//! and the conversions between them.

use std::fmt::Display;

use girgen_extract::{Repository, TypeName, TypeShape};
use hashbrown::HashMap;
use tracing::{instrument, trace, warn};

use crate::error::Skip;
use crate::naming::Naming;

/// An expression template used at the language boundary. `{}` stands for the value being converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    expr: String,
    temporary: Option<Temporary>,
    local: Option<String>,
}

/// A conversion that has to go through a local variable, e.g. a C string that must be freed after the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Temporary {
    /// Type of the local variable
    pub ty: String,
    /// Initial value, a template applied to the Ada value
    pub init: String,
    /// Statement run after the call, a template applied to the variable's name
    pub cleanup: Option<String>,
}

impl Conversion {
    pub fn identity() -> Conversion {
        Conversion::expr("{}")
    }

    pub fn expr(template: &str) -> Conversion {
        Conversion {
            expr: template.to_string(),
            temporary: None,
            local: None,
        }
    }

    pub fn through(ty: &str, init: &str, cleanup: Option<&str>) -> Conversion {
        Conversion {
            expr: "{}".to_string(),
            temporary: Some(Temporary {
                ty: ty.to_string(),
                init: init.to_string(),
                cleanup: cleanup.map(str::to_string),
            }),
            local: None,
        }
    }

    /// Add a local declaration the conversion expression relies on
    pub fn with_local(mut self, declaration: &str) -> Conversion {
        self.local = Some(declaration.to_string());
        self
    }

    pub fn apply(&self, value: &str) -> String {
        self.expr.replace("{}", value)
    }

    pub fn is_identity(&self) -> bool {
        self.expr == "{}" && self.temporary.is_none()
    }

    pub fn temporary(&self) -> Option<&Temporary> {
        self.temporary.as_ref()
    }

    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }
}

impl Temporary {
    pub fn init(&self, value: &str) -> String {
        self.init.replace("{}", value)
    }

    pub fn cleanup(&self, var: &str) -> Option<String> {
        self.cleanup.as_ref().map(|c| c.replace("{}", var))
    }
}

/// How one native type is spelled and converted on the Ada side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Public type for parameters
    pub param: String,
    /// Public type for return values
    pub result: String,
    /// Type in the imported C profile
    pub foreign: String,
    /// Public value to foreign value
    pub to_c: Conversion,
    /// Foreign return value to public value
    pub from_c: Conversion,
    /// Packages the Ada code needs to `with`
    pub packages: Vec<String>,
    /// The C type is itself a pointer (strings, gpointer) so a trailing `*` does not make it by-reference
    pub native_pointer: bool,
}

impl Mapping {
    /// A type that crosses the boundary unchanged
    pub fn direct(ada: &str, package: Option<&str>) -> Mapping {
        Mapping {
            param: ada.to_string(),
            result: ada.to_string(),
            foreign: ada.to_string(),
            to_c: Conversion::identity(),
            from_c: Conversion::identity(),
            packages: package.into_iter().map(str::to_string).collect(),
            native_pointer: false,
        }
    }
}

/// Table-driven substitutions for native scalar types. New entries can be added without touching the resolver.
#[derive(Debug, Clone)]
pub struct TypeTable {
    by_name: HashMap<String, Mapping>,
    c_aliases: HashMap<String, String>,
    arrays: HashMap<String, Mapping>,
}

impl TypeTable {
    pub fn empty() -> TypeTable {
        TypeTable {
            by_name: HashMap::new(),
            c_aliases: HashMap::new(),
            arrays: HashMap::new(),
        }
    }

    pub fn insert(&mut self, native: &str, mapping: Mapping) -> &mut Self {
        self.by_name.insert(native.to_string(), mapping);
        self
    }

    /// Resolve entries by C spelling too, for nodes that only carry a `c:type`
    pub fn alias(&mut self, c_type: &str, native: &str) -> &mut Self {
        self.c_aliases.insert(c_type.to_string(), native.to_string());
        self
    }

    /// Mapping for an array whose elements have the given native type
    pub fn insert_array(&mut self, element: &str, mapping: Mapping) -> &mut Self {
        self.arrays.insert(element.to_string(), mapping);
        self
    }

    /// Look a type up by native name first, then by C spelling. Returns the canonical native name with the mapping.
    pub fn lookup<'a>(
        &'a self,
        name: Option<&str>,
        c_type: Option<&str>,
    ) -> Option<(&'a str, &'a Mapping)> {
        let by_name = name.and_then(|n| self.by_name.get_key_value(n));
        let by_c = || {
            c_type
                .map(|c| c.trim_start_matches("const ").trim())
                .and_then(|c| self.c_aliases.get(c))
                .and_then(|n| self.by_name.get_key_value(n.as_str()))
        };

        by_name.or_else(by_c).map(|(k, v)| (k.as_str(), v))
    }

    pub fn lookup_array(&self, element: &str) -> Option<&Mapping> {
        self.arrays.get(element)
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        let mut table = TypeTable::empty();

        for (native, ada) in [
            ("gint", "Gint"),
            ("guint", "Guint"),
            ("gint8", "Gint8"),
            ("guint8", "Guint8"),
            ("gint16", "Gint16"),
            ("guint16", "Guint16"),
            ("gint32", "Gint32"),
            ("guint32", "Guint32"),
            ("gint64", "Gint64"),
            ("guint64", "Guint64"),
            ("glong", "Glong"),
            ("gulong", "Gulong"),
            ("gsize", "Gsize"),
            ("gssize", "Gssize"),
            ("gfloat", "Gfloat"),
            ("gdouble", "Gdouble"),
            ("gchar", "Gchar"),
            ("guchar", "Guchar"),
            ("gunichar", "Gunichar"),
            ("GType", "GType"),
        ] {
            table.insert(native, Mapping::direct(ada, Some("Glib")));
        }

        table.insert(
            "gboolean",
            Mapping {
                param: "Boolean".to_string(),
                result: "Boolean".to_string(),
                foreign: "Gboolean".to_string(),
                to_c: Conversion::expr("Boolean'Pos ({})"),
                from_c: Conversion::expr("Boolean'Val ({})"),
                packages: vec!["Glib".to_string()],
                native_pointer: false,
            },
        );

        let string = Mapping {
            param: "UTF8_String".to_string(),
            result: "UTF8_String".to_string(),
            foreign: "Interfaces.C.Strings.chars_ptr".to_string(),
            to_c: Conversion::through(
                "Interfaces.C.Strings.chars_ptr",
                "New_String ({})",
                Some("Free ({});"),
            ),
            from_c: Conversion::expr("Interfaces.C.Strings.Value ({})"),
            packages: vec!["Glib".to_string(), "Interfaces.C.Strings".to_string()],
            native_pointer: true,
        };
        table.insert("utf8", string.clone());
        table.insert("filename", string);
        for c in ["gchar*", "char*"] {
            table.alias(c, "utf8");
        }

        let address = Mapping {
            native_pointer: true,
            ..Mapping::direct("System.Address", Some("System"))
        };
        table.insert("gpointer", address.clone());
        table.insert("gconstpointer", address);

        let string_list = Mapping {
            param: "GNAT.Strings.String_List".to_string(),
            result: "GNAT.Strings.String_List".to_string(),
            foreign: "Gtkada.Types.Chars_Ptr_Array".to_string(),
            to_c: Conversion::through(
                "Gtkada.Types.Chars_Ptr_Array",
                "From_String_List ({})",
                Some("Gtkada.Types.Free ({});"),
            ),
            from_c: Conversion::identity(),
            packages: vec![
                "GNAT.Strings".to_string(),
                "Gtkada.Bindings".to_string(),
                "Gtkada.Types".to_string(),
            ],
            native_pointer: true,
        };
        table.insert_array("utf8", string_list.clone());
        table.insert_array("filename", string_list);

        table
    }
}

/// A fully resolved type, as seen from both sides of the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaType {
    /// The native type name, as written in the document
    pub native: String,
    /// The C type name, as written in the document
    pub c_type: String,
    pub mapping: Mapping,
}

impl AdaType {
    pub fn param(&self) -> &str {
        &self.mapping.param
    }

    pub fn result(&self) -> &str {
        &self.mapping.result
    }

    pub fn foreign(&self) -> &str {
        &self.mapping.foreign
    }

    pub fn to_c(&self) -> &Conversion {
        &self.mapping.to_c
    }

    pub fn from_c(&self) -> &Conversion {
        &self.mapping.from_c
    }

    pub fn packages(&self) -> &[String] {
        &self.mapping.packages
    }
}

/// The closed set of type shapes a parameter, return value or property can resolve to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Passed by value, or by reference when `by_reference` (a scalar behind a C pointer)
    Scalar { ty: AdaType, by_reference: bool },
    /// A GObject (or other boxed pointer) passed as an address
    ObjectPointer(AdaType),
    /// An array, with its element type
    Array {
        ty: AdaType,
        element: Box<TypeDescriptor>,
    },
    /// A C variadic argument list. Never bindable.
    Variadic,
    /// A shape this generator does not understand. Never bindable. Holds the node for diagnostics.
    Unknown(String),
}

impl TypeDescriptor {
    pub fn ada_type(&self) -> Option<&AdaType> {
        match self {
            TypeDescriptor::Scalar { ty, .. }
            | TypeDescriptor::ObjectPointer(ty)
            | TypeDescriptor::Array { ty, .. } => Some(ty),
            TypeDescriptor::Variadic | TypeDescriptor::Unknown(_) => None,
        }
    }

    pub fn native_name(&self) -> Option<&str> {
        self.ada_type().map(|t| t.native.as_str())
    }

    pub fn c_type(&self) -> Option<&str> {
        self.ada_type().map(|t| t.c_type.as_str())
    }

    /// Values of pointer-like types are written by the callee
    pub fn is_pointer_like(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Scalar {
                by_reference: true,
                ..
            }
        )
    }

    pub fn is_bindable(&self) -> bool {
        self.ada_type().is_some()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Scalar { ty, by_reference } => write!(
                f,
                "{}{} ({})",
                if *by_reference { "out " } else { "" },
                ty.param(),
                ty.native
            ),
            TypeDescriptor::ObjectPointer(ty) => write!(f, "{} ({})", ty.param(), ty.native),
            TypeDescriptor::Array { ty, .. } => write!(f, "{} ({}[])", ty.param(), ty.native),
            TypeDescriptor::Variadic => write!(f, "..."),
            TypeDescriptor::Unknown(_) => write!(f, "UNKNOWN"),
        }
    }
}

/// What a callable gives back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Value(TypeDescriptor),
}

pub struct TypeResolver<'a> {
    repository: &'a Repository,
    naming: &'a Naming,
    table: TypeTable,
}

impl<'a> TypeResolver<'a> {
    pub fn new(repository: &'a Repository, naming: &'a Naming) -> TypeResolver<'a> {
        TypeResolver::with_table(repository, naming, TypeTable::default())
    }

    pub fn with_table(
        repository: &'a Repository,
        naming: &'a Naming,
        table: TypeTable,
    ) -> TypeResolver<'a> {
        TypeResolver {
            repository,
            naming,
            table,
        }
    }

    pub fn naming(&self) -> &Naming {
        self.naming
    }

    pub fn repository(&self) -> &Repository {
        self.repository
    }

    /// Map a shape to its descriptor. Total: unbindable shapes come back as `Variadic` or `Unknown`.
    #[instrument(level = "trace", skip(self))]
    pub fn classify(&self, shape: &TypeShape) -> TypeDescriptor {
        match shape {
            TypeShape::Direct(t) => self.direct(t),
            TypeShape::Array {
                element: Some(t), ..
            } => self.array(t),
            TypeShape::Varargs => TypeDescriptor::Variadic,
            // an <array> without a nested <type> (empty or not) lands here too
            TypeShape::Array { element: None, .. } | TypeShape::Unrecognized(_) => {
                TypeDescriptor::Unknown(match shape {
                    TypeShape::Unrecognized(xml) => xml.clone(),
                    other => other.to_string(),
                })
            }
        }
    }

    /// Resolve a shape, or `None` if it cannot be bound. Unknown shapes are reported, varargs are not.
    pub fn resolve(&self, shape: &TypeShape) -> Option<TypeDescriptor> {
        match self.classify(shape) {
            TypeDescriptor::Variadic => None,
            TypeDescriptor::Unknown(node) => {
                warn!("Error: XML node has unknown type\n{node}");
                None
            }
            descriptor => Some(descriptor),
        }
    }

    /// Like [`TypeResolver::resolve`] but says why, naming the parameter (or "return") for the diagnostic
    pub fn resolve_for(&self, what: &str, shape: &TypeShape) -> Result<TypeDescriptor, Skip> {
        self.resolve(shape).ok_or_else(|| match shape {
            TypeShape::Varargs => Skip::Varargs,
            _ => Skip::UnknownType(what.to_string()),
        })
    }

    /// Resolve a return value. A missing return value or the `none` type mean there is nothing to return.
    pub fn resolve_return(&self, shape: Option<&TypeShape>) -> Result<ReturnType, Skip> {
        match shape {
            None => Ok(ReturnType::Void),
            Some(TypeShape::Direct(TypeName {
                name: Some(name), ..
            })) if name.as_str() == "none" => Ok(ReturnType::Void),
            Some(shape) => match self.resolve_for("return", shape)? {
                TypeDescriptor::Array { .. } => Err(Skip::ArrayReturn),
                descriptor => Ok(ReturnType::Value(descriptor)),
            },
        }
    }

    fn direct(&self, t: &TypeName) -> TypeDescriptor {
        let name = t.name.as_ref().map(|n| n.as_str());
        let c_type = t.c_type.as_ref().map(|c| c.as_str());
        let native = name.or(c_type).unwrap_or_default().to_string();
        let c_name = c_type.unwrap_or_default().to_string();
        let is_pointer = c_name.trim_end().ends_with('*');

        let ada_type = |mapping: Mapping| AdaType {
            native: native.clone(),
            c_type: c_name.clone(),
            mapping,
        };

        if let Some((_, mapping)) = self.table.lookup(name, c_type) {
            trace!("{native} is a table scalar");
            let by_reference = is_pointer && !mapping.native_pointer;
            return TypeDescriptor::Scalar {
                ty: ada_type(mapping.clone()),
                by_reference,
            };
        }

        let Some(name) = name.filter(|n| !n.is_empty() && *n != "none") else {
            return TypeDescriptor::Unknown(format!("<type c:type=\"{c_name}\"/>"));
        };

        if self.repository.is_enumeration(name) {
            let enums = format!("{}.Enums", self.naming.case(self.naming.namespace()));
            return TypeDescriptor::Scalar {
                ty: ada_type(Mapping::direct(&self.naming.type_name(name), Some(&enums))),
                by_reference: is_pointer,
            };
        }

        if self.repository.is_class(name) || is_pointer {
            return TypeDescriptor::ObjectPointer(ada_type(self.object(name)));
        }

        // not declared anywhere we can see: most likely an enumeration from a dependency
        TypeDescriptor::Scalar {
            ty: ada_type(Mapping::direct(&self.naming.type_name(name), None)),
            by_reference: false,
        }
    }

    fn object(&self, name: &str) -> Mapping {
        let ty = self.naming.type_name(name);
        let stub = format!("Stub_{ty}");
        Mapping {
            param: format!("access {ty}_Record'Class"),
            result: ty.clone(),
            foreign: "System.Address".to_string(),
            to_c: Conversion::expr("Get_Object_Or_Null (GObject ({}))"),
            from_c: Conversion::expr(&format!("{ty} (Get_User_Data ({{}}, {stub}))"))
                .with_local(&format!("{stub} : {ty}_Record;")),
            packages: vec![
                "Glib.Object".to_string(),
                "System".to_string(),
                self.naming.package_name(name),
            ],
            native_pointer: true,
        }
    }

    fn array(&self, t: &TypeName) -> TypeDescriptor {
        // some entries omit the element's semantic name, in which case its C type stands in for it
        let native = t
            .name
            .or(t.c_type)
            .map(|n| n.to_string())
            .unwrap_or_default();
        let c_name = t.c_type.map(|c| c.to_string()).unwrap_or_default();

        let element = self.direct(t);
        let canonical = self
            .table
            .lookup(Some(&native), Some(&c_name))
            .map(|(k, _)| k.to_string())
            .unwrap_or_else(|| native.clone());

        let mapping = match self.table.lookup_array(&canonical) {
            Some(mapping) => mapping.clone(),
            None => {
                let (elem_ty, mut packages) = match element.ada_type() {
                    Some(ty) => (ty.result().to_string(), ty.packages().to_vec()),
                    None => return element,
                };
                packages.push("System".to_string());
                Mapping {
                    param: format!("{elem_ty}_Array"),
                    result: format!("{elem_ty}_Array"),
                    foreign: "System.Address".to_string(),
                    to_c: Conversion::expr("{} ({}'First)'Address"),
                    from_c: Conversion::identity(),
                    packages,
                    native_pointer: true,
                }
            }
        };

        TypeDescriptor::Array {
            ty: AdaType {
                native,
                c_type: c_name,
                mapping,
            },
            element: Box::new(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ustr::ustr;

    fn repo() -> Repository {
        Repository::from_str(
            r#"<repository xmlns="http://www.gtk.org/introspection/core/1.0">
                 <namespace name="Gtk">
                   <class name="Widget" parent="Object"/>
                   <enumeration name="WindowType"/>
                 </namespace>
               </repository>"#,
        )
        .unwrap()
    }

    fn direct(name: Option<&str>, c_type: Option<&str>) -> TypeShape {
        TypeShape::Direct(TypeName {
            name: name.map(ustr),
            c_type: c_type.map(ustr),
        })
    }

    fn array(name: Option<&str>, c_type: Option<&str>) -> TypeShape {
        TypeShape::Array {
            c_type: Some(ustr("gchar**")),
            element: Some(TypeName {
                name: name.map(ustr),
                c_type: c_type.map(ustr),
            }),
        }
    }

    #[test]
    fn direct_names_are_verbatim() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        for (name, c_type) in [
            ("gint", "gint"),
            ("utf8", "const gchar*"),
            ("Widget", "GtkWidget*"),
            ("WindowType", "GtkWindowType"),
            ("Gdk.Event", "GdkEvent*"),
            ("Mystery", "GtkMystery"),
        ] {
            let d = resolver.resolve(&direct(Some(name), Some(c_type))).unwrap();
            assert_eq!(d.native_name(), Some(name));
            assert_eq!(d.c_type(), Some(c_type));
        }
    }

    #[test]
    fn scalars_objects_and_enums() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        let d = resolver.resolve(&direct(Some("gboolean"), Some("gboolean"))).unwrap();
        assert!(matches!(d, TypeDescriptor::Scalar { by_reference: false, .. }));
        let ty = d.ada_type().unwrap();
        assert_eq!(ty.param(), "Boolean");
        assert_eq!(ty.foreign(), "Gboolean");
        assert_eq!(ty.to_c().apply("Modal"), "Boolean'Pos (Modal)");

        let d = resolver.resolve(&direct(Some("Widget"), Some("GtkWidget*"))).unwrap();
        assert!(matches!(d, TypeDescriptor::ObjectPointer(_)));
        let ty = d.ada_type().unwrap();
        assert_eq!(ty.param(), "access Gtk_Widget_Record'Class");
        assert_eq!(ty.result(), "Gtk_Widget");
        assert_eq!(ty.foreign(), "System.Address");
        assert!(ty.packages().contains(&"Gtk.Widget".to_string()));
        assert!(!d.is_pointer_like());

        let d = resolver
            .resolve(&direct(Some("WindowType"), Some("GtkWindowType")))
            .unwrap();
        let ty = d.ada_type().unwrap();
        assert_eq!(ty.param(), "Gtk_Window_Type");
        assert_eq!(ty.packages(), &["Gtk.Enums".to_string()]);
    }

    #[test]
    fn pointer_to_scalar_is_pointer_like() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        let d = resolver.resolve(&direct(Some("gfloat"), Some("gfloat*"))).unwrap();
        assert!(d.is_pointer_like());
        // strings are pointers natively but passed by value
        let d = resolver.resolve(&direct(Some("utf8"), Some("gchar*"))).unwrap();
        assert!(!d.is_pointer_like());
        assert!(d.ada_type().unwrap().to_c().temporary().is_some());
    }

    #[test]
    fn array_name_falls_back_to_c_type() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        let d = resolver.resolve(&array(None, Some("gchar*"))).unwrap();
        assert!(matches!(d, TypeDescriptor::Array { .. }));
        assert_eq!(d.native_name(), Some("gchar*"));
        assert_eq!(d.c_type(), Some("gchar*"));
        assert_eq!(d.ada_type().unwrap().param(), "GNAT.Strings.String_List");

        let d = resolver.resolve(&array(Some("gint"), Some("gint"))).unwrap();
        assert_eq!(d.native_name(), Some("gint"));
        let ty = d.ada_type().unwrap();
        assert_eq!(ty.param(), "Gint_Array");
        assert_eq!(ty.to_c().apply("Values"), "Values (Values'First)'Address");
    }

    #[test]
    fn array_without_nested_type_is_unknown() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        let shape = TypeShape::Array {
            c_type: Some(ustr("gpointer")),
            element: None,
        };
        assert_eq!(shape.to_string(), "[] (gpointer)");
        assert!(matches!(resolver.classify(&shape), TypeDescriptor::Unknown(_)));
        assert_eq!(resolver.resolve(&shape), None);
        assert_eq!(
            resolver.resolve_for("data", &shape),
            Err(Skip::UnknownType("data".to_string()))
        );
    }

    #[test]
    fn varargs_and_unrecognized_are_unbindable() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        assert_eq!(resolver.classify(&TypeShape::Varargs), TypeDescriptor::Variadic);
        assert_eq!(resolver.resolve_for("...", &TypeShape::Varargs), Err(Skip::Varargs));

        let shape = TypeShape::Unrecognized("<parameter name=\"cb\"/>".to_string());
        assert!(!resolver.classify(&shape).is_bindable());
        assert_eq!(resolver.resolve(&shape), None);
    }

    #[test]
    fn return_values() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);

        assert_eq!(resolver.resolve_return(None), Ok(ReturnType::Void));
        assert_eq!(
            resolver.resolve_return(Some(&direct(Some("none"), Some("void")))),
            Ok(ReturnType::Void)
        );
        assert!(matches!(
            resolver.resolve_return(Some(&direct(Some("gint"), Some("gint")))),
            Ok(ReturnType::Value(_))
        ));
        assert_eq!(
            resolver.resolve_return(Some(&array(Some("utf8"), Some("gchar*")))),
            Err(Skip::ArrayReturn)
        );
    }

    #[test]
    fn table_is_extensible() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let mut table = TypeTable::default();
        table.insert("cairo_t", Mapping::direct("Cairo.Cairo_Context", Some("Cairo")));
        let resolver = TypeResolver::with_table(&repo, &naming, table);

        let d = resolver.resolve(&direct(Some("cairo_t"), Some("cairo_t*"))).unwrap();
        assert_eq!(d.ada_type().unwrap().param(), "Cairo.Cairo_Context");
        assert!(d.is_pointer_like());
    }
}
