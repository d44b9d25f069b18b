//! Properties: resolved to the typed property constants of the Glib.Properties family of packages.

use girgen_extract::{Class, Property};
use hashbrown::HashMap;
use log::*;

use crate::adatype::{TypeDescriptor, TypeResolver};
use crate::error::Skip;

/// A property ready to be declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBinding {
    /// e.g. "label-xalign"
    pub native_name: String,
    /// e.g. "Label_Xalign_Property"
    pub ada_name: String,
    /// The Ada type of the property value, e.g. "Float" or "Gtk_Shadow_Type"
    pub type_name: String,
    /// The package declaring `Property_<type_name>`, e.g. "Glib.Properties"
    pub package: String,
    /// "read-write", "read" or "write"
    pub flags: &'static str,
    pub doc: Option<String>,
}

impl PropertyBinding {
    /// The declared type of the constant, e.g. "Glib.Properties.Property_Float"
    pub fn property_type(&self) -> String {
        format!("{}.Property_{}", self.package, self.type_name)
    }
}

/// Maps native property types to the suffix of their property type
#[derive(Debug, Clone)]
pub struct PropertyTypes {
    by_native: HashMap<String, String>,
    package: String,
    object: String,
}

impl Default for PropertyTypes {
    fn default() -> Self {
        let by_native = [
            ("utf8", "String"),
            ("filename", "String"),
            ("gdouble", "Double"),
            ("gint", "Int"),
            ("guint", "Uint"),
            ("glong", "Long"),
            ("gulong", "Ulong"),
            ("gboolean", "Boolean"),
            ("gfloat", "Float"),
            ("gchar", "Char"),
            ("guchar", "Uchar"),
            ("gunichar", "Unichar"),
            ("gpointer", "Pointer"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        PropertyTypes {
            by_native,
            package: "Glib.Properties".to_string(),
            object: "Object".to_string(),
        }
    }
}

impl PropertyTypes {
    pub fn insert(&mut self, native: &str, suffix: &str) -> &mut Self {
        self.by_native.insert(native.to_string(), suffix.to_string());
        self
    }

    pub fn resolve(
        &self,
        resolver: &TypeResolver,
        property: &Property,
    ) -> Result<PropertyBinding, Skip> {
        let naming = resolver.naming();
        let descriptor = resolver.resolve_for(property.name(), property.shape())?;

        let (type_name, package) = match &descriptor {
            TypeDescriptor::Scalar { ty, .. } => match self.by_native.get(&ty.native) {
                Some(suffix) => (suffix.clone(), self.package.clone()),
                None => {
                    let ada = ty.param().to_string();
                    // the toolkit's own enumerations have their property types in a separate package
                    let ns = naming.case(naming.namespace());
                    if ada.starts_with(&format!("{ns}_")) {
                        (ada, format!("{ns}.Enums"))
                    } else {
                        (ada, self.package.clone())
                    }
                }
            },
            TypeDescriptor::ObjectPointer(_) => (self.object.clone(), self.package.clone()),
            other => {
                return Err(Skip::UnsupportedProperty(other.to_string()));
            }
        };

        let flags = match (property.readable(), property.writable()) {
            (true, true) => "read-write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "",
        };

        Ok(PropertyBinding {
            native_name: property.name().to_string(),
            ada_name: format!("{}_Property", naming.case(property.name())),
            type_name,
            package,
            flags,
            doc: property.doc().map(str::to_string),
        })
    }

    /// Resolve all of a class's properties, sorted by native name. Unresolvable ones are returned separately with
    /// the reason.
    pub fn bind_class(
        &self,
        resolver: &TypeResolver,
        class: &Class,
    ) -> (Vec<PropertyBinding>, Vec<(String, Skip)>) {
        let mut bound = Vec::new();
        let mut skipped = Vec::new();

        for property in class.properties() {
            match self.resolve(resolver, property) {
                Ok(binding) => bound.push(binding),
                Err(reason) => {
                    debug!("skipping property {}: {reason}", property.name());
                    skipped.push((property.name().to_string(), reason));
                }
            }
        }

        bound.sort_by(|a, b| a.native_name.cmp(&b.native_name));
        (bound, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Naming;
    use girgen_extract::Repository;
    use indoc::indoc;

    fn repo() -> Repository {
        Repository::from_str(indoc! {r#"
            <repository xmlns="http://www.gtk.org/introspection/core/1.0"
                        xmlns:c="http://www.gtk.org/introspection/c/1.0">
              <namespace name="Gtk">
                <class name="Widget"/>
                <class name="Window" parent="Bin">
                  <property name="type" writable="1" construct-only="1">
                    <doc>The type of the window</doc>
                    <type name="WindowType"/>
                  </property>
                  <property name="modal" writable="1">
                    <type name="gboolean" c:type="gboolean"/>
                  </property>
                  <property name="attached-to" writable="1">
                    <type name="Widget"/>
                  </property>
                  <property name="is-active" writable="0">
                    <type name="gboolean" c:type="gboolean"/>
                  </property>
                  <property name="mnemonics">
                    <array><type name="utf8"/></array>
                  </property>
                </class>
                <enumeration name="WindowType"/>
              </namespace>
            </repository>
        "#})
        .unwrap()
    }

    #[test]
    fn properties_are_sorted_and_typed() {
        let repo = repo();
        let naming = Naming::new("Gtk");
        let resolver = TypeResolver::new(&repo, &naming);
        let class = repo.get_class("Window").unwrap();

        let (bound, skipped) = PropertyTypes::default().bind_class(&resolver, class);

        let names = bound.iter().map(|p| p.native_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["attached-to", "is-active", "modal", "type"]);

        assert_eq!(bound[0].property_type(), "Glib.Properties.Property_Object");
        assert_eq!(bound[1].flags, "read");
        assert_eq!(bound[2].ada_name, "Modal_Property");
        assert_eq!(bound[2].property_type(), "Glib.Properties.Property_Boolean");
        assert_eq!(bound[2].flags, "read-write");
        assert_eq!(bound[3].property_type(), "Gtk.Enums.Property_Gtk_Window_Type");
        assert_eq!(bound[3].doc.as_deref(), Some("The type of the window"));

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].0, "mnemonics");
        assert!(matches!(skipped[0].1, Skip::UnsupportedProperty(_)));
    }
}
