//! Building Ada signatures from constructors, methods and signals, and lowering them to thin wrappers around the
//! imported C symbol.

use girgen_extract::{Callable, CallableKind, Class, Deprecation, Overrides};
use log::*;
use tracing::instrument;

use crate::ada::{AdaParameter, Body, Mode, Subprogram};
use crate::adatype::{ReturnType, TypeDescriptor, TypeResolver};
use crate::error::Skip;
use crate::naming::{resolve_name, title, Naming};

/// The Ada names derived from a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// e.g. "Gtk.Frame"
    pub package: String,
    /// e.g. "Gtk_Frame"
    pub type_name: String,
    /// e.g. "Gtk_Frame_Record"
    pub record: String,
}

impl ClassNames {
    pub fn new(naming: &Naming, class: &str) -> ClassNames {
        let type_name = naming.type_name(class);
        ClassNames {
            package: naming.package_name(class),
            record: format!("{type_name}_Record"),
            type_name,
        }
    }
}

/// A parameter whose type resolved. The mode always agrees with the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParameter {
    name: String,
    native_name: String,
    ty: TypeDescriptor,
    mode: Mode,
    default: Option<String>,
    doc: Option<String>,
}

impl SignatureParameter {
    pub fn new(
        naming: &Naming,
        native_name: &str,
        ty: TypeDescriptor,
        default: Option<&str>,
        doc: Option<&str>,
    ) -> SignatureParameter {
        SignatureParameter {
            name: naming.parameter(native_name),
            native_name: native_name.to_string(),
            mode: Mode::for_type(&ty),
            ty,
            default: default.map(str::to_string),
            doc: doc.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn public(&self) -> AdaParameter {
        // resolved parameters are always bindable
        let ty = self.ty.ada_type().map(|t| t.param()).unwrap_or_default();
        AdaParameter::new(&self.name, self.mode, ty).with_default(self.default())
    }

    fn foreign(&self) -> AdaParameter {
        let ty = self.ty.ada_type().map(|t| t.foreign()).unwrap_or_default();
        AdaParameter::new(&self.name, self.mode, ty)
    }
}

/// A callable whose every type resolved, with its final Ada name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    kind: CallableKind,
    native_id: String,
    native_name: String,
    ada_name: String,
    parameters: Vec<SignatureParameter>,
    returns: ReturnType,
    doc: Option<String>,
    deprecation: Option<Deprecation>,
}

impl Signature {
    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// The C symbol, or the signal name for signals
    pub fn native_id(&self) -> &str {
        &self.native_id
    }

    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn ada_name(&self) -> &str {
        &self.ada_name
    }

    pub fn parameters(&self) -> &[SignatureParameter] {
        &self.parameters
    }

    pub fn returns(&self) -> &ReturnType {
        &self.returns
    }

    pub fn deprecation(&self) -> Option<&Deprecation> {
        self.deprecation.as_ref()
    }

    /// Packages the generated code for this signature refers to
    pub fn packages(&self) -> Vec<String> {
        let returned = match &self.returns {
            ReturnType::Value(d) => d.ada_type(),
            ReturnType::Void => None,
        };

        let mut result = self
            .parameters
            .iter()
            .filter_map(|p| p.ty.ada_type())
            .chain(returned)
            .flat_map(|t| t.packages().iter().cloned())
            .collect::<Vec<_>>();

        result.sort();
        result.dedup();
        result
    }

    /// Documentation paragraphs: the description, the deprecation notice, then one line per documented parameter
    pub fn doc_paragraphs(&self) -> Vec<String> {
        let mut result = Vec::new();
        if let Some(doc) = &self.doc {
            result.push(doc.clone());
        }

        if let Some(deprecation) = &self.deprecation {
            let since = deprecation
                .version
                .as_ref()
                .map(|v| format!(" since {v}"))
                .unwrap_or_default();
            result.push(format!(
                "Deprecated{since}, use {}",
                deprecation.replacement
            ));
        }

        for p in &self.parameters {
            if let Some(doc) = p.doc() {
                result.push(format!("\"{}\": {}", p.name, doc));
            }
        }

        result
    }
}

/// Turns extracted callables into signatures, honouring the overrides
pub struct SignatureBuilder<'a> {
    resolver: &'a TypeResolver<'a>,
    overrides: &'a dyn Overrides,
}

impl<'a> SignatureBuilder<'a> {
    pub fn new(resolver: &'a TypeResolver<'a>, overrides: &'a dyn Overrides) -> SignatureBuilder<'a> {
        SignatureBuilder {
            resolver,
            overrides,
        }
    }

    fn naming(&self) -> &Naming {
        self.resolver.naming()
    }

    /// Resolve a callable's parameters and return type and pick its Ada name.
    ///
    /// Fails with the reason the callable cannot be bound: an override says not to, or one of its types did not
    /// resolve.
    #[instrument(level = "trace", skip(self), fields(id = callable.identifier()))]
    pub fn build(&self, callable: &Callable) -> Result<Signature, Skip> {
        let id = callable.identifier();
        if !self.overrides.bind(id) {
            return Err(Skip::NotBound);
        }

        let parameters = callable
            .parameters()
            .iter()
            .map(|p| {
                let ty = self.resolver.resolve_for(p.name(), p.shape())?;
                Ok(SignatureParameter::new(
                    self.naming(),
                    p.name(),
                    ty,
                    self.overrides.get_default(id, p.name()),
                    p.doc(),
                ))
            })
            .collect::<Result<Vec<_>, Skip>>()?;

        let returns = match callable.kind() {
            // constructors hand back the new object's address, which Initialize stores
            CallableKind::Constructor => ReturnType::Void,
            CallableKind::Method | CallableKind::Signal => {
                self.resolver.resolve_return(callable.return_value())?
            }
        };

        let rename = self.overrides.ada_name(id);
        let ada_name = match callable.kind() {
            CallableKind::Constructor => resolve_name(
                rename,
                None,
                format!(
                    "{}_{}",
                    self.naming().case(self.naming().namespace()),
                    title(callable.name())
                ),
            ),
            CallableKind::Method => {
                resolve_name(rename, Some(title(callable.name())), title(callable.name()))
            }
            CallableKind::Signal => {
                resolve_name(rename, None, format!("Signal_{}", self.naming().case(callable.name())))
            }
        };

        debug!("{id} -> {ada_name}");

        Ok(Signature {
            kind: callable.kind(),
            native_id: id.to_string(),
            native_name: callable.name().to_string(),
            ada_name,
            parameters,
            returns,
            doc: callable.doc().map(str::to_string),
            deprecation: callable.deprecation().cloned(),
        })
    }

    /// A constructor becomes a pair: `Gtk_New`, which allocates, and `Initialize`, which calls the C constructor
    pub fn constructor(&self, class: &ClassNames, sig: &Signature) -> Vec<Subprogram> {
        let init_name = sig.ada_name.replace(
            &format!("{}_New", self.naming().case(self.naming().namespace())),
            "Initialize",
        );

        let call = lower_call(sig, None);

        let mut initialize = Subprogram::procedure(&init_name);
        initialize.parameters.push(AdaParameter::new(
            "Self",
            Mode::Access,
            &format!("{}'Class", class.record),
        ));
        initialize
            .parameters
            .extend(sig.parameters.iter().map(SignatureParameter::public));
        let mut statements = vec![format!("Set_Object (Self, {});", call.expression)];
        statements.extend(call.cleanups);
        initialize.body = Body::Code {
            nested: vec![call.internal],
            locals: call.locals,
            statements,
        };

        let mut allocate = Subprogram::procedure(&sig.ada_name);
        allocate
            .parameters
            .push(AdaParameter::new("Self", Mode::Out, &class.type_name));
        allocate
            .parameters
            .extend(sig.parameters.iter().map(SignatureParameter::public));
        allocate.doc = sig.doc_paragraphs();
        let args = std::iter::once("Self".to_string())
            .chain(sig.parameters.iter().map(|p| p.name.clone()))
            .collect::<Vec<_>>()
            .join(", ");
        allocate.body = Body::Code {
            nested: Vec::new(),
            locals: Vec::new(),
            statements: vec![
                format!("Self := new {};", class.record),
                format!("{init_name} ({args});"),
            ],
        };

        vec![allocate, initialize]
    }

    /// A method becomes a wrapper taking the object first
    pub fn method(&self, class: &ClassNames, sig: &Signature) -> Subprogram {
        let call = lower_call(sig, Some("Get_Object (Self)"));

        let mut result = match &sig.returns {
            ReturnType::Void => Subprogram::procedure(&sig.ada_name),
            ReturnType::Value(d) => Subprogram::function(
                &sig.ada_name,
                d.ada_type().map(|t| t.result()).unwrap_or_default(),
            ),
        };
        result
            .parameters
            .push(AdaParameter::new("Self", Mode::Access, &class.record));
        result
            .parameters
            .extend(sig.parameters.iter().map(SignatureParameter::public));
        result.doc = sig.doc_paragraphs();

        let mut locals = call.locals;
        let mut statements = Vec::new();
        let returned = match &sig.returns {
            ReturnType::Value(d) => d.ada_type(),
            ReturnType::Void => None,
        };
        match returned {
            None => {
                statements.push(format!("{};", call.expression));
                statements.extend(call.cleanups);
            }
            Some(t) => {
                let (foreign, from_c) = (t.foreign(), t.from_c());
                if let Some(local) = from_c.local() {
                    locals.push(local.to_string());
                }
                if call.cleanups.is_empty() {
                    statements.push(format!("return {};", from_c.apply(&call.expression)));
                } else {
                    locals.push(format!("Tmp_Return : {foreign};"));
                    statements.push(format!("Tmp_Return := {};", call.expression));
                    statements.extend(call.cleanups);
                    statements.push(format!("return {};", from_c.apply("Tmp_Return")));
                }
            }
        }

        result.body = Body::Code {
            nested: vec![call.internal],
            locals,
            statements,
        };
        result
    }

    /// The profile a handler connected to this signal must have
    pub fn signal_handler(&self, class: &ClassNames, sig: &Signature) -> Subprogram {
        let mut result = match &sig.returns {
            ReturnType::Void => Subprogram::procedure("Handler"),
            ReturnType::Value(d) => {
                Subprogram::function("Handler", d.ada_type().map(|t| t.result()).unwrap_or_default())
            }
        };
        result.parameters.push(AdaParameter::new(
            "Self",
            Mode::Access,
            &format!("{}'Class", class.record),
        ));
        result
            .parameters
            .extend(sig.parameters.iter().map(SignatureParameter::public));
        result
    }

    /// `function Get_Type return Glib.GType`, imported directly. `None` if the class has no type function.
    pub fn get_type(&self, class: &Class) -> Result<Option<Subprogram>, Skip> {
        let Some(symbol) = class.get_type() else {
            return Ok(None);
        };

        if !self.overrides.bind(symbol) {
            return Err(Skip::NotBound);
        }

        let name = resolve_name(self.overrides.ada_name(symbol), None, "Get_Type".to_string());
        let mut result = Subprogram::function(&name, "Glib.GType");
        result.body = Body::Import(symbol.to_string());
        Ok(Some(result))
    }
}

struct LoweredCall {
    /// The imported C function
    internal: Subprogram,
    /// The call to it, with converted arguments
    expression: String,
    locals: Vec<String>,
    /// Statements to run after the call: frees, and copies back into out parameters
    cleanups: Vec<String>,
}

fn lower_call(sig: &Signature, receiver: Option<&str>) -> LoweredCall {
    let returns = match (&sig.kind, &sig.returns) {
        (CallableKind::Constructor, _) => Some("System.Address".to_string()),
        (_, ReturnType::Value(d)) => d.ada_type().map(|t| t.foreign().to_string()),
        (_, ReturnType::Void) => None,
    };

    let mut internal = match returns {
        Some(ty) => Subprogram::function("Internal", &ty),
        None => Subprogram::procedure("Internal"),
    };
    internal.body = Body::Import(sig.native_id.clone());

    let mut args = Vec::new();
    let mut locals = Vec::new();
    let mut cleanups = Vec::new();

    if let Some(receiver) = receiver {
        internal
            .parameters
            .push(AdaParameter::new("Self", Mode::In, "System.Address"));
        args.push(receiver.to_string());
    }

    for p in &sig.parameters {
        internal.parameters.push(p.foreign());

        let Some(ty) = p.ty.ada_type() else {
            continue;
        };
        let to_c = ty.to_c();

        // an out parameter cannot take a converted expression: C writes into a foreign temporary which is
        // converted back once the call returns
        if p.ty.is_pointer_like() && !to_c.is_identity() {
            let var = format!("Tmp_{}", p.name);
            locals.push(format!("{var} : {};", ty.foreign()));
            args.push(var.clone());
            cleanups.push(format!("{} := {};", p.name, ty.from_c().apply(&var)));
            continue;
        }

        if let Some(local) = to_c.local() {
            locals.push(local.to_string());
        }
        match to_c.temporary() {
            Some(tmp) => {
                let var = format!("Tmp_{}", p.name);
                locals.push(format!("{var} : {} := {};", tmp.ty, tmp.init(&p.name)));
                args.push(to_c.apply(&var));
                cleanups.extend(tmp.cleanup(&var));
            }
            None => args.push(to_c.apply(&p.name)),
        }
    }

    let expression = if args.is_empty() {
        "Internal".to_string()
    } else {
        format!("Internal ({})", args.join(", "))
    };

    locals.dedup();

    LoweredCall {
        internal,
        expression,
        locals,
        cleanups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use girgen_extract::{MethodOverride, OverrideRegistry, Repository};
    use indoc::indoc;

    fn repo() -> Repository {
        Repository::from_str(indoc! {r#"
            <repository xmlns="http://www.gtk.org/introspection/core/1.0"
                        xmlns:c="http://www.gtk.org/introspection/c/1.0"
                        xmlns:glib="http://www.gtk.org/introspection/glib/1.0">
              <namespace name="Gtk">
                <class name="Widget" parent="Object"/>
                <class name="Frame" parent="Bin" glib:get-type="gtk_frame_get_type">
                  <constructor name="new" c:identifier="gtk_frame_new">
                    <doc>Creates a new frame</doc>
                    <return-value><type name="Widget" c:type="GtkWidget*"/></return-value>
                    <parameters>
                      <parameter name="label">
                        <doc>the text to use as the label</doc>
                        <type name="utf8" c:type="const gchar*"/>
                      </parameter>
                    </parameters>
                  </constructor>
                  <method name="get_label" c:identifier="gtk_frame_get_label">
                    <return-value><type name="utf8" c:type="const gchar*"/></return-value>
                  </method>
                  <method name="set_label" c:identifier="gtk_frame_set_label">
                    <return-value><type name="none" c:type="void"/></return-value>
                    <parameters>
                      <parameter name="label"><type name="utf8" c:type="const gchar*"/></parameter>
                    </parameters>
                  </method>
                  <method name="get_label_align" c:identifier="gtk_frame_get_label_align">
                    <return-value><type name="none" c:type="void"/></return-value>
                    <parameters>
                      <parameter name="xalign"><type name="gfloat" c:type="gfloat*"/></parameter>
                    </parameters>
                  </method>
                  <method name="get_label_visible" c:identifier="gtk_frame_get_label_visible">
                    <return-value><type name="none" c:type="void"/></return-value>
                    <parameters>
                      <parameter name="visible"><type name="gboolean" c:type="gboolean*"/></parameter>
                    </parameters>
                  </method>
                  <method name="set_labels" c:identifier="gtk_frame_set_labels">
                    <parameters>
                      <parameter name="first"><type name="utf8" c:type="const gchar*"/></parameter>
                      <parameter name="..."><varargs/></parameter>
                    </parameters>
                  </method>
                  <method name="set_shadow_type" c:identifier="gtk_frame_set_shadow_type"
                          deprecated="gtk_frame_set_border_style" deprecated-version="2.24">
                    <parameters>
                      <parameter name="type"><type name="ShadowType" c:type="GtkShadowType"/></parameter>
                    </parameters>
                  </method>
                  <method name="get_label_widget" c:identifier="gtk_frame_get_label_widget">
                    <return-value><type name="Widget" c:type="GtkWidget*"/></return-value>
                  </method>
                  <glib:signal name="label-changed">
                    <parameters>
                      <parameter name="widget"><type name="Widget" c:type="GtkWidget*"/></parameter>
                    </parameters>
                  </glib:signal>
                </class>
                <enumeration name="ShadowType"/>
              </namespace>
            </repository>
        "#})
        .unwrap()
    }

    fn find<'c>(class: &'c Class, name: &str) -> &'c Callable {
        class
            .constructors()
            .iter()
            .chain(class.methods())
            .chain(class.signals())
            .find(|c| c.name() == name)
            .unwrap()
    }

    struct Fixture {
        repo: Repository,
        naming: Naming,
        overrides: OverrideRegistry,
    }

    impl Fixture {
        fn new() -> Fixture {
            Fixture {
                repo: repo(),
                naming: Naming::new("Gtk"),
                overrides: OverrideRegistry::new(),
            }
        }

        fn build(&self, name: &str) -> Result<Signature, Skip> {
            let resolver = TypeResolver::new(&self.repo, &self.naming);
            let builder = SignatureBuilder::new(&resolver, &self.overrides);
            let class = self.repo.get_class("Frame").unwrap();
            builder.build(find(class, name))
        }

        fn lower(&self, name: &str) -> Vec<Subprogram> {
            let resolver = TypeResolver::new(&self.repo, &self.naming);
            let builder = SignatureBuilder::new(&resolver, &self.overrides);
            let names = ClassNames::new(&self.naming, "Frame");
            let sig = self.build(name).unwrap();
            match sig.kind() {
                CallableKind::Constructor => builder.constructor(&names, &sig),
                CallableKind::Method => vec![builder.method(&names, &sig)],
                CallableKind::Signal => vec![builder.signal_handler(&names, &sig)],
            }
        }
    }

    #[test]
    fn constructor_is_lowered_to_a_pair() {
        let mut fx = Fixture::new();
        fx.overrides
            .add_method("gtk_frame_new", MethodOverride::default().with_default("label", "\"\""));

        let subprograms = fx.lower("new");
        assert_eq!(subprograms.len(), 2);

        let allocate = &subprograms[0];
        assert_eq!(allocate.name, "Gtk_New");
        assert_eq!(allocate.parameters[0].to_string(), "Self : out Gtk_Frame");
        assert_eq!(allocate.parameters[1].to_string(), "Label : UTF8_String := \"\"");
        assert_eq!(
            allocate.doc,
            vec![
                "Creates a new frame".to_string(),
                "\"Label\": the text to use as the label".to_string()
            ]
        );
        assert_eq!(
            allocate.body,
            Body::Code {
                nested: vec![],
                locals: vec![],
                statements: vec![
                    "Self := new Gtk_Frame_Record;".to_string(),
                    "Initialize (Self, Label);".to_string()
                ],
            }
        );

        let initialize = &subprograms[1];
        assert_eq!(initialize.name, "Initialize");
        assert_eq!(
            initialize.parameters[0].to_string(),
            "Self : access Gtk_Frame_Record'Class"
        );
        let Body::Code { nested, locals, statements } = &initialize.body else {
            panic!("Initialize has no body");
        };
        assert_eq!(nested[0].body, Body::Import("gtk_frame_new".to_string()));
        assert_eq!(nested[0].returns.as_deref(), Some("System.Address"));
        assert_eq!(
            locals,
            &vec!["Tmp_Label : Interfaces.C.Strings.chars_ptr := New_String (Label);".to_string()]
        );
        assert_eq!(
            statements,
            &vec![
                "Set_Object (Self, Internal (Tmp_Label));".to_string(),
                "Free (Tmp_Label);".to_string()
            ]
        );
    }

    #[test]
    fn renamed_constructor_renames_initialize() {
        let mut fx = Fixture::new();
        fx.overrides
            .add_method("gtk_frame_new", MethodOverride::renamed("Gtk_New_With_Label"));
        let subprograms = fx.lower("new");
        assert_eq!(subprograms[0].name, "Gtk_New_With_Label");
        assert_eq!(subprograms[1].name, "Initialize_With_Label");
    }

    #[test]
    fn method_with_string_return() {
        let fx = Fixture::new();
        let method = &fx.lower("get_label")[0];
        assert_eq!(method.name, "Get_Label");
        assert_eq!(method.returns.as_deref(), Some("UTF8_String"));
        assert_eq!(method.parameters[0].to_string(), "Self : access Gtk_Frame_Record");
        let Body::Code { nested, statements, .. } = &method.body else {
            panic!("method has no body");
        };
        assert_eq!(nested[0].parameters[0].to_string(), "Self : System.Address");
        assert_eq!(
            statements,
            &vec!["return Interfaces.C.Strings.Value (Internal (Get_Object (Self)));".to_string()]
        );
    }

    #[test]
    fn procedure_frees_its_temporaries() {
        let fx = Fixture::new();
        let method = &fx.lower("set_label")[0];
        assert!(!method.is_function());
        let Body::Code { statements, .. } = &method.body else {
            panic!("method has no body");
        };
        assert_eq!(
            statements,
            &vec![
                "Internal (Get_Object (Self), Tmp_Label);".to_string(),
                "Free (Tmp_Label);".to_string()
            ]
        );
    }

    #[test]
    fn object_return_uses_a_stub() {
        let fx = Fixture::new();
        let method = &fx.lower("get_label_widget")[0];
        assert_eq!(method.returns.as_deref(), Some("Gtk_Widget"));
        let Body::Code { locals, statements, .. } = &method.body else {
            panic!("method has no body");
        };
        assert_eq!(locals, &vec!["Stub_Gtk_Widget : Gtk_Widget_Record;".to_string()]);
        assert_eq!(
            statements,
            &vec![
                "return Gtk_Widget (Get_User_Data (Internal (Get_Object (Self)), Stub_Gtk_Widget));"
                    .to_string()
            ]
        );
    }

    #[test]
    fn pointer_like_parameters_are_out() {
        let fx = Fixture::new();
        let sig = fx.build("get_label_align").unwrap();
        assert_eq!(sig.parameters()[0].mode(), Mode::Out);
        let method = &fx.lower("get_label_align")[0];
        assert_eq!(method.parameters[1].to_string(), "Xalign : out Gfloat");
    }

    #[test]
    fn converted_out_parameters_go_through_a_temporary() {
        let fx = Fixture::new();
        let method = &fx.lower("get_label_visible")[0];
        assert_eq!(method.parameters[1].to_string(), "Visible : out Boolean");
        let Body::Code { nested, locals, statements } = &method.body else {
            panic!("method has no body");
        };
        assert_eq!(nested[0].parameters[1].to_string(), "Visible : out Gboolean");
        assert_eq!(locals, &vec!["Tmp_Visible : Gboolean;".to_string()]);
        assert_eq!(
            statements,
            &vec![
                "Internal (Get_Object (Self), Tmp_Visible);".to_string(),
                "Visible := Boolean'Val (Tmp_Visible);".to_string()
            ]
        );
        assert!(!statements.iter().any(|s| s.contains("Boolean'Pos")));
    }

    #[test]
    fn reserved_parameter_names_and_deprecation() {
        let fx = Fixture::new();
        let sig = fx.build("set_shadow_type").unwrap();
        assert_eq!(sig.parameters()[0].name(), "The_Type");
        assert_eq!(sig.parameters()[0].native_name(), "type");
        assert_eq!(
            sig.doc_paragraphs(),
            vec!["Deprecated since 2.24, use gtk_frame_set_border_style".to_string()]
        );
        assert_eq!(sig.packages(), vec!["Gtk.Enums".to_string()]);
    }

    #[test]
    fn varargs_and_unbound_are_skipped() {
        let mut fx = Fixture::new();
        assert_eq!(fx.build("set_labels"), Err(Skip::Varargs));

        fx.overrides
            .add_method("gtk_frame_get_label_widget", MethodOverride::unbound());
        assert_eq!(fx.build("get_label_widget"), Err(Skip::NotBound));
    }

    #[test]
    fn signal_handler_profile() {
        let fx = Fixture::new();
        let sig = fx.build("label-changed").unwrap();
        assert_eq!(sig.ada_name(), "Signal_Label_Changed");
        let handler = &fx.lower("label-changed")[0];
        assert_eq!(handler.name, "Handler");
        assert_eq!(handler.body, Body::None);
        assert_eq!(
            handler.parameters[1].to_string(),
            "Widget : access Gtk_Widget_Record'Class"
        );
    }

    #[test]
    fn get_type_honours_overrides() {
        let mut fx = Fixture::new();
        let resolver = TypeResolver::new(&fx.repo, &fx.naming);
        let class = fx.repo.get_class("Frame").unwrap();

        let builder = SignatureBuilder::new(&resolver, &fx.overrides);
        let get_type = builder.get_type(class).unwrap().unwrap();
        assert_eq!(get_type.name, "Get_Type");
        assert_eq!(get_type.body, Body::Import("gtk_frame_get_type".to_string()));

        let mut overrides = OverrideRegistry::new();
        overrides.add_method("gtk_frame_get_type", MethodOverride::renamed("Get_Frame_Type"));
        fx.overrides = overrides;
        let builder = SignatureBuilder::new(&resolver, &fx.overrides);
        assert_eq!(builder.get_type(class).unwrap().unwrap().name, "Get_Frame_Type");
    }
}
