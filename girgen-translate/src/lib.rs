//! Translation of the extracted introspection data into Ada declarations: type resolution, naming, and the
//! lowering of callables to thin wrappers around their C symbols.

pub mod ada;
pub mod adatype;
pub mod error;
pub mod naming;
pub mod property;
pub mod subprogram;

pub use ada::{AdaParameter, Body, Mode, Subprogram};
pub use adatype::{
    AdaType, Conversion, Mapping, ReturnType, Temporary, TypeDescriptor, TypeResolver, TypeTable,
};
pub use error::Skip;
pub use naming::{resolve_name, title, Naming};
pub use property::{PropertyBinding, PropertyTypes};
pub use subprogram::{ClassNames, Signature, SignatureBuilder, SignatureParameter};
