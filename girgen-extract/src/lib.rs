//! Loading of the two inputs to a generation run: the introspection document and the override database.

pub mod error;
pub mod gir;
pub mod index_map;
pub mod overrides;
pub mod xml;

pub use gir::{
    Callable, CallableKind, Class, Deprecation, Parameter, Property, Repository, TypeName,
    TypeShape,
};
pub use overrides::{MethodOverride, OverrideRegistry, Overrides, PackageOverride, TypeOverride};

#[cfg(test)]
pub(crate) fn get_test_filename(base: &str) -> String {
    std::path::PathBuf::from(std::env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(base)
        .as_os_str()
        .to_string_lossy()
        .to_string()
}
