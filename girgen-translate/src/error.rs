/// Why a construct was left out of the generated binding.
///
/// None of these are failures: the run carries on and the reason is reported as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("binding disabled by override")]
    NotBound,
    #[error("varargs")]
    Varargs,
    #[error("unknown type for \"{0}\"")]
    UnknownType(String),
    #[error("arrays cannot be returned")]
    ArrayReturn,
    #[error("unsupported property type \"{0}\"")]
    UnsupportedProperty(String),
}
