use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Extraction error")]
    ExtractError(#[from] girgen_extract::error::Error),
    #[error("Failed to generate class \"{name}\"")]
    FailedToGenerateClass {
        name: String,
        source: Box<dyn std::error::Error + 'static + Send + Sync>,
    },
    #[error("Failed to compile doc cleanup pattern")]
    InvalidPattern(#[from] regex::Error),
    #[error("String formatting error while generating")]
    FormatError(#[from] std::fmt::Error),
    #[error("Failed to write output to \"{path}\"")]
    FailedToWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
