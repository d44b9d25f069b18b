use girgen_util::Trace;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse \"{path}\"")]
    FailedToParseFile { path: String, source: ParseError },
    #[error("Failed to parse document")]
    Parse(#[from] ParseError),
    #[error("Could not find class \"{name}\" in namespace \"{namespace}\"")]
    ClassNotFound {
        name: String,
        namespace: String,
        source: Trace,
    },
    #[error("Could not read \"{path}\"")]
    FailedToRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not extract class \"{name}\"")]
    FailedToExtractClass {
        name: String,
        source: Box<dyn std::error::Error + 'static + Send + Sync>,
    },
}

/// Structural problems with an input document. These always abort the run.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("XML error at byte {position}")]
    Xml {
        position: u64,
        source: quick_xml::Error,
    },
    #[error("Malformed attribute at byte {position}")]
    Attribute {
        position: u64,
        source: quick_xml::events::attributes::AttrError,
    },
    #[error("Undeclared namespace prefix \"{0}\"")]
    UnboundPrefix(String),
    #[error("Unexpected closing tag \"{0}\"")]
    UnexpectedEnd(String),
    #[error("Element \"{0}\" is never closed")]
    Unclosed(String),
    #[error("Document has no root element")]
    NoRoot,
    #[error("Expected root element \"{expected}\" but found \"{found}\"")]
    UnexpectedRoot { expected: String, found: String },
    #[error("Document has no <namespace> element")]
    MissingNamespace,
    #[error("Element <{element}> is missing required attribute \"{attribute}\"")]
    MissingAttribute { element: String, attribute: String },
}
