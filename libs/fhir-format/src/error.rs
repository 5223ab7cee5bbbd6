use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected a JSON object for the resource")]
    ExpectedObject,
    #[error("missing resourceType property")]
    MissingResourceType,
    #[error("expected resourceType '{expected}', found '{found}'")]
    WrongResourceType { expected: String, found: String },
    #[error("root element must be in the http://hl7.org/fhir namespace, found {0:?}")]
    UnexpectedNamespace(Option<String>),
    #[error("unknown element '{path}'")]
    UnknownElement { path: String },
    #[error("more than one alternative for choice element '{path}': {}", .keys.join(", "))]
    ChoiceConflict { path: String, keys: Vec<String> },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Model(#[from] sinter_models::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
