use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while preparing template input
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Schema source could not be interpreted
    #[error("Invalid schema source: {0}")]
    InvalidSource(String),

    /// Schema generation needs an object-shaped root value
    #[error("Schema root must be an object, got {0}")]
    NonObjectRoot(&'static str),

    /// JSON decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemplateError {
    /// Create an invalid-source error
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        Self::InvalidSource(msg.into())
    }
}
