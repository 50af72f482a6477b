//! Error types for report extraction.
//!
//! The extraction core only ever fails with [`ReportError::MalformedDocument`].
//! Every other variant belongs to the intake and output helpers around it.

use thiserror::Error;

/// Main error type for the bureau-report library.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input text is not well-formed XML.
    #[error("Malformed XML document: {0}")]
    MalformedDocument(String),

    /// The upload is neither `text/xml` nor named `*.xml`.
    #[error("Only XML files are allowed: '{0}'")]
    UnsupportedMediaType(String),

    /// The upload exceeds the configured size limit.
    #[error("Payload too large: {size} bytes (limit {max} bytes)")]
    PayloadTooLarge { size: u64, max: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl From<roxmltree::Error> for ReportError {
    fn from(err: roxmltree::Error) -> Self {
        Self::MalformedDocument(err.to_string())
    }
}

/// Result type alias for bureau-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
