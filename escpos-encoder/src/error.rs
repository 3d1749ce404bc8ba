//! Error types for the encoder library

use thiserror::Error;

/// Encoder error types
///
/// Every variant is raised synchronously by the operation that caused it.
/// Nothing is retried and no bytes are queued for the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Code page identifier not present in the registry
    #[error("Unknown codepage: {0}")]
    UnknownCodepage(String),

    /// Code page is valid but the selected vendor table has no selector for it
    #[error("Codepage not supported by printer: {0}")]
    UnsupportedByPrinter(String),

    /// Numeric argument outside its accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Alignment name other than left, center or right
    #[error("Unknown alignment: {0}")]
    InvalidAlignment(String),

    /// Operation refused while the encoder renders into an embedded region
    #[error("{0} is not supported in table cells or boxes")]
    EmbeddedNotSupported(&'static str),

    /// Malformed base64 or undecodable image payload
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for encoder operations
pub type EncodeResult<T> = Result<T, EncodeError>;
