//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding form input validation failures.
#[derive(Debug)]
pub enum PermitsError {
    /// An error from the underlying API client.
    Api(permits_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for PermitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PermitsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<permits_api::Error> for PermitsError {
    fn from(e: permits_api::Error) -> Self {
        match e {
            permits_api::Error::InvalidParameter(msg) => Self::InvalidInput(msg),
            other => Self::Api(other),
        }
    }
}
