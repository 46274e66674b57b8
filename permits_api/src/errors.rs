//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a JSON array of permits.
    #[error("Malformed response body")]
    MalformedBody,
    /// A query parameter could not be turned into a query clause.
    #[error("Invalid query parameter: {0}")]
    InvalidParameter(String),
}
