use thiserror::Error;

/// Failure modes of a call to the backend API.
///
/// `Api` carries the message from a JSON error body; `Http` is the fallback
/// when the error body is not JSON. A 2xx response whose body does not match
/// the endpoint's schema is `Malformed` rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Unexpected response from the server: {0}")]
    Malformed(String),
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("You don't have permission to view this data")]
    Forbidden,
}

impl ApiError {
    /// True when the credential itself was rejected and the session should
    /// be torn down.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}
