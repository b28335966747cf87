use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Acknowledgement returned by mutating endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AckDto {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
