use thiserror::Error;

/// Errors produced by the shared API client. Cells map these into their
/// own domain taxonomies; the split between `Status` and `Transport`
/// matters because application-level failure bodies carry a server
/// `message` that must be surfaced verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided reason when one exists, used by callers that
    /// must show the backend's own message to the user.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
