/// Shown when the server gives no usable message.
pub const GENERIC_FAILURE: &str = "The comparison failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both property IDs")]
    MissingBoth,
    #[error("Please enter the source A property ID")]
    MissingSourceA,
    #[error("Please enter the source B property ID")]
    MissingSourceB,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Server { status: u16, message: Option<String> },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl RequestError {
    /// The text put on the status line: the server's own message when it sent
    /// one, otherwise the generic failure.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
