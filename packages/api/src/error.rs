use store::PollFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("not signed in")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    /// The server answered with `success: false` or an error status and a message.
    #[error("{0}")]
    Rejected(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server's own message, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// Message to show inline, falling back to `fallback` for anything the
    /// server did not explain.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            ApiError::Unauthorized => "Please login to continue".to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<&ApiError> for PollFailure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => PollFailure::Unauthorized,
            ApiError::NotFound => PollFailure::NotFound,
            _ => PollFailure::Other,
        }
    }
}
