use crate::constants::{NETWORK_ERROR_MESSAGE, OPERATION_FAILED_PREFIX, UNKNOWN_ERROR_MESSAGE};

/// Everything that can go wrong while toggling a like or loading the page
#[derive(Debug, thiserror::Error)]
pub enum LikeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("toggle rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("success response is missing `{0}`")]
    Incomplete(&'static str),
}

/// Which side of the exchange failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, bad status, unreadable body
    Transport,
    /// Well-formed response that reports (or implies) failure
    Application,
}

impl LikeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LikeError::Rejected(_) | LikeError::Incomplete(_) => ErrorKind::Application,
            LikeError::Request(_)
            | LikeError::Status(_)
            | LikeError::Decode(_)
            | LikeError::Runtime(_)
            | LikeError::Url(_) => ErrorKind::Transport,
        }
    }

    /// Message shown to the user in an alert
    pub fn user_message(&self) -> String {
        match self {
            LikeError::Rejected(Some(reason)) if !reason.trim().is_empty() => {
                format!("{}{}", OPERATION_FAILED_PREFIX, reason)
            }
            LikeError::Rejected(_) | LikeError::Incomplete(_) => {
                format!("{}{}", OPERATION_FAILED_PREFIX, UNKNOWN_ERROR_MESSAGE)
            }
            _ => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}
