//! Error types for the frontend
//!
//! Every failure a page can see. Pages turn these into toasts; nothing here
//! is fatal and nothing is retried.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Form input rejected before any request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No todo with this id
    #[error("Todo #{0} not found")]
    NotFound(u32),

    /// Login rejected by the server
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Missing or rejected bearer token
    #[error("Unauthorized - please log in again")]
    Unauthorized,

    /// Request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// Durable key-value storage unavailable or rejected a write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Text shown in the toast for this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(_) => "Todo not found".to_string(),
            AppError::InvalidCredentials(msg) => msg.clone(),
            AppError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            AppError::Transport(_) => "Could not reach the server".to_string(),
            AppError::Server { .. } | AppError::Decode(_) => {
                "The server could not complete the request".to_string()
            }
            AppError::Storage(_) => "Could not save your session in this browser".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(AppError::Validation("Title is required".into()).user_message(), "Title is required");
        assert_eq!(AppError::NotFound(3).user_message(), "Todo not found");
        assert_eq!(
            AppError::Server { status: 500, message: "boom".into() }.user_message(),
            "The server could not complete the request"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::NotFound(999).to_string(), "Todo #999 not found");
        assert!(AppError::NotFound(1).is_not_found());
        assert!(!AppError::Unauthorized.is_not_found());
    }
}
