//! Board Errors
//!
//! Failure taxonomy shared by the loader and the mutation engine.

use thiserror::Error;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    /// No board id could be resolved; the operation never reached the network
    #[error("Board ID not found")]
    MissingBoardId,

    /// Empty input rejected before any I/O
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// Transport, status or decode failure of an API call
    #[error("Request to {path} failed: {message}")]
    Network { path: String, message: String },
}

impl BoardError {
    pub fn network(path: impl Into<String>, message: impl ToString) -> Self {
        BoardError::Network {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Validation failures are swallowed by the view; everything else is shown to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, BoardError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_validation_is_silent() {
        assert!(BoardError::Validation { field: "title" }.is_silent());
        assert!(!BoardError::MissingBoardId.is_silent());
        assert!(!BoardError::network("/cards", "boom").is_silent());
    }

    #[test]
    fn test_network_message_names_path() {
        let err = BoardError::network("/boards/7/cards", "500 Internal Server Error");
        assert_eq!(
            err.to_string(),
            "Request to /boards/7/cards failed: 500 Internal Server Error"
        );
    }
}
