//! Domain errors for planet operations
//!
//! The planet service is the only place where raw store and lookup errors are
//! translated into this taxonomy. Adapters never construct a `PlanetError`.

use std::fmt;

use thiserror::Error;

use crate::ports::RepositoryError;

/// Message shown to clients in place of any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Category of a failure, independent of the concrete error value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    Validation,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid_input",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during planet operations
#[derive(Error, Debug)]
pub enum PlanetError {
    /// Caller-supplied data fails a precondition
    #[error("{0}")]
    InvalidInput(String),

    /// A planet with the same name is already registered
    #[error("{0}")]
    Conflict(String),

    /// The requested planet does not exist
    #[error("{0}")]
    NotFound(String),

    /// The external catalog returned an ambiguous result
    #[error("{0}")]
    Validation(String),

    /// An unexpected failure; the message is the original cause and is never shown to clients
    #[error("Internal error: {0}")]
    Internal(String),

    /// A raw store error passed through unchanged by existence checks
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl PlanetError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// The fixed not-found error, whichever lookup failed
    pub fn not_found() -> Self {
        Self::NotFound("planet not found".to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Internal(_) | Self::Repository(_) => ErrorKind::Internal,
        }
    }

    /// The message a client is allowed to see
    pub fn client_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_fixed() {
        let err = PlanetError::not_found();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "planet not found");
    }

    #[test]
    fn test_internal_error_is_masked_for_clients() {
        let err = PlanetError::internal("connection refused");
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.client_message(), "internal server error");
    }

    #[test]
    fn test_raw_repository_error_counts_as_internal() {
        let err = PlanetError::from(RepositoryError::backend("server selection timeout"));
        assert!(matches!(err, PlanetError::Repository(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.client_message(), "internal server error");
    }

    #[test]
    fn test_user_facing_errors_keep_their_message() {
        let err = PlanetError::conflict("planet already registered");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.client_message(), "planet already registered");

        let err = PlanetError::validation("search did not return the planet");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.client_message(), "search did not return the planet");
    }
}
