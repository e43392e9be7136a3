// Central Error Type for the Persistence Layer

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied missing or malformed input
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No {entity}: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Failure reported by the SQL executor, message carried as-is
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error kinds distinguished by upstream layers (e.g. HTTP status mapping)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Store,
    Internal,
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Database(_) => ErrorKind::Store,
            AppError::Config(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<crate::domain::DomainError> for AppError {
    fn from(err: crate::domain::DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
