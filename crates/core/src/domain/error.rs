// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
