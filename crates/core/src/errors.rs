use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body was absent or could not be read as the expected entity.
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for CareError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        match err {
            ValidationError::InvalidInput => CareError::InvalidInput(message),
            ValidationError::MissingField(_) => CareError::MissingField(message),
            ValidationError::Conflict => CareError::Conflict(message),
        }
    }
}

pub type CareResult<T> = Result<T, CareError>;
