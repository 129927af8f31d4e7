//! Application services sitting between HTTP handlers and the repository.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod images;
pub mod leads;
pub mod properties;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input; reported to the caller with a descriptive message.
    #[error("{0}")]
    Validation(String),

    /// The data store cannot be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,

    /// Anything else; logged server-side, reported generically.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(msg) => ServiceError::Validation(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::Unavailable(msg),
            RepositoryError::ConstraintViolation(msg) => ServiceError::Validation(msg),
            RepositoryError::DatabaseError(msg) | RepositoryError::Unexpected(msg) => {
                ServiceError::Internal(msg)
            }
        }
    }
}
