use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures reported by the service layer to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
