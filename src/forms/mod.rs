//! Request forms validated at the HTTP boundary.

use thiserror::Error;
use validator::ValidationErrors;

pub mod trademark;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
