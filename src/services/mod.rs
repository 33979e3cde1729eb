//! Orchestration between the HTTP layer and the repository.

pub mod errors;
pub mod trademark;

pub use errors::{ServiceError, ServiceResult};
