//! Request-independent workflows invoked by the route handlers.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod banks;
pub mod countries;
pub mod dashboard;
pub mod listing;
pub mod product_variants;
pub mod reviews;
pub mod seller_fields;
pub mod states;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// Message safe to show to the operator.
    #[error("form error: {0}")]
    Form(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        if let FormError::Validation(errors) = &err {
            log::warn!("Form validation failed: {errors}");
        }
        ServiceError::Form(err.user_message().to_string())
    }
}
