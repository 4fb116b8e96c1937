//! Use cases behind the dashboard API.
//!
//! Every service takes the account id explicitly and is generic over the
//! repository traits it needs.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod clients;
pub mod listings;
pub mod promotion;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_becomes_service_not_found() {
        let err = ServiceError::from(RepositoryError::NotFound);
        assert!(matches!(err, ServiceError::NotFound));

        let err = ServiceError::from(RepositoryError::DatabaseError("boom".to_string()));
        assert!(matches!(err, ServiceError::Repository(_)));
        assert_eq!(err.to_string(), "Database error: boom");
    }

    #[test]
    fn form_errors_keep_their_message() {
        let err = ServiceError::from(FormError::InvalidPhoneNumber);
        assert_eq!(err.to_string(), "invalid phone number");
    }
}
