//! Request payloads accepted by the dashboard API.

use thiserror::Error;
use validator::ValidationErrors;

pub mod clients;
pub mod listings;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid tier")]
    InvalidTier,

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("no clients found in upload")]
    EmptyUpload,
}
