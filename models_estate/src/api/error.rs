//! API validation errors

use thiserror::Error;

use crate::shared::SlotDateError;

/// Errors that can occur during booking request validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingValidationError {
    #[error("Name must not be empty")]
    MissingName,

    #[error("Email must not be empty")]
    MissingEmail,

    #[error("'{email}' does not look like an email address")]
    InvalidEmail { email: String },

    #[error("{0}")]
    InvalidDate(#[from] SlotDateError),

    #[error("Time slot must not be empty")]
    MissingTime,
}

/// Errors that can occur during inquiry request validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InquiryValidationError {
    #[error("Name must not be empty")]
    MissingName,

    #[error("Email must not be empty")]
    MissingEmail,

    #[error("'{email}' does not look like an email address")]
    InvalidEmail { email: String },

    #[error("Message must not be empty")]
    MissingMessage,
}
