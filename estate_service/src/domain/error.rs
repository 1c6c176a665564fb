//! Domain error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the booking submission flow.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The requested slot is already held by another booking.
    #[error("a booking already exists for {date} at '{time}'")]
    SlotTaken { date: NaiveDate, time: String },

    /// The availability read or the insert failed for storage reasons.
    #[error("booking storage failure: {0}")]
    Persistence(#[source] anyhow::Error),
}
