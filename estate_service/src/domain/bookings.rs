//! The booking submission flow.
//!
//! A viewing slot is a `(date, time)` pair, whole-site rather than
//! per-property. Submission reads current availability first so the
//! common case gets a clean rejection, but the storage layer's unique
//! slot constraint is what actually decides concurrent submissions: a
//! loser of that race surfaces as the same slot-taken error the
//! pre-check produces.

use std::future::Future;

use chrono::NaiveDate;
use models_estate::service::{Booking, NewBooking};
use thiserror::Error;

use crate::domain::error::BookingError;

/// Storage port for booking persistence.
pub trait BookingStore {
    /// Fetch the bookings already holding the given slot.
    fn find_by_slot(
        &self,
        date: NaiveDate,
        time: &str,
    ) -> impl Future<Output = Result<Vec<Booking>, BookingStoreError>> + Send;

    /// Insert a booking row, surfacing slot collisions as
    /// [`BookingStoreError::DuplicateSlot`].
    fn insert(
        &self,
        booking: &NewBooking,
    ) -> impl Future<Output = Result<Booking, BookingStoreError>> + Send;
}

/// Errors a [`BookingStore`] can produce.
#[derive(Debug, Error)]
pub enum BookingStoreError {
    /// The insert collided with the unique slot constraint.
    #[error("slot already booked")]
    DuplicateSlot,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Submit a booking: reject when the slot is already held, insert
/// otherwise.
#[tracing::instrument(skip(store, booking), fields(date = %booking.date, time = %booking.time))]
pub async fn submit_booking<S: BookingStore>(
    store: &S,
    booking: NewBooking,
) -> Result<Booking, BookingError> {
    let existing = store
        .find_by_slot(booking.date, &booking.time)
        .await
        .map_err(|err| BookingError::Persistence(err.into()))?;

    if !existing.is_empty() {
        return Err(BookingError::SlotTaken {
            date: booking.date,
            time: booking.time,
        });
    }

    match store.insert(&booking).await {
        Ok(stored) => Ok(stored),
        Err(BookingStoreError::DuplicateSlot) => {
            tracing::warn!("slot was taken between the availability check and the insert");
            Err(BookingError::SlotTaken {
                date: booking.date,
                time: booking.time,
            })
        }
        Err(err) => Err(BookingError::Persistence(err.into())),
    }
}
