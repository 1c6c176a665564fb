//! Postgres-backed implementations of the domain storage ports.

use std::future::Future;

use chrono::NaiveDate;
use models_estate::service::{Booking, NewBooking};
use sqlx::{Pool, Postgres};

use crate::domain::bookings::{BookingStore, BookingStoreError};
use estate_db_client::error::EstateDatabaseError;

/// [`BookingStore`] backed by the estatedb `bookings` table.
#[derive(Clone)]
pub struct PgBookingStore {
    db: Pool<Postgres>,
}

impl PgBookingStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

impl BookingStore for PgBookingStore {
    fn find_by_slot(
        &self,
        date: NaiveDate,
        time: &str,
    ) -> impl Future<Output = Result<Vec<Booking>, BookingStoreError>> + Send {
        async move {
            let rows = estate_db_client::bookings::get::get_bookings_for_slot(&self.db, date, time)
                .await
                .map_err(|err| BookingStoreError::Other(err.into()))?;

            Ok(rows.into_iter().map(Booking::from).collect())
        }
    }

    fn insert(
        &self,
        booking: &NewBooking,
    ) -> impl Future<Output = Result<Booking, BookingStoreError>> + Send {
        async move {
            let row = estate_db_client::bookings::insert::insert_booking(&self.db, booking)
                .await
                .map_err(|err| match err {
                    EstateDatabaseError::UniqueViolation(_) => BookingStoreError::DuplicateSlot,
                    other => BookingStoreError::Other(other.into()),
                })?;

            Ok(row.into())
        }
    }
}
