//! Queries for writing bookings.

use models_estate::db::Booking;
use models_estate::service::NewBooking;
use sqlx::{Pool, Postgres};

use crate::error::EstateDatabaseError;

/// Insert a booking and return the stored row.
///
/// A second booking for an already-held slot is rejected by the unique
/// index on `(slot_date, slot_time)` and surfaces as
/// [`EstateDatabaseError::UniqueViolation`].
#[tracing::instrument(skip(db, booking), fields(slot_date = %booking.date, slot_time = %booking.time))]
pub async fn insert_booking(
    db: &Pool<Postgres>,
    booking: &NewBooking,
) -> Result<Booking, EstateDatabaseError> {
    let stored = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (name, email, phone, slot_date, slot_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, phone, slot_date, slot_time, created_at
        "#,
    )
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(&booking.phone)
    .bind(booking.date)
    .bind(&booking.time)
    .fetch_one(db)
    .await
    .map_err(EstateDatabaseError::from_sqlx)?;

    Ok(stored)
}
