//! Queries for reading bookings.

use chrono::NaiveDate;
use models_estate::db::Booking;
use sqlx::{Pool, Postgres};

use crate::error::EstateDatabaseError;

/// Fetch the bookings holding a specific slot.
///
/// At most one row can exist per slot thanks to the unique index, but the
/// availability pre-check treats the result as a collection all the same.
#[tracing::instrument(skip(db))]
pub async fn get_bookings_for_slot(
    db: &Pool<Postgres>,
    slot_date: NaiveDate,
    slot_time: &str,
) -> Result<Vec<Booking>, EstateDatabaseError> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, name, email, phone, slot_date, slot_time, created_at
        FROM bookings
        WHERE slot_date = $1 AND slot_time = $2
        "#,
    )
    .bind(slot_date)
    .bind(slot_time)
    .fetch_all(db)
    .await?;

    Ok(bookings)
}

/// Fetch the time labels already booked on a date, in label order.
#[tracing::instrument(skip(db))]
pub async fn get_booked_times(
    db: &Pool<Postgres>,
    slot_date: NaiveDate,
) -> Result<Vec<String>, EstateDatabaseError> {
    let times = sqlx::query_scalar::<_, String>(
        r#"
        SELECT slot_time
        FROM bookings
        WHERE slot_date = $1
        ORDER BY slot_time
        "#,
    )
    .bind(slot_date)
    .fetch_all(db)
    .await?;

    Ok(times)
}

/// Fetch every booking in an inclusive date range, soonest slot first.
#[tracing::instrument(skip(db))]
pub async fn get_bookings_in_range(
    db: &Pool<Postgres>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<Booking>, EstateDatabaseError> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, name, email, phone, slot_date, slot_time, created_at
        FROM bookings
        WHERE slot_date >= $1 AND slot_date <= $2
        ORDER BY slot_date, slot_time
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await?;

    Ok(bookings)
}
