//! Database layer booking model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A viewing booking row from the `bookings` table.
///
/// The slot is the `(slot_date, slot_time)` pair, guarded by a unique
/// index so at most one row can ever hold it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub created_at: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Booking> for crate::service::Booking {
    fn from(db: Booking) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            date: db.slot_date,
            time: db.slot_time,
            created_at: db.created_at,
        }
    }
}
