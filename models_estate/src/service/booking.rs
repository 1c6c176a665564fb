//! Service layer booking models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed viewing booking (service representation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Calendar date of the viewing slot, already normalized.
    pub date: NaiveDate,
    /// Display label of the viewing slot, e.g. `10:00 AM`.
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// A booking that has passed validation but not yet been persisted.
///
/// The id and creation timestamp are assigned by storage on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: String,
}

// ===== Conversions =====

impl From<Booking> for crate::api::BookingResponse {
    fn from(svc: Booking) -> Self {
        Self {
            id: svc.id,
            name: svc.name,
            email: svc.email,
            phone: svc.phone,
            date: svc.date,
            time: svc.time,
            created_at: svc.created_at,
        }
    }
}
