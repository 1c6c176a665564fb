//! Database layer inquiry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact inquiry row from the `inquiries` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Listing the inquiry was sent from, if any; general contact-form
    /// inquiries carry no listing.
    pub listing_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Inquiry> for crate::service::Inquiry {
    fn from(db: Inquiry) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            message: db.message,
            listing_id: db.listing_id,
            created_at: db.created_at,
        }
    }
}
