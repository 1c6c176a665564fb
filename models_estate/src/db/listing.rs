//! Database layer listing model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property listing row from the `listings` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    /// Asking price in whole dollars.
    pub price: i64,
    pub property_type: String,
    pub market_status: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Listing> for crate::service::Listing {
    fn from(db: Listing) -> Self {
        Self {
            id: db.id,
            address: db.address,
            city: db.city,
            price: db.price,
            property_type: db.property_type,
            market_status: db.market_status,
            bedrooms: db.bedrooms,
            bathrooms: db.bathrooms,
            square_feet: db.square_feet,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
