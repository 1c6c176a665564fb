//! Service layer listing model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property listing (service representation).
///
/// `property_type` and `market_status` are free-form strings rather than
/// enums: the catalog of types and statuses is owned by whoever maintains
/// the listing data, and the backend matches against them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Listing {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    /// Asking price in whole dollars.
    pub price: i64,
    pub property_type: String,
    /// Market availability, e.g. `active` or `sold`. Absent on listings
    /// that predate status tracking.
    pub market_status: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Listing> for crate::api::ListingResponse {
    fn from(svc: Listing) -> Self {
        Self {
            id: svc.id,
            address: svc.address,
            city: svc.city,
            price: svc.price,
            property_type: svc.property_type,
            market_status: svc.market_status,
            bedrooms: svc.bedrooms,
            bathrooms: svc.bathrooms,
            square_feet: svc.square_feet,
            description: svc.description,
            created_at: svc.created_at,
            updated_at: svc.updated_at,
        }
    }
}
