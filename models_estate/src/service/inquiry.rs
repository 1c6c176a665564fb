//! Service layer inquiry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact inquiry (service representation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// An inquiry that has passed validation but not yet been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<Uuid>,
}

// ===== Conversions =====

impl From<Inquiry> for crate::api::InquiryResponse {
    fn from(svc: Inquiry) -> Self {
        Self {
            id: svc.id,
            name: svc.name,
            email: svc.email,
            phone: svc.phone,
            message: svc.message,
            listing_id: svc.listing_id,
            created_at: svc.created_at,
        }
    }
}
