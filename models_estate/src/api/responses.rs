//! API layer response types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Listing Responses =====

/// Property listing response (API representation).
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
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

// ===== Booking Responses =====

/// Confirmed booking response (API representation).
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

// ===== Inquiry Responses =====

/// Recorded inquiry response (API representation).
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn booking_response_serializes_camel_case_with_a_plain_date() {
        let response = BookingResponse {
            id: Uuid::nil(),
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            phone: None,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            time: "10:00 AM".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["date"], "2024-06-15");
        assert_eq!(json["createdAt"], "2024-06-01T12:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}
