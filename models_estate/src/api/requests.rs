//! API layer request types.
//!
//! Each request converts into its service layer counterpart with
//! `TryFrom`, which is where validation and normalization happen. The
//! frontend forms run their own checks, but requests hit this surface
//! directly too, so nothing here trusts the client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::{BookingValidationError, InquiryValidationError};
use crate::service::{NewBooking, NewInquiry};
use crate::shared::parse_slot_date;

// ===== Booking Requests =====

/// Request to book a property viewing slot.
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Viewing date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    /// Viewing time label, e.g. `10:00 AM`.
    pub time: String,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = BookingValidationError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(BookingValidationError::MissingName);
        }

        let email = req.email.trim();
        if email.is_empty() {
            return Err(BookingValidationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(BookingValidationError::InvalidEmail {
                email: email.to_string(),
            });
        }

        let date = parse_slot_date(&req.date)?;

        let time = req.time.trim();
        if time.is_empty() {
            return Err(BookingValidationError::MissingTime);
        }

        Ok(NewBooking {
            name: name.to_string(),
            email: email.to_string(),
            phone: normalize_phone(req.phone),
            date,
            time: time.to_string(),
        })
    }
}

// ===== Inquiry Requests =====

/// Request to send a contact inquiry, optionally tied to a listing.
#[derive(ToSchema, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub listing_id: Option<Uuid>,
}

impl TryFrom<CreateInquiryRequest> for NewInquiry {
    type Error = InquiryValidationError;

    fn try_from(req: CreateInquiryRequest) -> Result<Self, Self::Error> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(InquiryValidationError::MissingName);
        }

        let email = req.email.trim();
        if email.is_empty() {
            return Err(InquiryValidationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(InquiryValidationError::InvalidEmail {
                email: email.to_string(),
            });
        }

        let message = req.message.trim();
        if message.is_empty() {
            return Err(InquiryValidationError::MissingMessage);
        }

        Ok(NewInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: normalize_phone(req.phone),
            message: message.to_string(),
            listing_id: req.listing_id,
        })
    }
}

// ===== Helpers =====

/// An address is plausible when it has an `@` with text on both sides.
/// Real deliverability is the mail system's problem, not ours.
fn is_plausible_email(email: &str) -> bool {
    matches!(email.split_once('@'), Some((local, domain)) if !local.is_empty() && !domain.is_empty())
}

/// Blank phone numbers collapse to absent.
fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}
