//! Endpoint for listing the booked time slots on a date.
//!
//! The booking form greys out taken slots with this before the visitor
//! submits anything.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;
use estate_db_client::error::EstateDatabaseError;
use models_estate::shared::{SlotDateError, parse_slot_date};

#[derive(Debug, Error)]
pub enum BookedSlotsErr {
    #[error("{0}")]
    InvalidDate(#[from] SlotDateError),

    #[error("An unknown error has occurred")]
    DatabaseError(#[from] EstateDatabaseError),
}

impl IntoResponse for BookedSlotsErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            BookedSlotsErr::InvalidDate(_) => StatusCode::BAD_REQUEST,
            BookedSlotsErr::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error_type = "database", "Error listing booked slots: {:?}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct BookedSlotsQuery {
    /// Date as `YYYY-MM-DD` or an RFC 3339 timestamp, same forms the
    /// booking form itself sends.
    pub date: String,
}

/// Booked time labels for one date.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlotsResponse {
    pub date: NaiveDate,
    pub times: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/bookings/booked",
    params(("date" = String, Query, description = "Date as YYYY-MM-DD or an RFC 3339 timestamp")),
    responses(
        (status = 200, description = "Time labels already booked on that date", body = BookedSlotsResponse),
        (status = 400, description = "Unparseable date"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Bookings"
)]
#[tracing::instrument(skip(context))]
pub async fn booked_slots(
    State(context): State<ApiContext>,
    Query(query): Query<BookedSlotsQuery>,
) -> Result<Json<BookedSlotsResponse>, BookedSlotsErr> {
    let date = parse_slot_date(&query.date)?;

    let times = estate_db_client::bookings::get::get_booked_times(&context.db, date).await?;

    Ok(Json(BookedSlotsResponse { date, times }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_date_maps_to_400() {
        let err = BookedSlotsErr::InvalidDate(SlotDateError::Unparseable {
            value: "whenever".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
