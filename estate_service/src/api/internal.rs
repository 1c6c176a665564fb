//! Internal-only endpoints for staff tooling.
//!
//! Everything nested under `/internal` requires the shared key in the
//! `x-internal-auth-key` header and stays out of the public OpenAPI doc.

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::context::ApiContext;
use models_estate::api::BookingResponse;
use models_estate::service::Booking;

static INTERNAL_AUTH_HEADER: &str = "x-internal-auth-key";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/bookings", get(list_bookings))
}

/// Validates the shared internal key before letting a request through.
pub async fn require_internal_key(
    State(context): State<ApiContext>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let provided = request
        .headers()
        .get(INTERNAL_AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        None => Err((
            StatusCode::BAD_REQUEST,
            format!("Missing {INTERNAL_AUTH_HEADER} header"),
        )),
        Some(key) if key != context.config.internal_api_key => {
            Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()))
        }
        Some(_) => Ok(next.run(request).await),
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Bookings falling in an inclusive date range, for staff calendars.
#[tracing::instrument(skip(context))]
async fn list_bookings(
    State(context): State<ApiContext>,
    Query(query): Query<BookingRangeQuery>,
) -> Result<Json<Vec<BookingResponse>>, (StatusCode, String)> {
    if query.from > query.to {
        return Err((
            StatusCode::BAD_REQUEST,
            "Range start must not be after range end".to_string(),
        ));
    }

    let bookings =
        estate_db_client::bookings::get::get_bookings_in_range(&context.db, query.from, query.to)
            .await
            .map_err(|err| {
                tracing::error!(error_type = "database", "Error listing bookings: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unknown error has occurred".to_string(),
                )
            })?;

    Ok(Json(
        bookings
            .into_iter()
            .map(|row| BookingResponse::from(Booking::from(row)))
            .collect(),
    ))
}
