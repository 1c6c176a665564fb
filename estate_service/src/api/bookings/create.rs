//! Endpoint for booking a property viewing.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::ApiContext;
use crate::domain::bookings::submit_booking;
use crate::domain::error::BookingError;
use crate::storage::PgBookingStore;
use models_estate::api::error::BookingValidationError;
use models_estate::api::{BookingResponse, CreateBookingRequest};
use models_estate::service::NewBooking;

#[derive(Debug, Error)]
pub enum CreateBookingErr {
    #[error("{0}")]
    Validation(#[from] BookingValidationError),

    #[error("This time slot is already booked, please choose another")]
    SlotTaken,

    #[error("An unknown error has occurred")]
    InternalError(#[source] anyhow::Error),
}

impl From<BookingError> for CreateBookingErr {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SlotTaken { .. } => CreateBookingErr::SlotTaken,
            BookingError::Persistence(source) => CreateBookingErr::InternalError(source),
        }
    }
}

impl IntoResponse for CreateBookingErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateBookingErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreateBookingErr::SlotTaken => StatusCode::CONFLICT,
            CreateBookingErr::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error_type = "booking", "Error creating booking: {:?}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Book a viewing slot. Slots are site-wide: one booking per date and
/// time pair across all properties.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingResponse),
        (status = 400, description = "Invalid booking request"),
        (status = 409, description = "The slot is already booked"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Bookings"
)]
#[tracing::instrument(skip(context, request))]
pub async fn create_booking(
    State(context): State<ApiContext>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), CreateBookingErr> {
    let new_booking = NewBooking::try_from(request)?;

    let store = PgBookingStore::new(context.db.clone());
    let booking = submit_booking(&store, new_booking).await?;

    tracing::info!(
        booking_id = %booking.id,
        date = %booking.date,
        time = %booking.time,
        "booked viewing slot"
    );

    Ok((StatusCode::CREATED, Json(booking.into())))
}
