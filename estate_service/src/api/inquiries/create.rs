//! Endpoint for sending a contact inquiry.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::ApiContext;
use estate_db_client::error::EstateDatabaseError;
use models_estate::api::error::InquiryValidationError;
use models_estate::api::{CreateInquiryRequest, InquiryResponse};
use models_estate::service::{Inquiry, NewInquiry};

#[derive(Debug, Error)]
pub enum CreateInquiryErr {
    #[error("{0}")]
    Validation(#[from] InquiryValidationError),

    #[error("An unknown error has occurred")]
    DatabaseError(#[from] EstateDatabaseError),
}

impl IntoResponse for CreateInquiryErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateInquiryErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreateInquiryErr::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error_type = "inquiry", "Error recording inquiry: {:?}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/inquiries",
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry recorded", body = InquiryResponse),
        (status = 400, description = "Invalid inquiry request"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Inquiries"
)]
#[tracing::instrument(skip(context, request))]
pub async fn create_inquiry(
    State(context): State<ApiContext>,
    Json(request): Json<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), CreateInquiryErr> {
    let new_inquiry = NewInquiry::try_from(request)?;

    let stored = estate_db_client::inquiries::insert::insert_inquiry(&context.db, &new_inquiry)
        .await?;
    let inquiry = Inquiry::from(stored);

    tracing::info!(inquiry_id = %inquiry.id, listing_id = ?inquiry.listing_id, "recorded inquiry");

    Ok((StatusCode::CREATED, Json(inquiry.into())))
}
