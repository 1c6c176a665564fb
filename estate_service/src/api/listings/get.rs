//! Endpoint for fetching a single listing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::api::context::ApiContext;
use estate_db_client::error::EstateDatabaseError;
use models_estate::api::ListingResponse;
use models_estate::service::Listing;

#[derive(Debug, Error)]
pub enum GetListingErr {
    #[error("Listing not found")]
    NotFound,

    #[error("An unknown error has occurred")]
    DatabaseError(#[from] EstateDatabaseError),
}

impl IntoResponse for GetListingErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetListingErr::NotFound => StatusCode::NOT_FOUND,
            GetListingErr::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error_type = "database", "Error fetching listing: {:?}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/listings/{listing_id}",
    params(("listing_id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "The listing", body = ListingResponse),
        (status = 404, description = "No listing with that id"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(context))]
pub async fn get_listing(
    State(context): State<ApiContext>,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<ListingResponse>, GetListingErr> {
    let listing = estate_db_client::listings::get::get_listing(&context.db, listing_id)
        .await?
        .ok_or(GetListingErr::NotFound)?;

    Ok(Json(ListingResponse::from(Listing::from(listing))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_listing_maps_to_404() {
        let response = GetListingErr::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
