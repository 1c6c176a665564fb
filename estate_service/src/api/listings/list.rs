//! Endpoint for the listings index with its search filters.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use listing_filters::{ListingFilters, ListingQueryParams};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;
use estate_db_client::error::EstateDatabaseError;
use models_estate::api::ListingResponse;
use models_estate::service::Listing;

#[derive(Debug, Error)]
pub enum ListListingsErr {
    #[error("An unknown error has occurred")]
    DatabaseError(#[from] EstateDatabaseError),
}

impl IntoResponse for ListListingsErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListListingsErr::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error_type = "database", "Error listing properties: {:?}", self);
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Page payload for the listings index.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub count: usize,
    pub listings: Vec<ListingResponse>,
}

/// The listings index. Every criterion is optional; unrecognized values
/// disable their criterion rather than failing the request.
#[utoipa::path(
    get,
    path = "/listings",
    params(
        ("location" = Option<String>, Query, description = "Case-insensitive substring matched against address and city"),
        ("priceRange" = Option<String>, Query, description = "Price band: 0-500000, 500000-1000000, 1000000-2000000 or 2000000+"),
        ("propertyType" = Option<String>, Query, description = "Exact property type, e.g. condo"),
        ("marketStatus" = Option<String>, Query, description = "Exact market status, e.g. active"),
        ("sortOrder" = Option<String>, Query, description = "price-asc (default), price-desc or newest"),
    ),
    responses(
        (status = 200, description = "Matching listings", body = ListingsResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(context))]
pub async fn list_listings(
    State(context): State<ApiContext>,
    Query(params): Query<ListingQueryParams>,
) -> Result<Json<ListingsResponse>, ListListingsErr> {
    let filters = ListingFilters::from(params);

    let catalog: Vec<Listing> = estate_db_client::listings::get::get_all_listings(&context.db)
        .await?
        .into_iter()
        .map(Listing::from)
        .collect();

    let matched = listing_filters::apply(&catalog, &filters);

    tracing::info!(
        total = catalog.len(),
        matched = matched.len(),
        narrowing = filters.is_narrowing(),
        "filtered listings"
    );

    let listings: Vec<ListingResponse> = matched.into_iter().map(ListingResponse::from).collect();
    Ok(Json(ListingsResponse {
        count: listings.len(),
        listings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_map_to_500() {
        let err = ListListingsErr::DatabaseError(EstateDatabaseError::Query(
            sqlx::Error::RowNotFound,
        ));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
