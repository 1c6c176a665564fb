//! Queries for reading listings.

use models_estate::db::Listing;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::EstateDatabaseError;

/// Fetch the full listing catalog, newest first.
///
/// The listings index filters in memory over this snapshot, and its
/// `newest` ordering preserves the order this query returns.
#[tracing::instrument(skip(db))]
pub async fn get_all_listings(db: &Pool<Postgres>) -> Result<Vec<Listing>, EstateDatabaseError> {
    let listings = sqlx::query_as::<_, Listing>(
        r#"
        SELECT id, address, city, price, property_type, market_status,
               bedrooms, bathrooms, square_feet, description,
               created_at, updated_at
        FROM listings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(listings)
}

/// Fetch a single listing by id, or `None` when it does not exist.
#[tracing::instrument(skip(db))]
pub async fn get_listing(
    db: &Pool<Postgres>,
    listing_id: Uuid,
) -> Result<Option<Listing>, EstateDatabaseError> {
    let listing = sqlx::query_as::<_, Listing>(
        r#"
        SELECT id, address, city, price, property_type, market_status,
               bedrooms, bathrooms, square_feet, description,
               created_at, updated_at
        FROM listings
        WHERE id = $1
        "#,
    )
    .bind(listing_id)
    .fetch_optional(db)
    .await?;

    Ok(listing)
}
