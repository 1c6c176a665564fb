//! Queries for writing inquiries.

use models_estate::db::Inquiry;
use models_estate::service::NewInquiry;
use sqlx::{Pool, Postgres};

use crate::error::EstateDatabaseError;

/// Insert an inquiry and return the stored row.
#[tracing::instrument(skip(db, inquiry), fields(listing_id = ?inquiry.listing_id))]
pub async fn insert_inquiry(
    db: &Pool<Postgres>,
    inquiry: &NewInquiry,
) -> Result<Inquiry, EstateDatabaseError> {
    let stored = sqlx::query_as::<_, Inquiry>(
        r#"
        INSERT INTO inquiries (name, email, phone, message, listing_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, phone, message, listing_id, created_at
        "#,
    )
    .bind(&inquiry.name)
    .bind(&inquiry.email)
    .bind(&inquiry.phone)
    .bind(&inquiry.message)
    .bind(inquiry.listing_id)
    .fetch_one(db)
    .await?;

    Ok(stored)
}
