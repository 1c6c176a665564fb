//! Shared state for API handlers.

use axum::extract::FromRef;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

use crate::config::Config;

/// State shared by every API handler.
#[derive(Clone, FromRef)]
pub struct ApiContext {
    /// estatedb connection pool (listings, bookings, inquiries).
    pub db: Pool<Postgres>,
    pub config: Arc<Config>,
}
