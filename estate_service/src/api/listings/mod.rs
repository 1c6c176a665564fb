use axum::{Router, routing::get};

use crate::api::context::ApiContext;

pub mod get;
pub mod list;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_listings))
        .route("/:listing_id", get(self::get::get_listing))
}
