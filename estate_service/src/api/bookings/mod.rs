use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::ApiContext;

pub mod booked;
pub mod create;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", post(create::create_booking))
        .route("/booked", get(booked::booked_slots))
}
