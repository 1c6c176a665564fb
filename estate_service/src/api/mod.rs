//! HTTP surface of the estate service.
//!
//! One module per resource, one file per endpoint. Routers are nested
//! under their resource prefix and share [`context::ApiContext`];
//! `/internal` additionally sits behind the shared-key middleware.

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::ApiContext;

pub mod bookings;
pub mod context;
mod health;
pub mod inquiries;
mod internal;
pub mod listings;
pub mod mortgage;
pub mod swagger;

/// Assemble the full application and serve it until shutdown.
pub async fn setup_and_serve(context: ApiContext) -> anyhow::Result<()> {
    let port = context.config.port;
    let environment = context.config.environment;

    let app = api_router(context)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("could not bind to {bind_address}"))?;

    tracing::info!("estate service is up and running in {environment} on port {port}");

    axum::serve(listener, app)
        .await
        .context("error running axum server")
}

fn api_router(context: ApiContext) -> Router {
    Router::new()
        .nest("/listings", listings::router())
        .nest("/bookings", bookings::router())
        .nest("/inquiries", inquiries::router())
        .nest("/mortgage", mortgage::router())
        .nest(
            "/internal",
            internal::router().layer(middleware::from_fn_with_state(
                context.clone(),
                internal::require_internal_key,
            )),
        )
        .with_state(context)
}
