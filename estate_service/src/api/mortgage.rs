//! Mortgage estimate endpoint.
//!
//! Stateless: everything is computed from the query, nothing is stored.

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;
use crate::domain::mortgage::{MortgageTerms, estimate};

pub fn router() -> Router<ApiContext> {
    Router::new().route("/estimate", get(estimate_mortgage))
}

#[derive(Debug, Error)]
pub enum MortgageEstimateErr {
    #[error("{0}")]
    InvalidTerms(&'static str),
}

impl IntoResponse for MortgageEstimateErr {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MortgageQuery {
    /// Purchase price in dollars.
    pub price: f64,
    /// Up-front payment in dollars. Defaults to zero.
    #[serde(default)]
    pub down_payment: f64,
    /// Annual interest rate as a percentage, e.g. `5.25`.
    pub annual_rate: f64,
    /// Amortization period in years.
    pub term_years: u32,
}

/// Payment estimate, rounded to cents.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MortgageEstimateResponse {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

#[utoipa::path(
    get,
    path = "/mortgage/estimate",
    params(
        ("price" = f64, Query, description = "Purchase price in dollars"),
        ("downPayment" = Option<f64>, Query, description = "Up-front payment in dollars, defaults to zero"),
        ("annualRate" = f64, Query, description = "Annual interest rate as a percentage"),
        ("termYears" = u32, Query, description = "Amortization period in years"),
    ),
    responses(
        (status = 200, description = "Payment estimate", body = MortgageEstimateResponse),
        (status = 400, description = "Invalid terms"),
    ),
    tag = "Mortgage"
)]
#[tracing::instrument]
pub async fn estimate_mortgage(
    Query(query): Query<MortgageQuery>,
) -> Result<Json<MortgageEstimateResponse>, MortgageEstimateErr> {
    let terms = validate(&query)?;
    let payments = estimate(terms);

    Ok(Json(MortgageEstimateResponse {
        loan_amount: round_cents(terms.principal),
        monthly_payment: round_cents(payments.monthly_payment),
        total_interest: round_cents(payments.total_interest),
        total_cost: round_cents(payments.total_cost),
    }))
}

fn validate(query: &MortgageQuery) -> Result<MortgageTerms, MortgageEstimateErr> {
    if !query.price.is_finite() || query.price <= 0.0 {
        return Err(MortgageEstimateErr::InvalidTerms(
            "Price must be a positive amount",
        ));
    }
    if !query.down_payment.is_finite() || query.down_payment < 0.0 {
        return Err(MortgageEstimateErr::InvalidTerms(
            "Down payment must not be negative",
        ));
    }
    if query.down_payment >= query.price {
        return Err(MortgageEstimateErr::InvalidTerms(
            "Down payment must be smaller than the price",
        ));
    }
    if !query.annual_rate.is_finite() || query.annual_rate < 0.0 {
        return Err(MortgageEstimateErr::InvalidTerms(
            "Interest rate must not be negative",
        ));
    }
    if query.term_years == 0 {
        return Err(MortgageEstimateErr::InvalidTerms(
            "Term must be at least one year",
        ));
    }

    Ok(MortgageTerms {
        principal: query.price - query.down_payment,
        annual_rate_pct: query.annual_rate,
        term_years: query.term_years,
    })
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
