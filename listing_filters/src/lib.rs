//! # Listing Filters
//!
//! Filter criteria and the filter/sort pipeline behind the public listings
//! index. The pipeline itself ([`apply`]) is a pure function over an
//! in-memory snapshot of listings; nothing in this crate touches storage.
//!
//! Criteria arrive as loose query strings ([`ListingQueryParams`]) and are
//! folded into typed criteria ([`ListingFilters`]) permissively: a value
//! that cannot be understood simply disables that criterion. Browsers with
//! stale frontends or hand-edited URLs get the unfiltered view of that
//! dimension, never an error page.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

mod pipeline;
#[cfg(test)]
mod tests;

pub use pipeline::apply;

/// Price band tokens offered by the search UI.
///
/// The interior band edges are inclusive on both sides, so a price of
/// exactly 1,000,000 sits in both `500000-1000000` and `1000000-2000000`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    JsonSchema,
    Display,
    EnumString,
)]
pub enum PriceRange {
    #[serde(rename = "0-500000")]
    #[strum(serialize = "0-500000")]
    UpTo500K,

    #[serde(rename = "500000-1000000")]
    #[strum(serialize = "500000-1000000")]
    From500KTo1M,

    #[serde(rename = "1000000-2000000")]
    #[strum(serialize = "1000000-2000000")]
    From1MTo2M,

    #[serde(rename = "2000000+")]
    #[strum(serialize = "2000000+")]
    Over2M,
}

impl PriceRange {
    /// Whether a price in whole dollars falls inside this band.
    pub fn matches(self, price: i64) -> bool {
        match self {
            PriceRange::UpTo500K => price < 500_000,
            PriceRange::From500KTo1M => (500_000..=1_000_000).contains(&price),
            PriceRange::From1MTo2M => (1_000_000..=2_000_000).contains(&price),
            PriceRange::Over2M => price > 2_000_000,
        }
    }
}

/// Orderings the listings index can serve.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    /// Cheapest first. The default ordering of the index.
    #[default]
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// No reordering. Storage hands listings over newest-first, so the
    /// snapshot order already is the recency order.
    Newest,
}

/// Typed criteria for one run of the pipeline.
///
/// `None` means the criterion is disabled and every listing passes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilters {
    /// Case-insensitive substring matched against address and city.
    pub location: Option<String>,
    pub price_range: Option<PriceRange>,
    /// Exact, case-sensitive property type, e.g. `condo`.
    pub property_type: Option<String>,
    /// Exact market status, e.g. `active`. Listings without a recorded
    /// status never match when this is set.
    pub market_status: Option<String>,
    pub sort: SortOrder,
}

impl ListingFilters {
    /// Whether any narrowing criterion is set.
    pub fn is_narrowing(&self) -> bool {
        self.location.is_some()
            || self.price_range.is_some()
            || self.property_type.is_some()
            || self.market_status.is_some()
    }
}

/// Raw query parameters of the listings index, exactly as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQueryParams {
    pub location: Option<String>,
    pub price_range: Option<String>,
    pub property_type: Option<String>,
    pub market_status: Option<String>,
    pub sort_order: Option<String>,
}

impl From<ListingQueryParams> for ListingFilters {
    fn from(params: ListingQueryParams) -> Self {
        ListingFilters {
            location: params.location.filter(|location| !location.is_empty()),
            price_range: params.price_range.as_deref().and_then(parse_price_range),
            property_type: params
                .property_type
                .filter(|property_type| !property_type.is_empty() && property_type != "any"),
            market_status: params.market_status.filter(|status| !status.is_empty()),
            sort: parse_sort_order(params.sort_order.as_deref()),
        }
    }
}

fn parse_price_range(raw: &str) -> Option<PriceRange> {
    if raw.is_empty() || raw == "any" {
        return None;
    }
    PriceRange::from_str(raw).ok()
}

/// An absent parameter gets the default ordering; a present but unknown
/// token gets the no-reordering behavior instead of an error.
fn parse_sort_order(raw: Option<&str>) -> SortOrder {
    match raw {
        None => SortOrder::default(),
        Some(token) => SortOrder::from_str(token).unwrap_or(SortOrder::Newest),
    }
}
