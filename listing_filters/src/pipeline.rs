//! The filter/sort pipeline.

use models_estate::service::Listing;

use crate::{ListingFilters, SortOrder};

/// Run the pipeline over a snapshot of listings.
///
/// Pure over its inputs: the source slice is never mutated, and the same
/// snapshot with the same criteria always yields the same result. Each
/// enabled criterion is a narrowing pass over the survivors of the
/// previous one, and the ordering pass runs exactly once at the end.
pub fn apply(listings: &[Listing], filters: &ListingFilters) -> Vec<Listing> {
    let mut results: Vec<Listing> = listings.to_vec();

    if let Some(location) = &filters.location {
        let needle = location.to_lowercase();
        results.retain(|listing| matches_location(listing, &needle));
    }

    if let Some(range) = filters.price_range {
        results.retain(|listing| range.matches(listing.price));
    }

    if let Some(property_type) = &filters.property_type {
        results.retain(|listing| listing.property_type == *property_type);
    }

    if let Some(status) = &filters.market_status {
        results.retain(|listing| listing.market_status.as_deref() == Some(status.as_str()));
    }

    sort(&mut results, filters.sort);

    results
}

/// A listing matches a location when the needle occurs in its address or
/// its city. The needle must already be lowercased.
fn matches_location(listing: &Listing, needle: &str) -> bool {
    listing.address.to_lowercase().contains(needle) || listing.city.to_lowercase().contains(needle)
}

/// Both price orderings are stable, so listings with equal prices keep
/// their snapshot order.
fn sort(results: &mut [Listing], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => results.sort_by_key(|listing| listing.price),
        SortOrder::PriceDesc => results.sort_by_key(|listing| std::cmp::Reverse(listing.price)),
        SortOrder::Newest => {}
    }
}
