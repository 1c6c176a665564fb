use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use cool_asserts::assert_matches;
use models_estate::service::Listing;
use uuid::Uuid;

use crate::{ListingFilters, ListingQueryParams, PriceRange, SortOrder, apply};

fn listing(
    address: &str,
    city: &str,
    price: i64,
    property_type: &str,
    market_status: Option<&str>,
) -> Listing {
    Listing {
        id: Uuid::new_v4(),
        address: address.to_string(),
        city: city.to_string(),
        price,
        property_type: property_type.to_string(),
        market_status: market_status.map(str::to_string),
        bedrooms: Some(3),
        bathrooms: Some(2),
        square_feet: Some(1400),
        description: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Snapshot in storage order (newest listing first).
fn catalog() -> Vec<Listing> {
    vec![
        listing("401 Front St W", "Toronto", 450_000, "condo", Some("active")),
        listing("18 Toronto Road", "Vancouver", 2_400_000, "house", Some("active")),
        listing("92 Bloor St E", "Toronto", 1_000_000, "house", Some("sold")),
        listing("7 Jasper Ave", "Edmonton", 320_000, "townhouse", None),
        listing("55 Marine Dr", "Vancouver", 2_000_000, "house", Some("active")),
        listing("130 King St", "Hamilton", 450_000, "condo", Some("active")),
    ]
}

fn addresses(results: &[Listing]) -> Vec<&str> {
    results.iter().map(|l| l.address.as_str()).collect()
}

fn ids(results: &[Listing]) -> HashSet<Uuid> {
    results.iter().map(|l| l.id).collect()
}

// ===== Pipeline =====

#[test]
fn no_criteria_returns_everything_cheapest_first() {
    let results = apply(&catalog(), &ListingFilters::default());

    assert_eq!(results.len(), 6);
    let prices: Vec<i64> = results.iter().map(|l| l.price).collect();
    assert_eq!(
        prices,
        vec![320_000, 450_000, 450_000, 1_000_000, 2_000_000, 2_400_000]
    );
}

#[test]
fn newest_sort_with_no_criteria_is_the_identity() {
    let snapshot = catalog();
    let filters = ListingFilters {
        sort: SortOrder::Newest,
        ..Default::default()
    };

    assert_eq!(apply(&snapshot, &filters), snapshot);
}

#[test]
fn apply_is_pure_and_repeatable() {
    let snapshot = catalog();
    let untouched = snapshot.clone();
    let filters = ListingFilters {
        location: Some("toronto".to_string()),
        price_range: Some(PriceRange::UpTo500K),
        sort: SortOrder::PriceDesc,
        ..Default::default()
    };

    let first = apply(&snapshot, &filters);
    let second = apply(&snapshot, &filters);

    assert_eq!(first, second);
    assert_eq!(snapshot, untouched);
}

#[test]
fn location_matches_city_and_address_case_insensitively() {
    let filters = ListingFilters {
        location: Some("toronto".to_string()),
        sort: SortOrder::Newest,
        ..Default::default()
    };

    let results = apply(&catalog(), &filters);

    // The Vancouver listing matches on its street name alone.
    assert_eq!(
        addresses(&results),
        vec!["401 Front St W", "18 Toronto Road", "92 Bloor St E"]
    );
}

#[test]
fn location_matches_address_substring() {
    let filters = ListingFilters {
        location: Some("marine".to_string()),
        ..Default::default()
    };

    let results = apply(&catalog(), &filters);
    assert_eq!(addresses(&results), vec!["55 Marine Dr"]);
}

#[test]
fn location_matching_nothing_returns_empty() {
    let filters = ListingFilters {
        location: Some("Saskatoon".to_string()),
        ..Default::default()
    };

    assert!(apply(&catalog(), &filters).is_empty());
}

#[test]
fn property_type_is_exact_and_case_sensitive() {
    let condos = ListingFilters {
        property_type: Some("condo".to_string()),
        ..Default::default()
    };
    assert_eq!(apply(&catalog(), &condos).len(), 2);

    let capitalized = ListingFilters {
        property_type: Some("Condo".to_string()),
        ..Default::default()
    };
    assert!(apply(&catalog(), &capitalized).is_empty());
}

#[test]
fn market_status_excludes_listings_without_a_status() {
    let filters = ListingFilters {
        market_status: Some("active".to_string()),
        sort: SortOrder::Newest,
        ..Default::default()
    };

    let results = apply(&catalog(), &filters);

    assert_eq!(results.len(), 4);
    assert!(!addresses(&results).contains(&"7 Jasper Ave"));
    assert!(!addresses(&results).contains(&"92 Bloor St E"));
}

#[test]
fn combined_criteria_select_the_intersection() {
    let snapshot = catalog();

    let combined = ListingFilters {
        location: Some("toronto".to_string()),
        price_range: Some(PriceRange::UpTo500K),
        property_type: Some("condo".to_string()),
        market_status: Some("active".to_string()),
        ..Default::default()
    };
    let results = apply(&snapshot, &combined);
    assert_eq!(addresses(&results), vec!["401 Front St W"]);

    // Same selection as intersecting each criterion applied on its own.
    let mut expected = ids(&apply(
        &snapshot,
        &ListingFilters {
            location: Some("toronto".to_string()),
            ..Default::default()
        },
    ));
    for narrower in [
        ListingFilters {
            price_range: Some(PriceRange::UpTo500K),
            ..Default::default()
        },
        ListingFilters {
            property_type: Some("condo".to_string()),
            ..Default::default()
        },
        ListingFilters {
            market_status: Some("active".to_string()),
            ..Default::default()
        },
    ] {
        expected = &expected & &ids(&apply(&snapshot, &narrower));
    }

    assert_eq!(ids(&results), expected);
}

// ===== Price bands =====

#[test]
fn price_band_edges() {
    assert!(PriceRange::UpTo500K.matches(499_999));
    assert!(!PriceRange::UpTo500K.matches(500_000));

    assert!(PriceRange::From500KTo1M.matches(500_000));
    assert!(PriceRange::From500KTo1M.matches(1_000_000));

    assert!(PriceRange::From1MTo2M.matches(1_000_000));
    assert!(PriceRange::From1MTo2M.matches(2_000_000));

    assert!(!PriceRange::Over2M.matches(2_000_000));
    assert!(PriceRange::Over2M.matches(2_000_001));
}

#[test]
fn exactly_one_million_sits_in_both_interior_bands() {
    let snapshot = catalog();

    for range in [PriceRange::From500KTo1M, PriceRange::From1MTo2M] {
        let filters = ListingFilters {
            price_range: Some(range),
            ..Default::default()
        };
        let results = apply(&snapshot, &filters);
        assert!(
            addresses(&results).contains(&"92 Bloor St E"),
            "1,000,000 listing missing from {range:?}"
        );
    }
}

// ===== Ordering =====

#[test]
fn price_desc_orders_most_expensive_first() {
    let filters = ListingFilters {
        sort: SortOrder::PriceDesc,
        ..Default::default()
    };

    let results = apply(&catalog(), &filters);
    let prices: Vec<i64> = results.iter().map(|l| l.price).collect();
    assert_eq!(
        prices,
        vec![2_400_000, 2_000_000, 1_000_000, 450_000, 450_000, 320_000]
    );
}

#[test]
fn price_sorts_keep_snapshot_order_for_equal_prices() {
    // Two condos share a price; the newer one (earlier in the snapshot)
    // must stay first under both orderings.
    for sort in [SortOrder::PriceAsc, SortOrder::PriceDesc] {
        let filters = ListingFilters {
            property_type: Some("condo".to_string()),
            sort,
            ..Default::default()
        };
        let results = apply(&catalog(), &filters);
        assert_eq!(
            addresses(&results),
            vec!["401 Front St W", "130 King St"],
            "unstable under {sort:?}"
        );
    }
}

// ===== Query parameter folding =====

#[test]
fn query_params_fold_into_typed_criteria() {
    let params = ListingQueryParams {
        location: Some("Toronto".to_string()),
        price_range: Some("0-500000".to_string()),
        property_type: Some("condo".to_string()),
        market_status: Some("active".to_string()),
        sort_order: Some("price-desc".to_string()),
    };

    let filters = ListingFilters::from(params);

    assert_eq!(filters.location.as_deref(), Some("Toronto"));
    assert_matches!(filters.price_range, Some(PriceRange::UpTo500K));
    assert_eq!(filters.property_type.as_deref(), Some("condo"));
    assert_eq!(filters.market_status.as_deref(), Some("active"));
    assert_eq!(filters.sort, SortOrder::PriceDesc);
    assert!(filters.is_narrowing());
}

#[test]
fn blank_and_any_params_disable_their_criteria() {
    let params = ListingQueryParams {
        location: Some(String::new()),
        price_range: Some("any".to_string()),
        property_type: Some("any".to_string()),
        market_status: Some(String::new()),
        sort_order: None,
    };

    let filters = ListingFilters::from(params);

    assert_eq!(filters, ListingFilters::default());
    assert!(!filters.is_narrowing());
}

#[test]
fn garbage_price_range_disables_the_criterion() {
    let params = ListingQueryParams {
        price_range: Some("123-456".to_string()),
        ..Default::default()
    };

    assert_eq!(ListingFilters::from(params).price_range, None);
}

#[test]
fn absent_sort_defaults_to_cheapest_first() {
    let filters = ListingFilters::from(ListingQueryParams::default());
    assert_eq!(filters.sort, SortOrder::PriceAsc);
}

#[test]
fn unknown_sort_token_leaves_order_untouched() {
    let snapshot = catalog();
    let params = ListingQueryParams {
        sort_order: Some("shiniest".to_string()),
        ..Default::default()
    };

    let filters = ListingFilters::from(params);
    assert_eq!(filters.sort, SortOrder::Newest);
    assert_eq!(apply(&snapshot, &filters), snapshot);
}

#[test]
fn price_range_tokens_match_the_search_ui() {
    for (token, range) in [
        ("0-500000", PriceRange::UpTo500K),
        ("500000-1000000", PriceRange::From500KTo1M),
        ("1000000-2000000", PriceRange::From1MTo2M),
        ("2000000+", PriceRange::Over2M),
    ] {
        assert_eq!(range.to_string(), token);
        assert_eq!(token.parse::<PriceRange>().unwrap(), range);
    }
}

#[test]
fn sort_tokens_parse() {
    assert_eq!("price-asc".parse::<SortOrder>().unwrap(), SortOrder::PriceAsc);
    assert_eq!(
        "price-desc".parse::<SortOrder>().unwrap(),
        SortOrder::PriceDesc
    );
    assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
}

#[test]
fn query_params_deserialize_from_camel_case() {
    let params: ListingQueryParams =
        serde_json::from_str(r#"{"priceRange":"2000000+","sortOrder":"newest"}"#).unwrap();

    assert_eq!(params.price_range.as_deref(), Some("2000000+"));
    assert_eq!(params.sort_order.as_deref(), Some("newest"));
    assert_eq!(params.location, None);
}
