mod common;

use common::property;
use homesite_content::models::{Property, PropertyStatus};
use homesite_content::selection::{
    apply_filters_and_sort, select, total_count, ListingQuery, SortBy, SortOrder, StatusFilter,
    Threshold,
};
use proptest::prelude::*;

fn arb_property() -> impl Strategy<Value = Property> {
    (
        0u32..1000,
        proptest::option::of(50_000u64..900_000),
        proptest::option::of(1u8..7),
        proptest::option::of(800u32..4000),
    )
        .prop_map(|(id, price, beds, sqft)| {
            property(id, price, beds.map(f64::from), sqft.map(f64::from))
        })
}

fn arb_query() -> impl Strategy<Value = ListingQuery> {
    (
        proptest::option::of(prop_oneof![Just("oak"), Just("Willow"), Just("nowhere")]),
        proptest::option::of(100_000u64..800_000),
        proptest::option::of(1u8..6),
        proptest::option::of(prop_oneof![
            Just(StatusFilter::Is(PropertyStatus::Available)),
            Just(StatusFilter::Is(PropertyStatus::Sold)),
            Just(StatusFilter::Unknown),
        ]),
        prop_oneof![Just(SortBy::Sqft), Just(SortBy::Price), Just(SortBy::Id)],
        prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)],
        1u32..12,
    )
        .prop_map(|(community, max_price, beds, status, sort_by, sort_order, limit)| ListingQuery {
            community: community.map(str::to_string),
            max_price: max_price.map(|p| Threshold::At(p as f64)),
            min_beds: beds.map(|b| Threshold::At(f64::from(b))),
            status,
            sort_by,
            sort_order,
            limit,
            ..ListingQuery::default()
        })
}

proptest! {
    #[test]
    fn total_count_matches_unpaginated_listing(
        items in proptest::collection::vec(arb_property(), 0..40),
        query in arb_query(),
    ) {
        let everything = apply_filters_and_sort(&items, &query.unpaginated(items.len()));
        prop_assert_eq!(total_count(&items, &query), everything.len());
    }

    #[test]
    fn pages_concatenate_to_full_listing(
        items in proptest::collection::vec(arb_property(), 0..40),
        query in arb_query(),
    ) {
        let everything = apply_filters_and_sort(&items, &query.unpaginated(items.len()));
        let total_pages = select(&items, &query).total_pages;

        let mut stitched = Vec::new();
        for page in 1..=total_pages as u32 {
            let page_query = ListingQuery { page, ..query.clone() };
            stitched.extend(apply_filters_and_sort(&items, &page_query));
        }
        prop_assert_eq!(stitched, everything);

        let past_end = ListingQuery { page: total_pages as u32 + 1, ..query.clone() };
        prop_assert!(apply_filters_and_sort(&items, &past_end).is_empty());
    }

    #[test]
    fn repeated_calls_are_deterministic(
        items in proptest::collection::vec(arb_property(), 0..40),
        query in arb_query(),
    ) {
        prop_assert_eq!(
            apply_filters_and_sort(&items, &query),
            apply_filters_and_sort(&items, &query)
        );
    }
}

#[test]
fn price_descending_example() {
    let items = vec![
        property(1, Some(100_000), None, None),
        property(2, Some(50_000), None, None),
        property(3, Some(200_000), None, None),
    ];
    let query = ListingQuery {
        sort_by: SortBy::Price,
        ..ListingQuery::default()
    };
    let prices: Vec<u64> = apply_filters_and_sort(&items, &query)
        .into_iter()
        .filter_map(|p| p.price)
        .collect();
    assert_eq!(prices, vec![200_000, 100_000, 50_000]);
}

#[test]
fn beds_filter_excludes_missing_and_fewer() {
    let items = vec![
        property(1, None, Some(3.0), None),
        property(2, None, None, None),
        property(3, None, Some(2.0), None),
        property(4, None, Some(5.0), None),
    ];
    let query = ListingQuery {
        min_beds: Some(Threshold::At(3.0)),
        ..ListingQuery::default()
    };
    let mut ids: Vec<String> = apply_filters_and_sort(&items, &query)
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn invalid_threshold_matches_nothing() {
    let items = vec![property(1, Some(1), Some(9.0), Some(9999.0))];
    let query = ListingQuery {
        min_garages: Some(Threshold::Invalid),
        ..ListingQuery::default()
    };
    assert_eq!(total_count(&items, &query), 0);
}
