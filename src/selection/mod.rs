//! Filter, sort and paginate property listings.
//!
//! [`apply_filters_and_sort`] and [`total_count`] share one predicate,
//! [`ListingQuery::matches`], so a page and its total never disagree.

mod query;

pub use query::{ListingParams, ListingQuery, SortBy, SortOrder, StatusFilter, Threshold};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

use crate::models::Property;
use serde::Serialize;
use std::cmp::Ordering;

/// One page of a filtered listing plus totals for the whole match set.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

/// Filtered, stably sorted, paginated slice of `items`.
///
/// A page past the end is empty, not an error.
pub fn apply_filters_and_sort(items: &[Property], query: &ListingQuery) -> Vec<Property> {
    let mut matched: Vec<&Property> = items.iter().filter(|p| query.matches(p)).collect();
    matched.sort_by(|a, b| compare(a, b, query.sort_by, query.sort_order));

    let limit = query.limit as usize;
    if limit == 0 {
        return Vec::new();
    }
    let start = (query.page.max(1) as usize - 1).saturating_mul(limit);
    matched
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect()
}

/// Number of items the filters admit, ignoring sort and paging.
pub fn total_count(items: &[Property], query: &ListingQuery) -> usize {
    items.iter().filter(|p| query.matches(p)).count()
}

pub fn select(items: &[Property], query: &ListingQuery) -> Page<Property> {
    let total = total_count(items, query);
    let total_pages = match query.limit {
        0 => 0,
        limit => total.div_ceil(limit as usize),
    };
    Page {
        items: apply_filters_and_sort(items, query),
        total,
        page: query.page,
        limit: query.limit,
        total_pages,
    }
}

fn compare(a: &Property, b: &Property, by: SortBy, order: SortOrder) -> Ordering {
    match by {
        SortBy::Sqft => compare_present(a.sqft, b.sqft, order),
        SortBy::Price => compare_present(a.price, b.price, order),
        SortBy::Id => order.apply(compare_ids(&a.id, &b.id)),
    }
}

/// Items without the key sort after every item that has it, in both directions.
fn compare_present<T: PartialOrd>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => order.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Numeric ids compare as numbers and sort before non-numeric ones.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>().ok(), b.parse::<f64>().ok()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyStatus;

    fn home(id: &str, price: Option<u64>, beds: Option<f64>, sqft: Option<f64>) -> Property {
        Property {
            id: id.into(),
            slug: format!("home-{id}"),
            title: format!("Home {id}"),
            community: "Oak Ridge".into(),
            status: PropertyStatus::Available,
            price,
            beds,
            baths: Some(2.0),
            garages: Some(2.0),
            sqft,
            img: None,
            gallery: vec![],
            highlights: vec![],
            features: vec![],
            floor_plans: vec![],
            listing_url: None,
        }
    }

    fn ids(items: &[Property]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn price_descending_orders_highest_first() {
        let items = vec![
            home("1", Some(100_000), None, None),
            home("2", Some(50_000), None, None),
            home("3", Some(200_000), None, None),
        ];
        let query = ListingQuery {
            sort_by: SortBy::Price,
            sort_order: SortOrder::Desc,
            ..ListingQuery::default()
        };
        let prices: Vec<_> = apply_filters_and_sort(&items, &query)
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec![Some(200_000), Some(100_000), Some(50_000)]);
    }

    #[test]
    fn default_sort_is_sqft_descending() {
        let items = vec![
            home("1", None, None, Some(1500.0)),
            home("2", None, None, Some(2400.0)),
            home("3", None, None, Some(1800.0)),
        ];
        let sorted = apply_filters_and_sort(&items, &ListingQuery::default());
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn min_beds_excludes_missing_and_smaller() {
        let items = vec![
            home("1", None, Some(3.0), None),
            home("2", None, None, None),
            home("3", None, Some(2.0), None),
            home("4", None, Some(4.0), None),
        ];
        let query = ListingQuery {
            min_beds: Some(Threshold::At(3.0)),
            sort_by: SortBy::Id,
            sort_order: SortOrder::Asc,
            ..ListingQuery::default()
        };
        assert_eq!(ids(&apply_filters_and_sort(&items, &query)), vec!["1", "4"]);
        assert_eq!(total_count(&items, &query), 2);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            home("a", None, None, Some(2000.0)),
            home("b", None, None, Some(2000.0)),
            home("c", None, None, Some(2000.0)),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let query = ListingQuery {
                sort_order: order,
                ..ListingQuery::default()
            };
            assert_eq!(ids(&apply_filters_and_sort(&items, &query)), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn missing_sort_keys_go_last_both_ways() {
        let items = vec![
            home("1", None, None, None),
            home("2", None, None, Some(1000.0)),
            home("3", None, None, Some(3000.0)),
        ];
        for (order, expected) in [
            (SortOrder::Asc, vec!["2", "3", "1"]),
            (SortOrder::Desc, vec!["3", "2", "1"]),
        ] {
            let query = ListingQuery {
                sort_order: order,
                ..ListingQuery::default()
            };
            assert_eq!(ids(&apply_filters_and_sort(&items, &query)), expected);
        }
    }

    #[test]
    fn ids_sort_numerically() {
        let items = vec![
            home("10", None, None, None),
            home("9", None, None, None),
            home("x", None, None, None),
        ];
        let query = ListingQuery {
            sort_by: SortBy::Id,
            sort_order: SortOrder::Asc,
            ..ListingQuery::default()
        };
        assert_eq!(ids(&apply_filters_and_sort(&items, &query)), vec!["9", "10", "x"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<_> = (0..5).map(|i| home(&i.to_string(), None, None, None)).collect();
        let query = ListingQuery {
            page: 3,
            limit: 2,
            ..ListingQuery::default()
        };
        assert_eq!(apply_filters_and_sort(&items, &query).len(), 1);

        let query = ListingQuery {
            page: 4,
            limit: 2,
            ..ListingQuery::default()
        };
        assert!(apply_filters_and_sort(&items, &query).is_empty());
    }

    #[test]
    fn zero_limit_yields_empty_page() {
        let items = vec![home("1", None, None, None)];
        let query = ListingQuery {
            limit: 0,
            ..ListingQuery::default()
        };
        let page = select(&items, &query);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn select_reports_totals_independent_of_page() {
        let items: Vec<_> = (0..20).map(|i| home(&i.to_string(), None, None, None)).collect();
        let query = ListingQuery {
            page: 2,
            ..ListingQuery::default()
        };
        let page = select(&items, &query);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.total, 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, DEFAULT_LIMIT);
    }
}
