use crate::adapters::loose::parse_number;
use crate::models::{Property, PropertyStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 9;
/// Upper bound on `limit` accepted from query strings.
pub const MAX_LIMIT: u32 = 100;

/// Listing parameters exactly as they arrive in a query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    pub community: Option<String>,
    /// Price ceiling
    pub price: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub garages: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// A coerced numeric bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    At(f64),
    /// The parameter was present but not a number: nothing matches.
    Invalid,
}

impl Threshold {
    /// Blank or absent parameters impose no bound.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        Some(parse_number(raw).map_or(Self::Invalid, Self::At))
    }

    fn admits_at_least(self, value: Option<f64>) -> bool {
        match self {
            Self::At(bound) => value.is_some_and(|v| v >= bound),
            Self::Invalid => false,
        }
    }

    fn admits_at_most(self, value: Option<f64>) -> bool {
        match self {
            Self::At(bound) => value.is_some_and(|v| v <= bound),
            Self::Invalid => false,
        }
    }

    /// The more restrictive of two upper bounds.
    fn tighter_ceiling(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(Self::At(x)), Some(Self::At(y))) => Some(Self::At(x.min(y))),
            (Some(Self::Invalid), _) | (_, Some(Self::Invalid)) => Some(Self::Invalid),
            (bound, None) | (None, bound) => bound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Is(PropertyStatus),
    /// Unrecognised status parameter: nothing matches.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Sqft,
    Price,
    Id,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqft" => Ok(Self::Sqft),
            "price" => Ok(Self::Price),
            "id" => Ok(Self::Id),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub(crate) fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// Coerced listing query. Each filter applies only when set; set filters
/// combine with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// Case-insensitive substring of the property's community name.
    pub community: Option<String>,
    pub max_price: Option<Threshold>,
    pub min_price: Option<Threshold>,
    pub min_beds: Option<Threshold>,
    pub min_baths: Option<Threshold>,
    pub min_garages: Option<Threshold>,
    pub status: Option<StatusFilter>,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            community: None,
            max_price: None,
            min_price: None,
            min_beds: None,
            min_baths: None,
            min_garages: None,
            status: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ListingQuery {
    /// The single filter predicate behind both listings and counts.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(needle) = &self.community {
            if !property.community.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        let price = property.price.map(|p| p as f64);
        let ceilings = self.max_price.map_or(true, |t| t.admits_at_most(price));
        let floors = [
            (self.min_price, price),
            (self.min_beds, property.beds),
            (self.min_baths, property.baths),
            (self.min_garages, property.garages),
        ]
        .into_iter()
        .all(|(bound, value)| bound.map_or(true, |t| t.admits_at_least(value)));
        if !(ceilings && floors) {
            return false;
        }

        match self.status {
            Some(StatusFilter::Is(status)) => property.status == status,
            Some(StatusFilter::Unknown) => false,
            None => true,
        }
    }

    /// Same filters and sort, every match on one page.
    pub fn unpaginated(&self, len: usize) -> Self {
        Self {
            page: 1,
            limit: u32::try_from(len).unwrap_or(u32::MAX),
            ..self.clone()
        }
    }
}

fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl From<&ListingParams> for ListingQuery {
    fn from(params: &ListingParams) -> Self {
        let page = present(params.page.as_ref())
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE);
        let limit = present(params.limit.as_ref())
            .and_then(|s| s.parse::<u32>().ok())
            .map_or(DEFAULT_LIMIT, |l| l.min(MAX_LIMIT));

        Self {
            community: present(params.community.as_ref()).map(str::to_string),
            max_price: Threshold::tighter_ceiling(
                Threshold::parse(params.price.as_deref()),
                Threshold::parse(params.max.as_deref()),
            ),
            min_price: Threshold::parse(params.min.as_deref()),
            min_beds: Threshold::parse(params.beds.as_deref()),
            min_baths: Threshold::parse(params.baths.as_deref()),
            min_garages: Threshold::parse(params.garages.as_deref()),
            status: present(params.status.as_ref()).map(|s| {
                s.parse::<PropertyStatus>()
                    .map_or(StatusFilter::Unknown, StatusFilter::Is)
            }),
            page,
            limit,
            sort_by: present(params.sort_by.as_ref())
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            sort_order: present(params.sort_order.as_ref())
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl From<ListingParams> for ListingQuery {
    fn from(params: ListingParams) -> Self {
        Self::from(&params)
    }
}
