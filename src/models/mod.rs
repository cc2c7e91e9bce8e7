use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown wherever a property carries no price.
pub const CONTACT_FOR_PRICE: &str = "Contact for price";

/// Lookup keys shared by every content collection.
pub trait Content {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
}

/// Sales status of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PropertyStatus {
    Available,
    Sold,
    ComingSoon,
    NowSelling,
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            "comingsoon" => Ok(Self::ComingSoon),
            "nowselling" => Ok(Self::NowSelling),
            _ => Err(format!("unknown property status '{}'", s.trim())),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::ComingSoon => "Coming Soon",
            Self::NowSelling => "Now Selling",
        };
        f.write_str(label)
    }
}

/// Titled block of free text on a property page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSection {
    pub title: String,
    pub body: String,
}

/// A home or floor plan offered in a community
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub community: String,
    pub status: PropertyStatus,
    pub price: Option<u64>,
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub garages: Option<f64>,
    pub sqft: Option<f64>,
    pub img: Option<String>,
    pub gallery: Vec<String>,
    pub highlights: Vec<String>,
    pub features: Vec<FeatureSection>,
    pub floor_plans: Vec<String>,
    pub listing_url: Option<String>,
}

impl Property {
    /// Display price, e.g. `$450,000`, or [`CONTACT_FOR_PRICE`].
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${}", group_thousands(price)),
            None => CONTACT_FOR_PRICE.to_string(),
        }
    }
}

impl Content for Property {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A community (subdivision) with its floor plans
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub img: Option<String>,
    pub gallery: Vec<String>,
    pub video: Option<String>,
    pub features: Option<String>,
    pub floor_plans: Vec<Property>,
    pub starting_price: Option<u64>,
}

impl Community {
    /// Loose name match used to scope the global property set to this community.
    pub fn owns(&self, property: &Property) -> bool {
        let ours = self.title.trim().to_lowercase();
        let theirs = property.community.trim().to_lowercase();
        if ours.is_empty() || theirs.is_empty() {
            return false;
        }
        ours.contains(&theirs) || theirs.contains(&ours)
    }
}

impl Content for Community {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub img: Option<String>,
    pub features: Vec<String>,
}

impl Content for Service {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryAlbum {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub cover: Option<String>,
    pub images: Vec<String>,
}

impl Content for GalleryAlbum {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub img: Option<String>,
}

impl Content for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub img: Option<String>,
}

impl Content for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Article in the building-options index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildingOption {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub img: Option<String>,
}

impl Content for BuildingOption {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub heading: Option<String>,
    pub body: String,
}

/// Single-document pages (home, about us, privacy policy)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub cover_image: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    AboutUs,
    PrivacyPolicy,
}

impl PageKind {
    /// CMS resource name for this page.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::AboutUs => "about-us",
            Self::PrivacyPolicy => "privacy-policy",
        }
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "about-us" => Ok(Self::AboutUs),
            "privacy-policy" => Ok(Self::PrivacyPolicy),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}
