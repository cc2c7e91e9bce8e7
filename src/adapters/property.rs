use super::{loose, required, Adapt};
use crate::models::{FeatureSection, Property, PropertyStatus};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawFeatureSection {
    #[serde(default, alias = "heading", deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "description", alias = "content", deserialize_with = "loose::text")]
    pub body: Option<String>,
}

/// Property record as served by the CMS or the bundled `properties.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "communityName", deserialize_with = "loose::text")]
    pub community: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::number")]
    pub price: Option<f64>,
    #[serde(default, alias = "bedrooms", deserialize_with = "loose::number")]
    pub beds: Option<f64>,
    #[serde(default, alias = "bathrooms", deserialize_with = "loose::number")]
    pub baths: Option<f64>,
    #[serde(default, alias = "garage", deserialize_with = "loose::number")]
    pub garages: Option<f64>,
    #[serde(default, alias = "squareFeet", deserialize_with = "loose::number")]
    pub sqft: Option<f64>,
    #[serde(default, alias = "image", deserialize_with = "loose::text")]
    pub img: Option<String>,
    #[serde(default, alias = "images", deserialize_with = "loose::strings")]
    pub gallery: Vec<String>,
    #[serde(default, alias = "badges", deserialize_with = "loose::strings")]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub features: Option<Vec<RawFeatureSection>>,
    #[serde(default, alias = "floorPlanImages", deserialize_with = "loose::strings")]
    pub floor_plans: Vec<String>,
    #[serde(default, alias = "link", alias = "externalLink", deserialize_with = "loose::text")]
    pub listing_url: Option<String>,
}

/// Builds a [`Property`], filling a missing community name from `community`
/// when the record is embedded in a community payload.
pub fn adapt_property(raw: RawProperty, community: Option<&str>) -> Result<Property, String> {
    let slug = required("slug", raw.slug)?;
    let title = required("title", raw.title)?;
    let community = raw
        .community
        .or_else(|| community.map(str::to_string))
        .ok_or_else(|| format!("property '{slug}' has no community"))?;
    let status = match raw.status {
        Some(status) => status.parse::<PropertyStatus>()?,
        None => PropertyStatus::Available,
    };
    let features = raw
        .features
        .unwrap_or_default()
        .into_iter()
        .filter_map(|section| match (section.title, section.body) {
            (None, None) => None,
            (title, body) => Some(FeatureSection {
                title: title.unwrap_or_default(),
                body: body.unwrap_or_default(),
            }),
        })
        .collect();
    let img = raw.img.or_else(|| raw.gallery.first().cloned());

    Ok(Property {
        id: required("id", raw.id)?,
        slug,
        title,
        community,
        status,
        price: whole_price(raw.price),
        beds: raw.beds,
        baths: raw.baths,
        garages: raw.garages,
        sqft: raw.sqft,
        img,
        gallery: raw.gallery,
        highlights: raw.highlights,
        features,
        floor_plans: raw.floor_plans,
        listing_url: raw.listing_url,
    })
}

/// Drops cents the way the site has always shown prices. Negative values
/// mean "not published".
pub(crate) fn whole_price(price: Option<f64>) -> Option<u64> {
    price.filter(|p| *p >= 0.0).map(|p| p.trunc() as u64)
}

impl Adapt for Property {
    const RESOURCE: &'static str = "properties";
    const COLLECTION_KEY: &'static str = "properties";

    type Raw = RawProperty;

    fn adapt(raw: RawProperty) -> Result<Self, String> {
        adapt_property(raw, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{adapt_collection, adapt_one};
    use serde_json::json;

    #[test]
    fn adapts_string_typed_numbers_once() {
        let property: Property = adapt_one(
            "properties",
            json!({
                "id": 12,
                "slug": "the-aspen",
                "title": "The Aspen",
                "community": "Oak Ridge",
                "status": "Now selling",
                "price": "$389,900",
                "beds": "4",
                "baths": "2.5",
                "garages": 2,
                "sqft": "2,150",
                "image": "/img/aspen.jpg",
                "gallery": ["/img/aspen-1.jpg", {"url": "/img/aspen-2.jpg"}],
                "highlights": ["Corner lot"],
                "features": [{"title": "Kitchen", "description": "Quartz counters"}, {}],
                "floorPlans": ["/img/aspen-plan.png"],
                "link": "https://mls.example/123"
            }),
        )
        .unwrap();

        assert_eq!(property.id, "12");
        assert_eq!(property.status, PropertyStatus::NowSelling);
        assert_eq!(property.price, Some(389_900));
        assert_eq!(property.beds, Some(4.0));
        assert_eq!(property.baths, Some(2.5));
        assert_eq!(property.garages, Some(2.0));
        assert_eq!(property.sqft, Some(2150.0));
        assert_eq!(property.img.as_deref(), Some("/img/aspen.jpg"));
        assert_eq!(property.gallery.len(), 2);
        assert_eq!(property.features.len(), 1);
        assert_eq!(property.features[0].body, "Quartz counters");
        assert_eq!(property.floor_plans, vec!["/img/aspen-plan.png"]);
        assert_eq!(property.listing_url.as_deref(), Some("https://mls.example/123"));
    }

    #[test]
    fn missing_optional_fields_default_explicitly() {
        let property: Property = adapt_one(
            "properties",
            json!({"id": "a1", "slug": "birch", "title": "Birch", "community": "Elm Park",
                   "price": "", "beds": "TBD", "gallery": ["/b1.jpg"]}),
        )
        .unwrap();

        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.price, None);
        assert_eq!(property.price_label(), "Contact for price");
        assert_eq!(property.beds, None);
        assert_eq!(property.listing_url, None);
        assert_eq!(property.img.as_deref(), Some("/b1.jpg"));
        assert!(property.highlights.is_empty());
    }

    #[test]
    fn cents_are_dropped_not_rounded() {
        assert_eq!(whole_price(Some(149_999.6)), Some(149_999));
        assert_eq!(whole_price(Some(0.0)), Some(0));
        assert_eq!(whole_price(Some(-1.0)), None);
    }

    #[test]
    fn unknown_status_fails_loudly() {
        let err = adapt_collection::<Property>(json!([
            {"id": 1, "slug": "a", "title": "A", "community": "X", "status": "pending"}
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("unknown property status"));
    }

    #[test]
    fn community_is_required_unless_embedded() {
        let raw = || -> RawProperty {
            serde_json::from_value(json!({"id": 1, "slug": "a", "title": "A"})).unwrap()
        };
        assert!(adapt_property(raw(), None).is_err());
        assert_eq!(adapt_property(raw(), Some("Oak Ridge")).unwrap().community, "Oak Ridge");
    }
}
