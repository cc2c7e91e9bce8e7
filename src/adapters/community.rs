use super::property::{adapt_property, whole_price, RawProperty};
use super::{loose, required, Adapt};
use crate::models::Community;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommunity {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub address: Option<String>,
    #[serde(default, alias = "lat", deserialize_with = "loose::number")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "long", alias = "lng", deserialize_with = "loose::number")]
    pub longitude: Option<f64>,
    #[serde(default, alias = "image", alias = "cardImage", deserialize_with = "loose::text")]
    pub img: Option<String>,
    #[serde(default, alias = "images", deserialize_with = "loose::strings")]
    pub gallery: Vec<String>,
    #[serde(default, alias = "videoUrl", deserialize_with = "loose::text")]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub features: Option<String>,
    #[serde(default, rename = "floor-plans", alias = "floorPlans")]
    pub floor_plans: Option<Vec<RawProperty>>,
    #[serde(default, alias = "starting_price", deserialize_with = "loose::number")]
    pub starting_price: Option<f64>,
}

impl Adapt for Community {
    const RESOURCE: &'static str = "communities";
    const COLLECTION_KEY: &'static str = "communities";

    type Raw = RawCommunity;

    fn adapt(raw: RawCommunity) -> Result<Self, String> {
        let slug = required("slug", raw.slug)?;
        let title = required("title", raw.title)?;

        let floor_plans = raw
            .floor_plans
            .unwrap_or_default()
            .into_iter()
            .map(|plan| adapt_property(plan, Some(title.as_str())))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("community '{slug}' floor plan: {e}"))?;

        let starting_price = whole_price(raw.starting_price)
            .or_else(|| floor_plans.iter().filter_map(|p| p.price).min());

        Ok(Community {
            id: required("id", raw.id)?,
            slug,
            title,
            city: raw.city,
            address: raw.address,
            latitude: raw.latitude,
            longitude: raw.longitude,
            img: raw.img.or_else(|| raw.gallery.first().cloned()),
            gallery: raw.gallery,
            video: raw.video,
            features: raw.features,
            floor_plans,
            starting_price,
        })
    }
}
