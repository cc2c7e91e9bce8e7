use super::{loose, required, slugify, Adapt};
use crate::models::{BuildingOption, Event, GalleryAlbum, Service, TeamMember};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawService {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "body", alias = "content", deserialize_with = "loose::text")]
    pub description: Option<String>,
    #[serde(default, alias = "image", alias = "icon", deserialize_with = "loose::text")]
    pub img: Option<String>,
    #[serde(default, alias = "items", deserialize_with = "loose::strings")]
    pub features: Vec<String>,
}

impl Adapt for Service {
    const RESOURCE: &'static str = "services";
    const COLLECTION_KEY: &'static str = "services";

    type Raw = RawService;

    fn adapt(raw: RawService) -> Result<Self, String> {
        Ok(Service {
            id: required("id", raw.id)?,
            slug: required("slug", raw.slug)?,
            title: required("title", raw.title)?,
            description: raw.description,
            img: raw.img,
            features: raw.features,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlbum {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "coverImage", deserialize_with = "loose::text")]
    pub cover: Option<String>,
    #[serde(default, alias = "photos", alias = "gallery", deserialize_with = "loose::strings")]
    pub images: Vec<String>,
}

impl Adapt for GalleryAlbum {
    const RESOURCE: &'static str = "gallery";
    const COLLECTION_KEY: &'static str = "albums";

    type Raw = RawAlbum;

    fn adapt(raw: RawAlbum) -> Result<Self, String> {
        let title = required("title", raw.title)?;
        let slug = raw.slug.unwrap_or_else(|| slugify(&title));
        if slug.is_empty() {
            return Err(format!("album '{title}' has no usable slug"));
        }
        Ok(GalleryAlbum {
            id: required("id", raw.id)?,
            slug,
            title,
            cover: raw.cover.or_else(|| raw.images.first().cloned()),
            images: raw.images,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "startDate", deserialize_with = "loose::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub location: Option<String>,
    #[serde(default, alias = "body", deserialize_with = "loose::text")]
    pub description: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "loose::text")]
    pub img: Option<String>,
}

/// Accepts `2024-05-18` and RFC 3339 timestamps.
fn parse_event_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid event date '{raw}'"))
}

impl Adapt for Event {
    const RESOURCE: &'static str = "events";
    const COLLECTION_KEY: &'static str = "events";

    type Raw = RawEvent;

    fn adapt(raw: RawEvent) -> Result<Self, String> {
        let date = raw.date.as_deref().map(parse_event_date).transpose()?;
        Ok(Event {
            id: required("id", raw.id)?,
            slug: required("slug", raw.slug)?,
            title: required("title", raw.title)?,
            date,
            location: raw.location,
            description: raw.description,
            img: raw.img,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RawTeamMember {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub name: Option<String>,
    #[serde(default, alias = "position", alias = "title", deserialize_with = "loose::text")]
    pub role: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "loose::text")]
    pub bio: Option<String>,
    #[serde(default, alias = "image", alias = "photo", deserialize_with = "loose::text")]
    pub img: Option<String>,
}

impl Adapt for TeamMember {
    const RESOURCE: &'static str = "team";
    const COLLECTION_KEY: &'static str = "team";

    type Raw = RawTeamMember;

    fn adapt(raw: RawTeamMember) -> Result<Self, String> {
        let name = required("name", raw.name)?;
        Ok(TeamMember {
            id: required("id", raw.id)?,
            slug: raw.slug.unwrap_or_else(|| slugify(&name)),
            name,
            role: raw.role,
            bio: raw.bio,
            img: raw.img,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RawBuildingOption {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub title: Option<String>,
    #[serde(default, alias = "excerpt", deserialize_with = "loose::text")]
    pub summary: Option<String>,
    #[serde(default, alias = "content", deserialize_with = "loose::text")]
    pub body: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "loose::text")]
    pub img: Option<String>,
}

impl Adapt for BuildingOption {
    const RESOURCE: &'static str = "building-options";
    const COLLECTION_KEY: &'static str = "articles";

    type Raw = RawBuildingOption;

    fn adapt(raw: RawBuildingOption) -> Result<Self, String> {
        Ok(BuildingOption {
            id: required("id", raw.id)?,
            slug: required("slug", raw.slug)?,
            title: required("title", raw.title)?,
            summary: raw.summary,
            body: raw.body,
            img: raw.img,
        })
    }
}
