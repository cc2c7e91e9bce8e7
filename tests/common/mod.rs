#![allow(dead_code)]

use async_trait::async_trait;
use homesite_content::models::{Property, PropertyStatus};
use homesite_content::sources::{BundledSource, ContentSource};
use homesite_content::{Api, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn properties_doc() -> Value {
    json!([
        {"id": 1, "slug": "aspen", "title": "Aspen", "community": "Oak Ridge",
         "status": "available",
         "price": "389900", "beds": "4", "baths": "2.5", "garages": "2", "sqft": "2150"},
        {"id": 2, "slug": "birch", "title": "Birch", "community": "Oak Ridge", "status": "sold",
         "price": "349900", "beds": "3", "baths": "2", "garages": "2", "sqft": "1780"},
        {"id": 3, "slug": "cedar", "title": "Cedar", "community": "Willow Creek",
         "status": "comingSoon",
         "price": "", "beds": "5", "baths": "3", "garages": "3", "sqft": "2860"},
        {"id": 4, "slug": "dogwood", "title": "Dogwood", "community": "Willow Creek",
         "status": "Now selling",
         "price": "429,900", "beds": "TBD", "baths": "3", "garages": "2", "sqft": "2410"},
        {"id": 5, "slug": "elm", "title": "Elm", "community": "Maple Hollow", "status": "available",
         "price": "299900", "beds": "3", "baths": "2", "sqft": "1520"}
    ])
}

pub fn cms_docs() -> Vec<(&'static str, Value)> {
    vec![
        (
            "communities",
            json!({"success": true, "data": {"communities": [
                {"id": 10, "slug": "oak-ridge", "name": "Oak Ridge", "city": "Boise",
                 "image": "/img/oak.jpg",
                 "floor-plans": [
                    {"id": 90, "slug": "fir", "title": "Fir", "price": "459000",
                     "beds": 4, "sqft": 2600}
                 ]},
                {"id": 11, "slug": "willow-creek", "name": "Willow Creek Estates",
                 "city": "Meridian"},
                {"id": 12, "slug": "cottonwood", "name": "Cottonwood", "city": "Boise"}
            ]}}),
        ),
        (
            "services",
            json!({"success": true, "data": [
                {"id": 1, "slug": "design-studio", "title": "Design Studio", "items": ["Cabinets"]}
            ]}),
        ),
        (
            "gallery",
            json!({"success": true, "data": {"albums": [
                {"id": 1, "slug": "exteriors", "title": "Exteriors",
                 "images": ["/g/1.jpg", "/g/2.jpg"]},
                {"id": 2, "slug": "kitchens", "title": "Kitchens",
                 "images": ["/g/2.jpg", "/g/3.jpg"]}
            ]}}),
        ),
        (
            "events",
            json!({"success": true, "data": [
                {"id": 1, "slug": "grand-opening", "title": "Grand Opening", "date": "2030-06-01"},
                {"id": 2, "slug": "tba", "title": "Fall Parade"},
                {"id": 3, "slug": "open-house", "title": "Open House", "date": "2020-05-18"}
            ]}),
        ),
        (
            "team",
            json!({"success": true, "data": [
                {"id": 1, "name": "Dana Whitfield", "role": "Sales"}
            ]}),
        ),
        (
            "building-options",
            json!({"success": true, "data": {"articles": [
                {"id": 1, "slug": "solar-ready", "title": "Solar Ready", "excerpt": "Panels"},
                {"id": 2, "slug": "smart-home", "title": "Smart Home"}
            ]}}),
        ),
        (
            "home",
            json!({"success": true, "data": {"title": "Welcome Home", "content": "Built right."}}),
        ),
        (
            "about-us",
            json!({"success": true, "data": {"title": "About Us", "coverImage": "/img/team.jpg",
                   "sections": [{"title": "Story", "content": "Since 1984."}]}}),
        ),
        ("privacy-policy", json!({"success": false, "message": "page unpublished"})),
    ]
}

pub fn api() -> Api {
    api_with(cms_docs())
}

pub fn api_with(docs: Vec<(&'static str, Value)>) -> Api {
    api_from(docs, properties_doc())
}

pub fn api_from(docs: Vec<(&'static str, Value)>, properties: Value) -> Api {
    let cms = BundledSource::from_documents(docs);
    let bundled = BundledSource::from_documents([("properties", properties)]);
    Api::new(Arc::new(cms), Arc::new(bundled), Duration::from_secs(60))
}

/// Wraps a source and counts fetches per resource.
pub struct CountingSource {
    inner: BundledSource,
    calls: Mutex<HashMap<String, usize>>,
}

impl CountingSource {
    pub fn new(inner: BundledSource) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: Mutex::new(HashMap::new()),
        })
    }

    pub fn calls(&self, resource: &str) -> usize {
        self.calls.lock().unwrap().get(resource).copied().unwrap_or(0)
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn fetch(&self, resource: &str) -> Result<Value> {
        *self.calls.lock().unwrap().entry(resource.to_string()).or_default() += 1;
        self.inner.fetch(resource).await
    }

    fn source_name(&self) -> &'static str {
        "counting"
    }
}

/// Same documents as [`api`], with both sources counting their fetches.
pub fn counted_api() -> (Api, Arc<CountingSource>, Arc<CountingSource>) {
    let cms = CountingSource::new(BundledSource::from_documents(cms_docs()));
    let bundled =
        CountingSource::new(BundledSource::from_documents([("properties", properties_doc())]));
    let api = Api::new(cms.clone(), bundled.clone(), Duration::from_secs(60));
    (api, cms, bundled)
}

pub fn property(id: u32, price: Option<u64>, beds: Option<f64>, sqft: Option<f64>) -> Property {
    Property {
        id: id.to_string(),
        slug: format!("plan-{id}"),
        title: format!("Plan {id}"),
        community: if id % 2 == 0 { "Oak Ridge" } else { "Willow Creek" }.to_string(),
        status: if id % 3 == 0 {
            PropertyStatus::Sold
        } else {
            PropertyStatus::Available
        },
        price,
        beds,
        baths: beds.map(|b| b - 1.0),
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
