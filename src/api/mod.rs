//! Per-feature facades: the only surface page rendering talks to.
//!
//! Every call is async whether the feature is backed by bundled JSON or the
//! live CMS. Repository errors propagate unchanged; the only swallowed
//! failures are the documented fallbacks in [`pages`].

pub mod communities;
pub mod content;
pub mod pages;
pub mod properties;

pub use communities::CommunityApi;
pub use content::{BuildingOptionApi, EventApi, GalleryApi, ServiceApi, TeamApi};
pub use pages::{PageApi, DEFAULT_COVER_IMAGE};
pub use properties::PropertyApi;

use crate::repository::Repository;
use crate::sources::ContentSource;
use std::sync::Arc;
use std::time::Duration;

/// All feature facades over one CMS source and one bundled source.
pub struct Api {
    pub properties: PropertyApi,
    pub communities: CommunityApi,
    pub services: ServiceApi,
    pub gallery: GalleryApi,
    pub events: EventApi,
    pub team: TeamApi,
    pub building_options: BuildingOptionApi,
    pub pages: PageApi,
}

impl Api {
    /// Properties are read from `bundled`; everything else from `cms`.
    pub fn new(
        cms: Arc<dyn ContentSource>,
        bundled: Arc<dyn ContentSource>,
        ttl: Duration,
    ) -> Self {
        let properties = Arc::new(Repository::new(bundled, ttl));
        Self {
            properties: PropertyApi::new(Arc::clone(&properties)),
            communities: CommunityApi::new(Repository::new(Arc::clone(&cms), ttl), properties),
            services: ServiceApi::new(Repository::new(Arc::clone(&cms), ttl)),
            gallery: GalleryApi::new(Repository::new(Arc::clone(&cms), ttl)),
            events: EventApi::new(Repository::new(Arc::clone(&cms), ttl)),
            team: TeamApi::new(Repository::new(Arc::clone(&cms), ttl)),
            building_options: BuildingOptionApi::new(Repository::new(Arc::clone(&cms), ttl)),
            pages: PageApi::new(cms, ttl),
        }
    }

    /// Drop every cached payload; the next call per feature refetches.
    pub async fn invalidate_all(&self) {
        self.properties.invalidate().await;
        self.communities.invalidate().await;
        self.services.invalidate().await;
        self.gallery.invalidate().await;
        self.events.invalidate().await;
        self.team.invalidate().await;
        self.building_options.invalidate().await;
        self.pages.invalidate().await;
    }
}
