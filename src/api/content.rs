use crate::error::Result;
use crate::models::{BuildingOption, Event, GalleryAlbum, Service, TeamMember};
use crate::repository::Repository;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

pub struct ServiceApi {
    repo: Repository<Service>,
}

impl ServiceApi {
    pub fn new(repo: Repository<Service>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Arc<Vec<Service>>> {
        self.repo.get_all().await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Service>> {
        self.repo.get_by_slug(slug).await
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}

pub struct GalleryApi {
    repo: Repository<GalleryAlbum>,
}

impl GalleryApi {
    pub fn new(repo: Repository<GalleryAlbum>) -> Self {
        Self { repo }
    }

    pub async fn albums(&self) -> Result<Arc<Vec<GalleryAlbum>>> {
        self.repo.get_all().await
    }

    pub async fn album(&self, slug: &str) -> Result<Option<GalleryAlbum>> {
        self.repo.get_by_slug(slug).await
    }

    /// Every image across albums, in album order, first occurrence kept.
    pub async fn all_images(&self) -> Result<Vec<String>> {
        let albums = self.repo.get_all().await?;
        let mut seen = HashSet::new();
        Ok(albums
            .iter()
            .flat_map(|album| album.images.iter())
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect())
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}

pub struct EventApi {
    repo: Repository<Event>,
}

impl EventApi {
    pub fn new(repo: Repository<Event>) -> Self {
        Self { repo }
    }

    /// Events by date, undated ones last.
    pub async fn all(&self) -> Result<Vec<Event>> {
        let mut events = self.repo.get_all().await?.as_ref().clone();
        events.sort_by_key(|e| (e.date.is_none(), e.date));
        Ok(events)
    }

    /// Dated events on or after `today`.
    pub async fn upcoming(&self, today: NaiveDate) -> Result<Vec<Event>> {
        let events = self.all().await?;
        Ok(events
            .into_iter()
            .filter(|e| e.date.is_some_and(|d| d >= today))
            .collect())
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Event>> {
        self.repo.get_by_slug(slug).await
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}

pub struct TeamApi {
    repo: Repository<TeamMember>,
}

impl TeamApi {
    pub fn new(repo: Repository<TeamMember>) -> Self {
        Self { repo }
    }

    pub async fn members(&self) -> Result<Arc<Vec<TeamMember>>> {
        self.repo.get_all().await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<TeamMember>> {
        self.repo.get_by_slug(slug).await
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}

pub struct BuildingOptionApi {
    repo: Repository<BuildingOption>,
}

impl BuildingOptionApi {
    pub fn new(repo: Repository<BuildingOption>) -> Self {
        Self { repo }
    }

    pub async fn index(&self) -> Result<Arc<Vec<BuildingOption>>> {
        self.repo.get_all().await
    }

    /// Loads (or reuses) the index, then looks the article up in it.
    pub async fn article(&self, slug: &str) -> Result<Option<BuildingOption>> {
        let index = self.index().await?;
        Ok(index.iter().find(|a| a.slug == slug).cloned())
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}
