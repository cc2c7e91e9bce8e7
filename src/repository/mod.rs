//! Repositories: one content resource, one source, one cache.

use crate::adapters::{adapt_collection, adapt_one, Adapt};
use crate::cache::TtlCache;
use crate::error::Result;
use crate::models::Content;
use crate::sources::ContentSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Collection repository over a [`ContentSource`].
///
/// `get_all` serves from the owned [`TtlCache`] until the TTL elapses and
/// refetches on the next call after that. Lookups by slug or id are linear
/// scans of `get_all`; a miss is `Ok(None)`, never an error.
pub struct Repository<T> {
    source: Arc<dyn ContentSource>,
    resource: &'static str,
    cache: TtlCache<Arc<Vec<T>>>,
}

impl<T> Repository<T>
where
    T: Adapt + Content + Clone + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn ContentSource>, ttl: Duration) -> Self {
        Self {
            source,
            resource: T::RESOURCE,
            cache: TtlCache::new(ttl),
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Fetch and adapt the collection, bypassing the cache.
    pub async fn load(&self) -> Result<Vec<T>> {
        let payload = self.source.fetch(self.resource).await?;
        let items = adapt_collection::<T>(payload)?;
        info!(
            resource = self.resource,
            source = self.source.source_name(),
            count = items.len(),
            "Loaded content collection"
        );
        Ok(items)
    }

    pub async fn get_all(&self) -> Result<Arc<Vec<T>>> {
        if let Some(items) = self.cache.get().await {
            debug!(resource = self.resource, "Cache hit");
            return Ok(items);
        }
        debug!(resource = self.resource, "Cache miss");
        let items = Arc::new(self.load().await?);
        self.cache.put(Arc::clone(&items)).await;
        Ok(items)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<T>> {
        let items = self.get_all().await?;
        Ok(items.iter().find(|item| item.slug() == slug).cloned())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>> {
        let items = self.get_all().await?;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    /// Drop cached data and fetch it again.
    pub async fn refresh(&self) -> Result<Arc<Vec<T>>> {
        self.invalidate().await;
        self.get_all().await
    }
}

/// Repository for single-document resources such as the home page.
pub struct DocumentRepository<T> {
    source: Arc<dyn ContentSource>,
    resource: &'static str,
    cache: TtlCache<Arc<T>>,
}

impl<T> DocumentRepository<T>
where
    T: Adapt + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn ContentSource>, resource: &'static str, ttl: Duration) -> Self {
        Self {
            source,
            resource,
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn load(&self) -> Result<T> {
        let payload = self.source.fetch(self.resource).await?;
        let document = adapt_one::<T>(self.resource, payload)?;
        info!(
            resource = self.resource,
            source = self.source.source_name(),
            "Loaded content document"
        );
        Ok(document)
    }

    pub async fn get(&self) -> Result<Arc<T>> {
        if let Some(document) = self.cache.get().await {
            debug!(resource = self.resource, "Cache hit");
            return Ok(document);
        }
        let document = Arc::new(self.load().await?);
        self.cache.put(Arc::clone(&document)).await;
        Ok(document)
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
