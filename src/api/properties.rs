use crate::error::Result;
use crate::models::Property;
use crate::repository::Repository;
use crate::selection::{select, ListingQuery, Page};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Property listings and detail pages
pub struct PropertyApi {
    repo: Arc<Repository<Property>>,
}

impl PropertyApi {
    pub fn new(repo: Arc<Repository<Property>>) -> Self {
        Self { repo }
    }

    pub async fn all(&self) -> Result<Arc<Vec<Property>>> {
        self.repo.get_all().await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Property>> {
        self.repo.get_by_slug(slug).await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Property>> {
        self.repo.get_by_id(id).await
    }

    /// One page of the filtered, sorted listing with totals.
    pub async fn list(&self, query: &ListingQuery) -> Result<Page<Property>> {
        let items = self.repo.get_all().await?;
        Ok(select(&items, query))
    }

    /// Distinct community names, for the listing filter dropdown.
    pub async fn communities(&self) -> Result<Vec<String>> {
        let items = self.repo.get_all().await?;
        let names: BTreeSet<&str> = items.iter().map(|p| p.community.as_str()).collect();
        Ok(names.into_iter().map(str::to_string).collect())
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}
