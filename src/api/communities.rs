use crate::error::Result;
use crate::models::{Community, Property};
use crate::repository::Repository;
use crate::selection::{select, ListingQuery, Page};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Communities and their floor plans
pub struct CommunityApi {
    repo: Repository<Community>,
    properties: Arc<Repository<Property>>,
}

impl CommunityApi {
    pub fn new(repo: Repository<Community>, properties: Arc<Repository<Property>>) -> Self {
        Self { repo, properties }
    }

    pub async fn all(&self) -> Result<Arc<Vec<Community>>> {
        self.repo.get_all().await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Community>> {
        self.repo.get_by_slug(slug).await
    }

    /// Floor plans of one community as a listing page.
    ///
    /// Plans come from the global property set, scoped by loose community
    /// name match, plus any plans embedded in the community record that the
    /// global set does not already carry. `None` when the community is unknown.
    pub async fn floor_plans(
        &self,
        slug: &str,
        query: &ListingQuery,
    ) -> Result<Option<Page<Property>>> {
        let (community, properties) =
            tokio::try_join!(self.repo.get_by_slug(slug), self.properties.get_all())?;
        let Some(community) = community else {
            return Ok(None);
        };

        let mut plans: Vec<Property> = properties
            .iter()
            .filter(|p| community.owns(p))
            .cloned()
            .collect();
        for embedded in &community.floor_plans {
            if !plans.iter().any(|p| p.slug == embedded.slug) {
                plans.push(embedded.clone());
            }
        }
        debug!(community = %community.slug, plans = plans.len(), "Scoped floor plans");

        Ok(Some(select(&plans, query)))
    }

    /// Distinct cities with at least one community.
    pub async fn cities(&self) -> Result<Vec<String>> {
        let items = self.repo.get_all().await?;
        let cities: BTreeSet<&str> = items.iter().filter_map(|c| c.city.as_deref()).collect();
        Ok(cities.into_iter().map(str::to_string).collect())
    }

    pub async fn invalidate(&self) {
        self.repo.invalidate().await;
    }
}
