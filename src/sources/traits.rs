use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Common trait for everything that can serve raw site content.
/// Repositories only see this seam, so a feature can move from bundled
/// JSON to the live CMS without touching its adapter.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the unwrapped payload of a named resource (`communities`, `home`, ...)
    async fn fetch(&self, resource: &str) -> Result<Value>;

    /// Get the name of the content source
    fn source_name(&self) -> &'static str;
}
