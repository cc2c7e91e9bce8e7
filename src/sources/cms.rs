use crate::envelope;
use crate::error::{body_snippet, ContentError, Result};
use crate::sources::traits::ContentSource;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("homesite-content/", env!("CARGO_PKG_VERSION"));

/// Live headless-CMS source: `GET {base_url}/api/{resource}`
pub struct CmsSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl CmsSource {
    /// Create a CMS source whose requests abort after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ContentError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource.trim_start_matches('/'))
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ContentError {
        ContentError::transport(url, self.timeout, err)
    }
}

#[async_trait]
impl ContentSource for CmsSource {
    async fn fetch(&self, resource: &str) -> Result<Value> {
        let url = self.url_for(resource);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(resource, status = status.as_u16(), "CMS returned error status");
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Http {
                status: status.as_u16(),
                url,
                body: body_snippet(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;
        debug!(resource, bytes = bytes.len(), "Downloaded CMS payload");

        let raw: Value = serde_json::from_slice(&bytes).map_err(|source| ContentError::Decode {
            resource: resource.to_string(),
            source,
        })?;
        envelope::open(resource, raw)
    }

    fn source_name(&self) -> &'static str {
        "cms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_cleanly() {
        let cms = CmsSource::new("https://cms.example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(cms.url_for("communities"), "https://cms.example.com/api/communities");
        assert_eq!(cms.url_for("/about-us"), "https://cms.example.com/api/about-us");
    }
}
