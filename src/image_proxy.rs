//! Passthrough for externally hosted images (Google Drive file ids).
//!
//! Two upstream candidates are tried in order, thumbnail first and full
//! download second. The first one answering 2xx with a non-HTML body is
//! streamed back chunk by chunk with long-lived cache headers; rejected
//! candidates are dropped without reading their bodies.

use crate::error::{ContentError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const CACHE_CONTROL: &str =
    "public, max-age=86400, s-maxage=86400, stale-while-revalidate=604800";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
const MIN_ID_LEN: usize = 10;
const MAX_ID_LEN: usize = 200;

/// Body chunks as they arrive from upstream
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

fn single_chunk(body: Bytes) -> ByteStream {
    stream::iter([Ok(body)]).boxed()
}

/// Upstream answer for one candidate URL; the body has not been read yet
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: ByteStream,
}

impl UpstreamResponse {
    /// Response whose body is already in memory.
    pub fn buffered(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: single_chunk(body.into()),
        }
    }

    /// Drive answers quota and permission problems with a 200 HTML page.
    fn is_image(&self) -> bool {
        let html = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("text/html"));
        (200..300).contains(&self.status) && !html
    }
}

/// Transport used to reach image candidates
#[async_trait]
pub trait ImageUpstream: Send + Sync {
    async fn get(&self, url: &str) -> Result<UpstreamResponse>;
}

pub struct HttpImageUpstream {
    client: Client,
    timeout: Duration,
}

impl HttpImageUpstream {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContentError::Network)?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl ImageUpstream for HttpImageUpstream {
    async fn get(&self, url: &str) -> Result<UpstreamResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ContentError::transport(url, self.timeout, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let (url, timeout) = (url.to_string(), self.timeout);
        let body = response
            .bytes_stream()
            .map_err(move |e| ContentError::transport(&url, timeout, e))
            .boxed();

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

/// What the proxy endpoint sends back
pub struct ProxyResponse {
    pub status: u16,
    pub content_type: String,
    pub cache_control: Option<&'static str>,
    pub body: ByteStream,
}

impl ProxyResponse {
    fn text(status: u16, message: String) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8".to_string(),
            cache_control: None,
            body: single_chunk(Bytes::from(message)),
        }
    }
}

pub struct ImageProxy {
    upstream: Arc<dyn ImageUpstream>,
}

impl ImageProxy {
    pub fn new(upstream: Arc<dyn ImageUpstream>) -> Self {
        Self { upstream }
    }

    /// Thumbnail first, then the full download.
    pub fn candidates(id: &str) -> [String; 2] {
        [
            format!("https://drive.google.com/thumbnail?id={id}&sz=w2000"),
            format!("https://drive.google.com/uc?export=download&id={id}"),
        ]
    }

    /// Ids are interpolated into upstream URLs, so only the Drive alphabet passes.
    pub fn validate_id(id: &str) -> Result<&str> {
        let id = id.trim();
        let well_formed = (MIN_ID_LEN..=MAX_ID_LEN).contains(&id.len())
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if well_formed {
            Ok(id)
        } else {
            Err(ContentError::InvalidImageId(id.to_string()))
        }
    }

    pub async fn fetch(&self, id: &str) -> ProxyResponse {
        let id = match Self::validate_id(id) {
            Ok(id) => id,
            Err(err) => return ProxyResponse::text(400, err.to_string()),
        };

        let mut last_error = String::from("no candidate tried");
        for url in Self::candidates(id) {
            debug!(%url, "Trying image candidate");
            match self.upstream.get(&url).await {
                Ok(response) if response.is_image() => {
                    info!(%url, content_type = ?response.content_type, "Streaming proxied image");
                    return ProxyResponse {
                        status: 200,
                        content_type: response
                            .content_type
                            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
                        cache_control: Some(CACHE_CONTROL),
                        body: response.body,
                    };
                }
                Ok(response) => {
                    last_error = format!(
                        "{url} answered {} with content type {}",
                        response.status,
                        response.content_type.as_deref().unwrap_or("unknown")
                    );
                }
                Err(err) => last_error = err.to_string(),
            }
            warn!(%url, error = %last_error, "Image candidate rejected");
        }

        ProxyResponse::text(404, last_error)
    }
}
