use std::time::Duration;

/// Longest upstream body excerpt carried in an [`ContentError::Http`].
pub const BODY_SNIPPET_LEN: usize = 200;

/// Failures raised while loading and adapting site content.
///
/// Upstream failures (HTTP status, timeout, transport, bad envelope) are
/// never folded into "no data": callers see them as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The CMS answered with a non-2xx status.
    #[error("CMS request to {url} failed with status {status}: {body}")]
    Http { status: u16, url: String, body: String },

    /// The request did not complete within the configured timeout.
    #[error("CMS request to {url} timed out after {}s", .after.as_secs())]
    Timeout { url: String, after: Duration },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The envelope reported `success: false` or carried no `data`.
    #[error("CMS envelope for {resource} rejected: {message}")]
    Envelope { resource: String, message: String },

    #[error("failed to decode {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded but does not have the shape the adapter requires.
    #[error("invalid {resource} payload: {message}")]
    Schema { resource: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid image id: {0}")]
    InvalidImageId(String),
}

impl ContentError {
    pub fn schema(resource: &str, message: impl Into<String>) -> Self {
        Self::Schema {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    pub fn envelope(resource: &str, message: impl Into<String>) -> Self {
        Self::Envelope {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    /// Classifies a reqwest failure, keeping timeouts distinct from other
    /// transport errors.
    pub fn transport(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                after: timeout,
            }
        } else {
            Self::Network(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Cuts an upstream body down to [`BODY_SNIPPET_LEN`] characters.
pub fn body_snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
