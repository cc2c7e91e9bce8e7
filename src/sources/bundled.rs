use crate::envelope;
use crate::error::{ContentError, Result};
use crate::sources::traits::ContentSource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use tracing::debug;

enum Origin {
    Dir(PathBuf),
    Documents(HashMap<String, Value>),
}

/// Static JSON shipped with the site for features not yet served by the CMS.
///
/// Documents may be bare payloads or full `{success, data}` envelopes.
pub struct BundledSource {
    origin: Origin,
}

impl BundledSource {
    /// Serve `{dir}/{resource}.json`
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::Dir(dir.into()),
        }
    }

    /// Serve documents held in memory, keyed by resource name
    pub fn from_documents<I, K>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            origin: Origin::Documents(
                documents.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ),
        }
    }
}

#[async_trait]
impl ContentSource for BundledSource {
    async fn fetch(&self, resource: &str) -> Result<Value> {
        let raw = match &self.origin {
            Origin::Dir(dir) => {
                let path = dir.join(format!("{resource}.json"));
                debug!(path = %path.display(), "Reading bundled document");
                let bytes = tokio::fs::read(&path).await.map_err(|source| ContentError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                serde_json::from_slice(&bytes).map_err(|source| ContentError::Decode {
                    resource: resource.to_string(),
                    source,
                })?
            }
            Origin::Documents(docs) => docs.get(resource).cloned().ok_or_else(|| ContentError::Io {
                path: resource.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no bundled document"),
            })?,
        };
        envelope::open_if_wrapped(resource, raw)
    }

    fn source_name(&self) -> &'static str {
        "bundled"
    }
}
