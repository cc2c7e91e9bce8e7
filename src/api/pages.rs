use crate::envelope::ApiResult;
use crate::error::Result;
use crate::models::{PageContent, PageKind};
use crate::repository::DocumentRepository;
use crate::sources::ContentSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Cover shown when the CMS page has none.
pub const DEFAULT_COVER_IMAGE: &str = "/images/default-cover.jpg";

/// Single-document pages: home, about us, privacy policy
pub struct PageApi {
    home: DocumentRepository<PageContent>,
    about_us: DocumentRepository<PageContent>,
    privacy_policy: DocumentRepository<PageContent>,
}

impl PageApi {
    pub fn new(source: Arc<dyn ContentSource>, ttl: Duration) -> Self {
        let repo =
            |kind: PageKind| DocumentRepository::new(Arc::clone(&source), kind.resource(), ttl);
        Self {
            home: repo(PageKind::Home),
            about_us: repo(PageKind::AboutUs),
            privacy_policy: repo(PageKind::PrivacyPolicy),
        }
    }

    fn repo(&self, kind: PageKind) -> &DocumentRepository<PageContent> {
        match kind {
            PageKind::Home => &self.home,
            PageKind::AboutUs => &self.about_us,
            PageKind::PrivacyPolicy => &self.privacy_policy,
        }
    }

    pub async fn page(&self, kind: PageKind) -> Result<Arc<PageContent>> {
        self.repo(kind).get().await
    }

    /// Page data with its cover image resolved, as a result envelope.
    ///
    /// Failures become `success: false` with the error message; a missing
    /// cover becomes [`DEFAULT_COVER_IMAGE`].
    pub async fn page_with_cover(&self, kind: PageKind) -> ApiResult<PageContent> {
        match self.page(kind).await {
            Ok(page) => {
                let mut page = page.as_ref().clone();
                page.cover_image
                    .get_or_insert_with(|| DEFAULT_COVER_IMAGE.to_string());
                ApiResult::ok(page)
            }
            Err(err) => {
                warn!(page = kind.resource(), error = %err, "Page content unavailable");
                ApiResult::failed(err.to_string())
            }
        }
    }

    pub async fn invalidate(&self) {
        for kind in [PageKind::Home, PageKind::AboutUs, PageKind::PrivacyPolicy] {
            self.repo(kind).invalidate().await;
        }
    }
}
