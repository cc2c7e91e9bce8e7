use anyhow::Context;
use homesite_content::image_proxy::{HttpImageUpstream, ImageProxy};
use homesite_content::server::{self, AppState};
use homesite_content::sources::{BundledSource, CmsSource};
use homesite_content::{Api, Config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("🏠 Homesite Content");
    info!(
        cms = %config.cms_base_url,
        data_dir = %config.static_data_dir.display(),
        "Loading content sources"
    );

    let cms = CmsSource::new(&config.cms_base_url, config.cms_timeout)
        .context("Failed to create CMS client")?;
    let bundled = BundledSource::from_dir(&config.static_data_dir);
    let api = Api::new(Arc::new(cms), Arc::new(bundled), config.cache_ttl);

    let upstream =
        HttpImageUpstream::new(config.cms_timeout).context("Failed to create image client")?;
    let state = AppState {
        api: Arc::new(api),
        images: Arc::new(ImageProxy::new(Arc::new(upstream))),
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, server::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
