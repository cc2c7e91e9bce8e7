use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const MAX_CACHE_TTL_SECS: u64 = 86_400;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cms_base_url: String,
    pub cms_timeout: Duration,
    pub cache_ttl: Duration,
    pub static_data_dir: PathBuf,
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cms_base_url = lookup("CMS_BASE_URL").context("CMS_BASE_URL must be set")?;
        if !(cms_base_url.starts_with("http://") || cms_base_url.starts_with("https://")) {
            bail!("CMS_BASE_URL must be an http(s) URL, got '{cms_base_url}'");
        }

        let timeout_secs: u64 = lookup("CMS_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("CMS_TIMEOUT_SECS must be a valid number")?;
        if !(1..=60).contains(&timeout_secs) {
            bail!("CMS_TIMEOUT_SECS must be between 1 and 60, got {timeout_secs}");
        }

        let cache_ttl_secs: u64 = lookup("CACHE_TTL_SECS")
            .unwrap_or_else(|| DEFAULT_CACHE_TTL_SECS.to_string())
            .parse()
            .context("CACHE_TTL_SECS must be a valid number")?;
        if cache_ttl_secs > MAX_CACHE_TTL_SECS {
            bail!("CACHE_TTL_SECS must be at most {MAX_CACHE_TTL_SECS}, got {cache_ttl_secs}");
        }

        Ok(Self {
            cms_base_url,
            cms_timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            static_data_dir: lookup("STATIC_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            bind_addr: lookup("BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .context("BIND_ADDR must be an IP address")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
