//! Content service for a home-builder marketing site.
//!
//! CMS and bundled JSON payloads are adapted into a stable domain model
//! ([`models`]), cached per repository, filtered and paged by the
//! [`selection`] engine and exposed through per-feature facades ([`api`]).

pub mod adapters;
pub mod api;
pub mod cache;
pub mod config;
pub mod envelope;
pub mod error;
pub mod image_proxy;
pub mod models;
pub mod repository;
pub mod selection;
pub mod server;
pub mod sources;

pub use api::Api;
pub use config::Config;
pub use envelope::ApiResult;
pub use error::{ContentError, Result};
