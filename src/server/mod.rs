//! HTTP surface: JSON content endpoints and the image passthrough.

pub mod error;
pub mod routes;

use crate::api::Api;
use crate::image_proxy::ImageProxy;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<Api>,
    pub images: Arc<ImageProxy>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/properties", get(routes::list_properties))
        .route("/api/properties/:slug", get(routes::property))
        .route("/api/communities", get(routes::communities))
        .route("/api/communities/:slug", get(routes::community))
        .route("/api/communities/:slug/floor-plans", get(routes::floor_plans))
        .route("/api/services", get(routes::services))
        .route("/api/services/:slug", get(routes::service))
        .route("/api/gallery", get(routes::gallery))
        .route("/api/gallery/:slug", get(routes::album))
        .route("/api/events", get(routes::events))
        .route("/api/events/:slug", get(routes::event))
        .route("/api/team", get(routes::team))
        .route("/api/building-options", get(routes::building_options))
        .route("/api/building-options/:slug", get(routes::building_option))
        .route("/api/pages/:name", get(routes::page))
        .route("/api/image-proxy", get(routes::image_proxy))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
