use super::error::{found, ApiError};
use super::AppState;
use crate::envelope::ApiResult;
use crate::image_proxy::ImageProxy;
use crate::models::{
    BuildingOption, Community, Event, GalleryAlbum, PageContent, PageKind, Property, Service,
    TeamMember,
};
use crate::selection::{ListingParams, ListingQuery, Page};
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

type JsonResult<T> = Result<Json<T>, ApiError>;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "up", "version": env!("CARGO_PKG_VERSION") }))
}

pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> JsonResult<Page<Property>> {
    let query = ListingQuery::from(&params);
    Ok(Json(state.api.properties.list(&query).await?))
}

pub async fn property(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> JsonResult<Property> {
    let property = state.api.properties.by_slug(&slug).await?;
    Ok(Json(found(property, "property", &slug)?))
}

pub async fn communities(State(state): State<AppState>) -> JsonResult<Vec<Community>> {
    Ok(Json(state.api.communities.all().await?.as_ref().clone()))
}

pub async fn community(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> JsonResult<Community> {
    let community = state.api.communities.by_slug(&slug).await?;
    Ok(Json(found(community, "community", &slug)?))
}

pub async fn floor_plans(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ListingParams>,
) -> JsonResult<Page<Property>> {
    let query = ListingQuery::from(&params);
    let page = state.api.communities.floor_plans(&slug, &query).await?;
    Ok(Json(found(page, "community", &slug)?))
}

pub async fn services(State(state): State<AppState>) -> JsonResult<Vec<Service>> {
    Ok(Json(state.api.services.all().await?.as_ref().clone()))
}

pub async fn service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> JsonResult<Service> {
    let service = state.api.services.by_slug(&slug).await?;
    Ok(Json(found(service, "service", &slug)?))
}

pub async fn gallery(State(state): State<AppState>) -> JsonResult<Vec<GalleryAlbum>> {
    Ok(Json(state.api.gallery.albums().await?.as_ref().clone()))
}

pub async fn album(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> JsonResult<GalleryAlbum> {
    let album = state.api.gallery.album(&slug).await?;
    Ok(Json(found(album, "album", &slug)?))
}

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub upcoming: Option<String>,
}

impl EventsQuery {
    fn upcoming(&self) -> Result<bool, ApiError> {
        match self.upcoming.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("" | "false" | "0" | "no") => Ok(false),
            Some("true" | "1" | "yes") => Ok(true),
            Some(other) => Err(ApiError::BadRequest(format!(
                "upcoming must be true or false, got '{other}'"
            ))),
        }
    }
}

pub async fn events(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> JsonResult<Vec<Event>> {
    let events = if params.upcoming()? {
        state.api.events.upcoming(Local::now().date_naive()).await?
    } else {
        state.api.events.all().await?
    };
    Ok(Json(events))
}

pub async fn event(State(state): State<AppState>, Path(slug): Path<String>) -> JsonResult<Event> {
    let event = state.api.events.by_slug(&slug).await?;
    Ok(Json(found(event, "event", &slug)?))
}

pub async fn team(State(state): State<AppState>) -> JsonResult<Vec<TeamMember>> {
    Ok(Json(state.api.team.members().await?.as_ref().clone()))
}

pub async fn building_options(State(state): State<AppState>) -> JsonResult<Vec<BuildingOption>> {
    Ok(Json(state.api.building_options.index().await?.as_ref().clone()))
}

pub async fn building_option(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> JsonResult<BuildingOption> {
    let article = state.api.building_options.article(&slug).await?;
    Ok(Json(found(article, "building option", &slug)?))
}

pub async fn page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<ApiResult<PageContent>>), ApiError> {
    let kind: PageKind = name
        .parse()
        .map_err(|_| ApiError::NotFound(format!("page '{name}'")))?;
    let result = state.api.pages.page_with_cover(kind).await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((status, Json(result)))
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub id: Option<String>,
}

pub async fn image_proxy(
    State(state): State<AppState>,
    Query(params): Query<ImageQuery>,
) -> Result<Response, ApiError> {
    let id = params
        .id
        .ok_or_else(|| ApiError::BadRequest("missing image id".to_string()))?;
    let id = ImageProxy::validate_id(&id)?;

    let proxied = state.images.fetch(id).await;
    let status = StatusCode::from_u16(proxied.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = Body::from_stream(proxied.body);
    let mut response = (status, [(CONTENT_TYPE, proxied.content_type)], body).into_response();
    if let Some(cache_control) = proxied.cache_control {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(cache_control));
    }
    Ok(response)
}
