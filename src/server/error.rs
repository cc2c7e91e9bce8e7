use crate::envelope::ApiResult;
use crate::error::ContentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// Handler failure rendered as a `{data, success, message}` body
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Content(ContentError),
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self::Content(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Content(ContentError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            Self::Content(ContentError::InvalidImageId(_)) => StatusCode::BAD_REQUEST,
            Self::Content(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(message) => message,
            Self::Content(err) if status.is_server_error() => {
                error!(error = %err, "Content request failed");
                err.to_string()
            }
            Self::Content(err) => {
                warn!(error = %err, "Rejected content request");
                err.to_string()
            }
        };
        (status, Json(ApiResult::<()>::failed(message))).into_response()
    }
}

/// Turns a lookup miss into a 404.
pub fn found<T>(item: Option<T>, what: &str, slug: &str) -> Result<T, ApiError> {
    item.ok_or_else(|| ApiError::NotFound(format!("{what} '{slug}'")))
}
