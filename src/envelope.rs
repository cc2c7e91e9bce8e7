use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ContentError, Result};

/// Wire envelope wrapped around every CMS payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Returns `data`, rejecting `success: false` and missing `data` alike.
    pub fn into_data(self, resource: &str) -> Result<T> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "success flag was false".to_string());
            return Err(ContentError::envelope(resource, message));
        }
        self.data
            .ok_or_else(|| ContentError::envelope(resource, "envelope carried no data"))
    }
}

/// Decodes a CMS envelope and returns its payload.
pub fn open(resource: &str, raw: Value) -> Result<Value> {
    let envelope: Envelope<Value> =
        serde_json::from_value(raw).map_err(|source| ContentError::Decode {
            resource: resource.to_string(),
            source,
        })?;
    match envelope.into_data(resource)? {
        Value::Null => Err(ContentError::envelope(resource, "envelope data was null")),
        data => Ok(data),
    }
}

/// Bundled documents may be bare payloads or envelopes.
pub fn open_if_wrapped(resource: &str, raw: Value) -> Result<Value> {
    let wrapped = raw
        .as_object()
        .is_some_and(|obj| obj.get("success").is_some_and(Value::is_boolean));
    if wrapped {
        open(resource, raw)
    } else {
        Ok(raw)
    }
}

/// Result envelope handed to page code for fallible composite operations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResult<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: message.into(),
        }
    }
}

impl<T> From<Result<T>> for ApiResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failed(err.to_string()),
        }
    }
}
