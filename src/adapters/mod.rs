//! Adapters from raw CMS/JSON payloads to the domain model.
//!
//! Each content type names its wire struct and a validation step. Payloads
//! are parsed and validated once here; a shape mismatch fails the whole
//! load with [`ContentError::Schema`] instead of leaking partial data.

pub mod community;
pub mod content;
pub mod loose;
pub mod page;
pub mod property;

use crate::error::{ContentError, Result};
use crate::models::Content;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;

/// A domain type that can be built from one raw CMS record.
pub trait Adapt: Sized {
    /// Resource name used for both CMS paths and bundled file names.
    const RESOURCE: &'static str;
    /// Key under which an object payload holds the collection.
    const COLLECTION_KEY: &'static str;

    type Raw: DeserializeOwned;

    fn adapt(raw: Self::Raw) -> std::result::Result<Self, String>;
}

/// Locates the record array inside a collection payload.
fn records(resource: &str, key: &str, payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => {
            let found = [key, "items"]
                .into_iter()
                .find_map(|k| match obj.remove(k) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                });
            found.ok_or_else(|| {
                let message = format!("expected an array under '{key}' or 'items'");
                ContentError::schema(resource, message)
            })
        }
        other => Err(ContentError::schema(
            resource,
            format!("expected a collection, got {}", kind_of(&other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Adapts a single record, tagging failures with the resource name.
pub fn adapt_one<T: Adapt>(resource: &str, record: Value) -> Result<T> {
    let raw: T::Raw =
        serde_json::from_value(record).map_err(|e| ContentError::schema(resource, e.to_string()))?;
    T::adapt(raw).map_err(|message| ContentError::schema(resource, message))
}

/// Adapts a collection payload and enforces slug uniqueness.
pub fn adapt_collection<T: Adapt + Content>(payload: Value) -> Result<Vec<T>> {
    let resource = T::RESOURCE;
    let records = records(resource, T::COLLECTION_KEY, payload)?;

    let mut items = Vec::with_capacity(records.len());
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let item: T = adapt_one(resource, record).map_err(|err| match err {
            ContentError::Schema { message, .. } => {
                ContentError::schema(resource, format!("record {index}: {message}"))
            }
            other => other,
        })?;
        if !seen.insert(item.slug().to_string()) {
            return Err(ContentError::schema(
                resource,
                format!("duplicate slug '{}'", item.slug()),
            ));
        }
        items.push(item);
    }
    Ok(items)
}

pub(crate) fn required(field: &str, value: Option<String>) -> std::result::Result<String, String> {
    value.ok_or_else(|| format!("missing required field '{field}'"))
}

/// `"The Aspen II"` -> `"the-aspen-ii"`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;
    use serde_json::json;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("The Aspen II"), "the-aspen-ii");
        assert_eq!(slugify("  Maria  O'Neil -- Sales "), "maria-o-neil-sales");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn collections_accept_arrays_and_keyed_objects() {
        let record = json!({"id": 1, "slug": "design", "title": "Design"});
        let bare: Vec<Service> = adapt_collection(json!([record.clone()])).unwrap();
        let keyed: Vec<Service> = adapt_collection(json!({"services": [record.clone()]})).unwrap();
        let items: Vec<Service> = adapt_collection(json!({"items": [record]})).unwrap();
        assert_eq!(bare, keyed);
        assert_eq!(keyed, items);
    }

    #[test]
    fn scalar_payload_is_a_schema_error() {
        let err = adapt_collection::<Service>(json!("nope")).unwrap_err();
        assert!(err.to_string().contains("expected a collection, got a string"));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = adapt_collection::<Service>(json!([
            {"id": 1, "slug": "design", "title": "Design"},
            {"id": 2, "slug": "design", "title": "Design again"}
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate slug 'design'"));
    }

    #[test]
    fn failing_record_is_identified_by_index() {
        let err = adapt_collection::<Service>(json!([
            {"id": 1, "slug": "design", "title": "Design"},
            {"id": 2, "slug": "build"}
        ]))
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("record 1"), "{message}");
        assert!(message.contains("title"), "{message}");
    }
}
