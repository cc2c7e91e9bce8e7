//! Field deserializers for CMS payloads whose scalar types drift between
//! releases (numbers sent as strings, ids as integers, images as objects).

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Keys searched when an image list holds objects instead of URLs.
const IMAGE_KEYS: [&str; 4] = ["url", "src", "image", "img"];

/// Parses `1850`, `"1,850"`, `" $450,000 "`. Anything else is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Number or numeric string; missing, empty and non-numeric values are `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_of))
}

/// String or integer identifier.
pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(trimmed(&s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Optional text; blank strings become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(trimmed(&s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, got {other}"))),
    }
}

/// List of URLs or labels: a single string, an array of strings, or an
/// array of `{url|src|image|img}` objects.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(s)) => return Ok(trimmed(&s).into_iter().collect()),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(D::Error::custom(format!("expected a list, got {other}"))),
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let entry = match &item {
            Value::String(s) => trimmed(s),
            Value::Object(obj) => {
                let url = IMAGE_KEYS
                    .iter()
                    .find_map(|key| obj.get(*key).and_then(Value::as_str));
                match url {
                    Some(url) => trimmed(url),
                    None => return Err(D::Error::custom(format!("list entry has no url: {item}"))),
                }
            }
            Value::Null => None,
            other => return Err(D::Error::custom(format!("unexpected list entry {other}"))),
        };
        out.extend(entry);
    }
    Ok(out)
}
