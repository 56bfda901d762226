//! Response normalization
//!
//! Each provider answers with its own JSON layout. A body is first classified
//! into a [`ResponseShape`], then the provider's URL field is pulled out of
//! every element in order. Elements without a usable URL (missing field,
//! non-string, empty string) are skipped, so every returned URL is a
//! non-empty string taken from the body.

use crate::types::{AppError, AppResult};
use serde_json::Value;
use tracing::debug;

/// The layouts an upstream body can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseShape<'a> {
    /// A bare top-level array.
    Array(&'a [Value]),
    /// An object whose `items` field is an array.
    ObjectWithItems(&'a [Value]),
    Unrecognized,
}

impl<'a> ResponseShape<'a> {
    pub fn classify(body: &'a Value) -> Self {
        match body {
            Value::Array(elements) => ResponseShape::Array(elements),
            Value::Object(map) => match map.get("items") {
                Some(Value::Array(items)) => ResponseShape::ObjectWithItems(items),
                _ => ResponseShape::Unrecognized,
            },
            _ => ResponseShape::Unrecognized,
        }
    }
}

/// Pulls `field` out of every element, keeping order.
pub fn extract_urls(elements: &[Value], field: &str) -> Vec<String> {
    let urls: Vec<String> = elements
        .iter()
        .filter_map(|element| element.get(field))
        .filter_map(|v| v.as_str())
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect();

    if urls.len() < elements.len() {
        debug!(
            field,
            skipped = elements.len() - urls.len(),
            "Skipped elements without a usable URL"
        );
    }

    urls
}

/// Video provider: only `{"items": [{"url": ...}, ...]}` is accepted.
pub fn youtube_urls(body: &Value) -> AppResult<Vec<String>> {
    match ResponseShape::classify(body) {
        ResponseShape::ObjectWithItems(items) => Ok(extract_urls(items, "url")),
        _ => Err(AppError::Normalization("no items found".to_string())),
    }
}

/// Social provider: a bare array first, then the `items` wrapper.
pub fn instagram_urls(body: &Value) -> AppResult<Vec<String>> {
    match ResponseShape::classify(body) {
        ResponseShape::Array(elements) => Ok(extract_urls(elements, "media_url")),
        ResponseShape::ObjectWithItems(items) => Ok(extract_urls(items, "media_url")),
        ResponseShape::Unrecognized => {
            Err(AppError::Normalization("no media found".to_string()))
        }
    }
}
