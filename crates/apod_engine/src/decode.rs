use std::borrow::Cow;

use apod_core::FeedRecord;
use encoding_rs::{Encoding, UTF_8};
use gallery_logging::{gallery_debug, gallery_trace, gallery_warn};
use serde_json::Value;

use crate::{FailureKind, FeedError};

/// Decodes a feed body into records.
///
/// The body must be a JSON array. Elements that are not objects become empty
/// records so positions still line up with the feed.
pub fn decode_feed(bytes: &[u8], content_type: Option<&str>) -> Result<Vec<FeedRecord>, FeedError> {
    let text = decode_text(bytes, content_type);
    let value: Value = serde_json::from_str(&text)
        .map_err(|err| FeedError::new(FailureKind::Parse, err.to_string()))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(FeedError::new(
                FailureKind::Parse,
                format!("expected a JSON array, found {}", json_kind(&other)),
            ))
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            serde_json::from_value(entry).unwrap_or_else(|err| {
                gallery_debug!("Feed entry {} is not a record: {}", position, err);
                FeedRecord::default()
            })
        })
        .collect())
}

/// BOM first, then the Content-Type charset, then UTF-8.
fn decode_text<'a>(bytes: &'a [u8], content_type: Option<&str>) -> Cow<'a, str> {
    let declared = content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = declared.decode(bytes);
    gallery_trace!("Decoding {} byte feed body as {}", bytes.len(), used.name());
    if had_errors {
        gallery_warn!("Feed body contained malformed {} sequences", used.name());
    }
    text
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
