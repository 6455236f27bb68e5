use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// One astronomy-picture-of-the-day entry from the feed.
///
/// Every field is optional. Values of the wrong JSON type and empty strings
/// are read as absent so a single odd record never rejects the whole feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FeedRecord {
    #[serde(deserialize_with = "text_or_absent")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text_or_absent")]
    pub date: Option<String>,
    #[serde(deserialize_with = "text_or_absent")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "media_type_or_other")]
    pub media_type: MediaType,
    #[serde(deserialize_with = "text_or_absent")]
    pub url: Option<String>,
    #[serde(deserialize_with = "text_or_absent")]
    pub hdurl: Option<String>,
    #[serde(deserialize_with = "text_or_absent")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    Image,
    Video,
    /// Anything else, including a missing `media_type`.
    #[default]
    Other,
}

impl MediaType {
    fn from_label(label: &str) -> Self {
        match label {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Other(IgnoredAny),
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) if !text.is_empty() => Some(text),
        _ => None,
    })
}

fn media_type_or_other<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(label) => MediaType::from_label(&label),
        Loose::Other(_) => MediaType::Other,
    })
}
