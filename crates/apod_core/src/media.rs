//! Locating embed sources and known video ids in feed URLs.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::FeedRecord;

static IFRAME_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe[^>]*\s+src=['"]([^'"]+)['"][^>]*>"#).expect("iframe src pattern")
});

static KNOWN_HOST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:embed/|watch\?v=)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("known host id pattern")
});

static V_PARAM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]{11})").expect("v param pattern"));

/// Returns the quoted `src` of an `<iframe>` tag found in `markup_or_url`.
///
/// Plain URLs yield `None`; callers fall back to the raw input.
pub fn extract_embed_source(markup_or_url: Option<&str>) -> Option<String> {
    let input = markup_or_url?;
    IFRAME_SRC
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|src| src.as_str().to_owned())
}

/// Iframe `src` if the input carries markup, otherwise the input itself.
pub fn effective_source(raw: Option<&str>) -> Option<String> {
    extract_embed_source(raw).or_else(|| raw.map(ToOwned::to_owned))
}

/// Finds an 11-character video id in an `embed/`, `watch?v=`, `youtu.be/`
/// or `v=` style URL (or in the `src` of iframe markup).
pub fn extract_known_video_id(url: Option<&str>) -> Option<String> {
    let source = effective_source(url)?;
    [&*KNOWN_HOST_ID, &*V_PARAM_ID].into_iter().find_map(|pattern| {
        pattern
            .captures(&source)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str().to_owned())
    })
}

/// Fixed-size preview image for a known video id.
pub fn thumbnail_url_for(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Preview image for a video record: the feed's own `thumbnail_url` when
/// present, otherwise one derived from a known video id.
pub fn resolve_video_thumbnail(record: Option<&FeedRecord>) -> Option<String> {
    let record = record?;
    if let Some(thumbnail) = &record.thumbnail_url {
        return Some(thumbnail.clone());
    }
    extract_known_video_id(record.url.as_deref()).map(|id| thumbnail_url_for(&id))
}

/// True for `http://` and `https://` URLs.
pub fn is_absolute_url(src: &str) -> bool {
    Url::parse(src)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iframe_src_accepts_both_quote_styles() {
        let double = r#"<iframe width="560" src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>"#;
        let single = "<IFRAME class='x' src='https://player.vimeo.com/video/1'></IFRAME>";

        assert_eq!(
            extract_embed_source(Some(double)).as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_embed_source(Some(single)).as_deref(),
            Some("https://player.vimeo.com/video/1")
        );
    }

    #[test]
    fn plain_url_has_no_embed_source() {
        assert_eq!(extract_embed_source(Some("https://example.com/v.mp4")), None);
        assert_eq!(extract_embed_source(None), None);
    }

    #[test]
    fn short_ids_do_not_match() {
        assert_eq!(
            extract_known_video_id(Some("https://youtu.be/tooShort")),
            None
        );
    }

    #[test]
    fn v_param_matches_on_any_host() {
        assert_eq!(
            extract_known_video_id(Some("https://example.com/player?list=x&v=AbCdEfGhIjK"))
                .as_deref(),
            Some("AbCdEfGhIjK")
        );
    }

    #[test]
    fn absolute_url_requires_http_scheme() {
        assert!(is_absolute_url("https://apod.nasa.gov/video.mp4"));
        assert!(is_absolute_url("http://apod.nasa.gov/video.mp4"));
        assert!(!is_absolute_url("//apod.nasa.gov/video.mp4"));
        assert!(!is_absolute_url("ftp://apod.nasa.gov/video.mp4"));
        assert!(!is_absolute_url("video.mp4"));
    }
}
