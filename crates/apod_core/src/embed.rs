//! Embed frames for the detail modal.
//!
//! Most videos get the generic platform embed. A few ids carry a fixed,
//! pre-approved frame instead; those live in [`FEATURED_EMBEDS`] so the
//! policy is data rather than a branch in the presenter.

/// Permissions granted to every video frame.
pub const STANDARD_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Attributes of an `<iframe>` placed in the modal media area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub title: String,
    pub width: String,
    pub height: String,
    pub allow: String,
    pub referrer_policy: Option<String>,
    pub allow_fullscreen: bool,
}

/// Forced frame configuration for one video id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedEmbed {
    pub video_id: &'static str,
    pub src: &'static str,
    pub title: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub referrer_policy: &'static str,
}

impl FeaturedEmbed {
    pub fn frame(&self) -> EmbedFrame {
        EmbedFrame {
            src: self.src.to_owned(),
            title: self.title.to_owned(),
            width: self.width.to_owned(),
            height: self.height.to_owned(),
            allow: STANDARD_PERMISSIONS.to_owned(),
            referrer_policy: Some(self.referrer_policy.to_owned()),
            allow_fullscreen: true,
        }
    }
}

pub const FEATURED_EMBEDS: &[FeaturedEmbed] = &[FeaturedEmbed {
    video_id: "1R5QqhPq1Ik",
    src: "https://www.youtube.com/embed/1R5QqhPq1Ik?si=mfXXB1kdtjW50Nji&autoplay=1",
    title: "YouTube video player",
    width: "560",
    height: "315",
    referrer_policy: "strict-origin-when-cross-origin",
}];

/// Looks up a forced frame for `video_id`.
pub fn featured_embed(video_id: &str) -> Option<EmbedFrame> {
    FEATURED_EMBEDS
        .iter()
        .find(|featured| featured.video_id == video_id)
        .map(FeaturedEmbed::frame)
}

/// Platform embed for a known video id. Autoplay is off.
pub fn known_platform_embed(video_id: &str, title: &str) -> EmbedFrame {
    generic_embed(
        &format!("https://www.youtube.com/embed/{video_id}?rel=0&modestbranding=1&autoplay=0"),
        title,
    )
}

/// Full-width frame around an arbitrary absolute URL.
pub fn generic_embed(src: &str, title: &str) -> EmbedFrame {
    EmbedFrame {
        src: src.to_owned(),
        title: title.to_owned(),
        width: "100%".to_owned(),
        height: "500".to_owned(),
        allow: STANDARD_PERMISSIONS.to_owned(),
        referrer_policy: None,
        allow_fullscreen: true,
    }
}
