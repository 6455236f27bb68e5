pub const PAGE_TITLE: &str = "NASA Space Explorer";
pub const FETCH_BUTTON_LABEL: &str = "Get Space Images";

pub const BUTTON_FETCH_ID: &str = "getImageBtn";
pub const FACT_ID: &str = "randomFact";
pub const GALLERY_ID: &str = "gallery";
pub const MODAL_ID: &str = "modal";

pub const PLAY_GLYPH: &str = "▶";
pub const VIDEO_PLACEHOLDER_TEXT: &str = "Video — click to open";
pub const MEDIA_UNAVAILABLE_TEXT: &str = "Media not available";
pub const OPEN_EMBED_SOURCE_LABEL: &str = "Open video in a new tab";
pub const OPEN_VIDEO_LABEL: &str = "Open video in new tab";
pub const CLOSE_LABEL: &str = "Close";
