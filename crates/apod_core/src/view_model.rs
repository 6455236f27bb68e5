use crate::EmbedFrame;

/// Cards shown at most: a 3x3 grid.
pub const GRID_LIMIT: usize = 9;

pub const INITIAL_MESSAGE: &str = "Click \"Get Space Images\" to explore the cosmos.";
pub const LOADING_MESSAGE: &str = "🔄 Loading space photos…";
pub const EMPTY_FEED_MESSAGE: &str = "No images found in the data.";
pub const FETCH_FAILED_MESSAGE: &str = "Sorry, something went wrong while fetching images.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub gallery: GalleryView,
    /// `Some` while the modal is open.
    pub detail: Option<DetailView>,
    pub fact: Option<&'static str>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// A single placeholder line in place of the grid.
    Message(String),
    Cards(Vec<CardView>),
}

impl Default for GalleryView {
    fn default() -> Self {
        GalleryView::Message(INITIAL_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the current items list.
    pub index: usize,
    pub title: String,
    pub date: String,
    pub media: CardMedia,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    Image(ImageView),
    /// Preview image drawn with a play overlay.
    VideoThumbnail(ImageView),
    /// "Video — click to open".
    VideoPlaceholder,
    /// "Media not available".
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub index: usize,
    pub media: DetailMedia,
    pub title: String,
    pub date: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    Image(ImageView),
    Embed(EmbedFrame),
    /// Frame around a non-platform URL plus an "open in new tab" link, in
    /// case the host refuses to be framed.
    ExternalFrame { frame: EmbedFrame, link: String },
    /// Neither embeddable nor absolute: whatever preview and link exist.
    Fallback {
        thumbnail: Option<ImageView>,
        link: Option<String>,
    },
    Message(String),
}
