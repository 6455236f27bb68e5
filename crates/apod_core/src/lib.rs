//! APOD gallery core: pure state machine, media URL helpers and view models.
mod cards;
mod detail;
mod effect;
mod embed;
mod facts;
mod media;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use detail::present;
pub use effect::Effect;
pub use embed::{
    featured_embed, generic_embed, known_platform_embed, EmbedFrame, FeaturedEmbed,
    FEATURED_EMBEDS, STANDARD_PERMISSIONS,
};
pub use facts::{pick as pick_fact, SPACE_FACTS};
pub use media::{
    effective_source, extract_embed_source, extract_known_video_id, is_absolute_url,
    resolve_video_thumbnail, thumbnail_url_for,
};
pub use msg::{Key, Msg};
pub use record::{FeedRecord, MediaType};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{
    AppViewModel, CardMedia, CardView, DetailMedia, DetailView, GalleryView, ImageView,
    EMPTY_FEED_MESSAGE, FETCH_FAILED_MESSAGE, GRID_LIMIT, INITIAL_MESSAGE, LOADING_MESSAGE,
};
