//! APOD engine: feed IO and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::decode_feed;
pub use engine::FeedEngine;
pub use fetch::{FeedSettings, FeedSource, ReqwestFeedSource, DEFAULT_FEED_URL};
pub use types::{FailureKind, FeedCompletion, FeedError, FetchMetadata, FetchOutput};
