use std::rc::Rc;

use apod_core::{FeedRecord, RequestId};
use gallery_logging::{gallery_error, gallery_info};

use crate::fetch::{FeedSettings, FeedSource, ReqwestFeedSource};
use crate::{decode_feed, FeedCompletion, FeedError};

/// Runs feed requests for the core's `FetchFeed` effects.
///
/// Cheap to clone; every clone shares the same source.
#[derive(Clone)]
pub struct FeedEngine {
    source: Rc<dyn FeedSource>,
    feed_url: Rc<str>,
}

impl FeedEngine {
    pub fn new(settings: FeedSettings) -> Self {
        let feed_url = settings.feed_url.clone();
        Self::with_source(feed_url, ReqwestFeedSource::new(settings))
    }

    pub fn with_source(feed_url: impl Into<String>, source: impl FeedSource + 'static) -> Self {
        let feed_url: String = feed_url.into();
        Self {
            source: Rc::new(source),
            feed_url: Rc::from(feed_url),
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetches and decodes the feed once. Failures are logged here, with
    /// their cause, before being handed back.
    pub async fn load(&self, request_id: RequestId) -> FeedCompletion {
        gallery_info!("FetchFeed request_id={} url={}", request_id, self.feed_url);
        let result = self.fetch_records().await;
        match &result {
            Ok(items) => gallery_info!(
                "FetchFeed request_id={} loaded {} records",
                request_id,
                items.len()
            ),
            Err(err) => gallery_error!("Fetch error request_id={}: {}", request_id, err),
        }
        FeedCompletion { request_id, result }
    }

    async fn fetch_records(&self) -> Result<Vec<FeedRecord>, FeedError> {
        let output = self.source.fetch(&self.feed_url).await?;
        decode_feed(&output.bytes, output.metadata.content_type.as_deref())
    }
}
