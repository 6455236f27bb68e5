use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{FailureKind, FeedError, FetchMetadata, FetchOutput};

pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub feed_url: String,
    pub max_bytes: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Where feed bytes come from. The browser build and the tests both use
/// [`ReqwestFeedSource`]; other sources can stand in for it.
#[async_trait::async_trait(?Send)]
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FeedError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFeedSource {
    settings: FeedSettings,
}

impl ReqwestFeedSource {
    pub fn new(settings: FeedSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| FeedError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> FeedError {
        FeedError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait(?Send)]
impl FeedSource for ReqwestFeedSource {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FeedError> {
        let parsed =
            Url::parse(url).map_err(|err| FeedError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let final_url = response.url().to_string();
        // Only the charset is read from the header; the body decides the format.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(network_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            url: final_url,
            content_type,
            byte_len: body.len() as u64,
        };

        Ok(FetchOutput {
            bytes: body.freeze(),
            metadata,
        })
    }
}

fn network_error(err: reqwest::Error) -> FeedError {
    FeedError::new(FailureKind::Network, err.to_string())
}
