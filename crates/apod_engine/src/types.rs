use std::fmt;

use apod_core::{FeedRecord, Msg, RequestId};
use bytes::Bytes;

/// Outcome of one feed request, tagged with the id the core handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCompletion {
    pub request_id: RequestId,
    pub result: Result<Vec<FeedRecord>, FeedError>,
}

impl FeedCompletion {
    /// The message the core expects for this outcome.
    pub fn into_msg(self) -> Msg {
        match self.result {
            Ok(items) => Msg::FeedLoaded {
                request_id: self.request_id,
                items,
            },
            Err(_) => Msg::FeedFailed {
                request_id: self.request_id,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Bytes,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FeedError {
    pub kind: FailureKind,
    pub message: String,
}

impl FeedError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Parse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid feed url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Parse => write!(f, "malformed feed"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
