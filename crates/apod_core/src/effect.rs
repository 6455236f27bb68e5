#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the configured feed once and report back with the same id.
    FetchFeed { request_id: crate::RequestId },
}
