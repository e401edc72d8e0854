use async_trait::async_trait;

use crate::unread::application::domain::entities::{UnreadTopics, ViewerId};

/// One window of the unread listing. `start`/`stop` are zero-based and
/// inclusive; an empty `cids` means no category scoping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadWindow {
    pub viewer: ViewerId,
    pub cids: Vec<i64>,
    pub start: u64,
    pub stop: u64,
    pub filter: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnreadQueryError {
    #[error("Unread query failed: {0}")]
    QueryFailed(String),
}

/// The topic subsystem's unread view. Computing which topics count as
/// unread lives entirely behind this port.
#[async_trait]
pub trait UnreadQuery: Send + Sync {
    async fn unread_topics(&self, window: &UnreadWindow) -> Result<UnreadTopics, UnreadQueryError>;

    /// Total unread count for the viewer under `filter`, unscoped by
    /// category.
    async fn unread_total(&self, viewer: ViewerId, filter: &str)
        -> Result<u64, UnreadQueryError>;
}
