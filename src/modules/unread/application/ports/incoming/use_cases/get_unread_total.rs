use async_trait::async_trait;

use crate::unread::application::domain::entities::ViewerId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUnreadTotalError {
    #[error("Unread total query failed: {0}")]
    QueryFailed(String),
}

/// Scalar unread count for the viewer under an optional filter.
#[async_trait]
pub trait GetUnreadTotalUseCase: Send + Sync {
    async fn execute(&self, viewer: ViewerId, filter: &str) -> Result<u64, GetUnreadTotalError>;
}
