use async_trait::async_trait;

use crate::unread::application::domain::entities::ViewerId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PrivilegeError {
    #[error("Privilege check failed: {0}")]
    CheckFailed(String),
}

/// Whether the viewer may use the moderation tools on the listing.
#[async_trait]
pub trait PrivilegeChecker: Send + Sync {
    async fn can_moderate(&self, viewer: ViewerId) -> Result<bool, PrivilegeError>;
}
