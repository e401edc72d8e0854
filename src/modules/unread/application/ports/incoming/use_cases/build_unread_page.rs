use async_trait::async_trait;

use crate::unread::application::domain::entities::{RawQuery, UnreadOutcome, ViewerId};

/// Everything the orchestrator needs from one incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadPageCommand {
    pub viewer: ViewerId,
    /// The full raw query mapping; unrelated parameters must survive into
    /// pagination links and redirects.
    pub query: RawQuery,
    /// Original request path, used to tell the dedicated `/unread` mount
    /// from the home-page mount.
    pub request_path: String,
}

/// One variant per collaborator; the failure propagates, nothing renders
/// partially.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildUnreadPageError {
    #[error("Category lookup failed: {0}")]
    CategoryLookup(String),
    #[error("Settings lookup failed: {0}")]
    SettingsLookup(String),
    #[error("Privilege check failed: {0}")]
    PrivilegeCheck(String),
    #[error("Unread topics query failed: {0}")]
    TopicQuery(String),
}

#[async_trait]
pub trait BuildUnreadPageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UnreadPageCommand,
    ) -> Result<UnreadOutcome, BuildUnreadPageError>;
}
