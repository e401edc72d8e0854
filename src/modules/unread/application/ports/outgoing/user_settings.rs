use async_trait::async_trait;

use crate::unread::application::domain::entities::{UserSettings, ViewerId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserSettingsError {
    #[error("Settings lookup failed: {0}")]
    LookupFailed(String),
}

/// Read-only access to the viewer's display settings.
#[async_trait]
pub trait UserSettingsProvider: Send + Sync {
    async fn settings_for(&self, viewer: ViewerId) -> Result<UserSettings, UserSettingsError>;
}
