use async_trait::async_trait;
use std::collections::HashMap;

use crate::unread::application::domain::entities::{UserSettings, ViewerId};
use crate::unread::application::ports::outgoing::{UserSettingsError, UserSettingsProvider};

/// Settings provider with a sitewide default and per-viewer overrides.
#[derive(Debug, Clone)]
pub struct InMemorySettingsStore {
    default: UserSettings,
    overrides: HashMap<i64, UserSettings>,
}

impl InMemorySettingsStore {
    pub fn new(default: UserSettings) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, viewer: ViewerId, settings: UserSettings) -> Self {
        self.overrides.insert(viewer.value(), settings);
        self
    }
}

#[async_trait]
impl UserSettingsProvider for InMemorySettingsStore {
    async fn settings_for(&self, viewer: ViewerId) -> Result<UserSettings, UserSettingsError> {
        Ok(self
            .overrides
            .get(&viewer.value())
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_settings() -> UserSettings {
        UserSettings {
            topics_per_page: 20,
            use_pagination: true,
        }
    }

    #[tokio::test]
    async fn falls_back_to_the_sitewide_default() {
        let store = InMemorySettingsStore::new(default_settings());

        let settings = store
            .settings_for(ViewerId::new(42).unwrap())
            .await
            .unwrap();

        assert_eq!(settings, default_settings());
    }

    #[tokio::test]
    async fn override_wins_for_its_viewer() {
        let viewer = ViewerId::new(42).unwrap();
        let store = InMemorySettingsStore::new(default_settings()).with_override(
            viewer,
            UserSettings {
                topics_per_page: 50,
                use_pagination: false,
            },
        );

        let settings = store.settings_for(viewer).await.unwrap();

        assert_eq!(settings.topics_per_page, 50);
        assert!(!settings.use_pagination);
    }
}
