use async_trait::async_trait;
use std::collections::HashSet;

use crate::unread::application::domain::entities::ViewerId;
use crate::unread::application::ports::outgoing::{PrivilegeChecker, PrivilegeError};

/// Moderation privileges as a plain roster of user ids.
#[derive(Debug, Clone)]
pub struct InMemoryPrivilegeRoster {
    moderators: HashSet<i64>,
}

impl InMemoryPrivilegeRoster {
    pub fn new(moderators: impl IntoIterator<Item = i64>) -> Self {
        Self {
            moderators: moderators.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PrivilegeChecker for InMemoryPrivilegeRoster {
    async fn can_moderate(&self, viewer: ViewerId) -> Result<bool, PrivilegeError> {
        Ok(self.moderators.contains(&viewer.value()))
    }
}
