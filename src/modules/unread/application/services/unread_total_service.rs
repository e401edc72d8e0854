use async_trait::async_trait;

use crate::unread::application::{
    domain::entities::ViewerId,
    ports::incoming::use_cases::{GetUnreadTotalError, GetUnreadTotalUseCase},
    ports::outgoing::UnreadQuery,
};

/// Answers the scalar unread count, forwarded untouched from the topic
/// subsystem.
#[derive(Debug, Clone)]
pub struct UnreadTotalService<Q>
where
    Q: UnreadQuery,
{
    topics: Q,
}

impl<Q> UnreadTotalService<Q>
where
    Q: UnreadQuery,
{
    pub fn new(topics: Q) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl<Q> GetUnreadTotalUseCase for UnreadTotalService<Q>
where
    Q: UnreadQuery,
{
    async fn execute(&self, viewer: ViewerId, filter: &str) -> Result<u64, GetUnreadTotalError> {
        self.topics
            .unread_total(viewer, filter)
            .await
            .map_err(|e| GetUnreadTotalError::QueryFailed(e.to_string()))
    }
}
