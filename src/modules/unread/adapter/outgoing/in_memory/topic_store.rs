use async_trait::async_trait;

use crate::unread::application::domain::entities::{TopicSummary, UnreadTopics, ViewerId};
use crate::unread::application::ports::outgoing::{UnreadQuery, UnreadQueryError, UnreadWindow};

/// One unread topic of one viewer, tagged with the filters it matches.
#[derive(Debug, Clone)]
pub struct UnreadRecord {
    pub viewer: i64,
    pub topic: TopicSummary,
    pub recent: bool,
    pub watched: bool,
    pub unreplied: bool,
}

/// Unread view over a fixed record set. Newest activity first, the same
/// order the real topic subsystem serves.
#[derive(Debug, Clone)]
pub struct InMemoryTopicStore {
    records: Vec<UnreadRecord>,
}

impl InMemoryTopicStore {
    pub fn new(records: Vec<UnreadRecord>) -> Self {
        Self { records }
    }

    fn matching(&self, viewer: ViewerId, filter: &str, cids: &[i64]) -> Vec<&UnreadRecord> {
        let mut rows: Vec<&UnreadRecord> = self
            .records
            .iter()
            .filter(|r| r.viewer == viewer.value())
            .filter(|r| match filter {
                "" => true,
                "new" => r.recent,
                "watched" => r.watched,
                "unreplied" => r.unreplied,
                _ => false,
            })
            .filter(|r| cids.is_empty() || cids.contains(&r.topic.cid))
            .collect();
        rows.sort_by(|a, b| b.topic.last_post_time.cmp(&a.topic.last_post_time));
        rows
    }
}

#[async_trait]
impl UnreadQuery for InMemoryTopicStore {
    async fn unread_topics(&self, window: &UnreadWindow) -> Result<UnreadTopics, UnreadQueryError> {
        let rows = self.matching(window.viewer, &window.filter, &window.cids);
        let topic_count = rows.len() as u64;

        let start = usize::try_from(window.start).unwrap_or(usize::MAX);
        let stop = usize::try_from(window.stop).unwrap_or(usize::MAX);
        let topics = rows
            .into_iter()
            .skip(start)
            .take(stop.saturating_sub(start) + 1)
            .map(|r| r.topic.clone())
            .collect();

        Ok(UnreadTopics {
            topics,
            topic_count,
        })
    }

    async fn unread_total(
        &self,
        viewer: ViewerId,
        filter: &str,
    ) -> Result<u64, UnreadQueryError> {
        Ok(self.matching(viewer, filter, &[]).len() as u64)
    }
}
