use async_trait::async_trait;

use crate::unread::application::domain::entities::CategorySelection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryResolveError {
    #[error("Category lookup failed: {0}")]
    LookupFailed(String),
}

/// Maps the raw `cid` query value onto a category selection. The value may
/// be a single id or a comma-delimited set; `None` means all categories.
/// Permission scoping happens behind this port.
#[async_trait]
pub trait CategoryResolver: Send + Sync {
    async fn resolve(&self, cid: Option<&str>) -> Result<CategorySelection, CategoryResolveError>;
}
