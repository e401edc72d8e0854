use crate::unread::application::domain::entities::UnreadPage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    #[error("Template '{view}' failed: {reason}")]
    TemplateFailed { view: String, reason: String },
}

/// The templating engine. The orchestrator only hands over a finished view
/// model under a view name; template resolution and localization of the
/// `[[…]]` tokens happen behind this port.
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: &str, page: &UnreadPage) -> Result<String, RenderError>;
}
