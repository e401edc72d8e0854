mod category_resolver;
mod page_renderer;
mod privileges;
mod unread_query;
mod user_settings;

pub use category_resolver::{CategoryResolveError, CategoryResolver};
pub use page_renderer::{PageRenderer, RenderError};
pub use privileges::{PrivilegeChecker, PrivilegeError};
pub use unread_query::{UnreadQuery, UnreadQueryError, UnreadWindow};
pub use user_settings::{UserSettingsError, UserSettingsProvider};
