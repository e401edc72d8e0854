mod build_unread_page;
mod get_unread_total;

pub use build_unread_page::{BuildUnreadPageError, BuildUnreadPageUseCase, UnreadPageCommand};
pub use get_unread_total::{GetUnreadTotalError, GetUnreadTotalUseCase};
