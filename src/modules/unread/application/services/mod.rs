mod build_unread_page_service;
mod unread_total_service;

pub use build_unread_page_service::BuildUnreadPageService;
pub use unread_total_service::UnreadTotalService;
