pub mod unread;
