mod category_directory;
mod privilege_roster;
mod settings_store;
mod topic_store;

pub use category_directory::{CategoryRecord, InMemoryCategoryDirectory};
pub use privilege_roster::InMemoryPrivilegeRoster;
pub use settings_store::InMemorySettingsStore;
pub use topic_store::{InMemoryTopicStore, UnreadRecord};
