use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::unread::application::helpers::Pagination;

/// Raw query parameters of the incoming request. Unrelated parameters must
/// survive pagination links and redirects untouched, so the whole mapping is
/// carried around instead of a parsed subset. BTreeMap keeps the serialized
/// order deterministic.
pub type RawQuery = BTreeMap<String, String>;

/// Identity of the requesting user. Always positive; guests never reach the
/// unread handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewerId(i64);

impl ViewerId {
    pub fn new(id: i64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Per-viewer display settings, read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Always >= 1; the settings provider owns that guarantee.
    pub topics_per_page: u32,
    /// Strict pagination: out-of-range pages redirect instead of rendering.
    pub use_pagination: bool,
}

/// The category the listing is scoped to. `cid: None` is the
/// "all categories" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCategory {
    pub cid: Option<i64>,
    pub name: String,
    pub icon: String,
}

impl SelectedCategory {
    pub fn all() -> Self {
        Self {
            cid: None,
            name: "[[unread:all-categories]]".to_string(),
            icon: "fa-list".to_string(),
        }
    }
}

/// Category scope resolved from the `cid` query parameter: the selection
/// shown in the UI plus the concrete category ids it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub selected_category: SelectedCategory,
    pub selected_cids: Vec<i64>,
}

impl CategorySelection {
    pub fn all_categories() -> Self {
        Self {
            selected_category: SelectedCategory::all(),
            selected_cids: Vec::new(),
        }
    }
}

/// One row of the unread listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub tid: i64,
    pub cid: i64,
    pub title: String,
    pub slug: String,
    pub post_count: u32,
    pub last_post_time: DateTime<Utc>,
}

/// One window of unread topics plus the total count for the current
/// filter/category scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadTopics {
    pub topics: Vec<TopicSummary>,
    pub topic_count: u64,
}

/// A selectable filter tab. At most one descriptor of a built set has
/// `selected = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub selected: bool,
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Breadcrumb {
    pub fn label(text: &str) -> Self {
        Self {
            text: text.to_string(),
            url: None,
        }
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: Some(url.to_string()),
        }
    }
}

/// The aggregate handed to the template. Built once per request, discarded
/// after render or redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnreadPage {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
    pub topics: Vec<TopicSummary>,
    pub topic_count: u64,
    pub page_count: u32,
    pub pagination: Pagination,
    pub show_select: bool,
    pub show_topic_tools: bool,
    pub all_categories_url: String,
    pub selected_category: SelectedCategory,
    pub selected_cids: Vec<i64>,
    pub select_category_label: String,
    pub select_category_icon: String,
    pub show_category_select_label: bool,
    pub filters: Vec<FilterDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_filter: Option<FilterDescriptor>,
}

/// Exactly one of these happens per request.
#[derive(Debug, Clone, PartialEq)]
pub enum UnreadOutcome {
    Page(Box<UnreadPage>),
    Redirect { location: String },
}
