use std::env;

/// Site-level settings the unread listing depends on. Collected once at
/// startup and injected; handlers never read the environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL prefix the forum is mounted under; empty when served at the
    /// domain root. Never ends with a slash.
    pub relative_path: String,
    /// Title shown when the unread listing doubles as the home page.
    pub home_page_title: Option<String>,
    /// Which route is served at `/`. `"unread"` mounts the unread listing
    /// as the site home.
    pub home_page_route: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            relative_path: env::var("RELATIVE_PATH").unwrap_or_default(),
            home_page_title: env::var("HOME_PAGE_TITLE").ok().filter(|t| !t.is_empty()),
            home_page_route: env::var("HOME_PAGE_ROUTE")
                .unwrap_or_else(|_| "categories".to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relative_path: String::new(),
            home_page_title: None,
            home_page_route: "categories".to_string(),
        }
    }
}
