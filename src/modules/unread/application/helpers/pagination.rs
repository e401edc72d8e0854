//! Pagination links for the topic listing.
//!
//! Shows the first and last page plus a window of two pages around the
//! current one; every link carries the full original query with only `page`
//! rewritten.

use serde::{Deserialize, Serialize};

use crate::unread::application::domain::entities::RawQuery;
use crate::unread::application::helpers::query_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub page: u32,
    pub active: bool,
    /// Query string for this page, without the leading `?`.
    pub qs: String,
}

/// `rel` hint for response Link headers (`prev`/`next`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelTag {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub page_count: u32,
    pub pages: Vec<PageLink>,
    pub prev: PageLink,
    pub next: PageLink,
    pub rel: Vec<RelTag>,
}

impl Pagination {
    pub fn create(current_page: u32, page_count: u32, query: &RawQuery) -> Self {
        let link = |page: u32| PageLink {
            page,
            active: page == current_page,
            qs: query_string::page_query(query, page),
        };

        let mut wanted: Vec<u32> = vec![1, page_count];
        wanted.extend(current_page.saturating_sub(2)..=current_page.saturating_add(2));
        wanted.retain(|p| (1..=page_count).contains(p));
        wanted.sort_unstable();
        wanted.dedup();

        let pages = wanted.into_iter().map(link).collect();

        let prev = link(current_page.saturating_sub(1).max(1));
        let next = link(current_page.saturating_add(1).min(page_count));

        let mut rel = Vec::new();
        if current_page > 1 {
            rel.push(RelTag {
                rel: "prev".to_string(),
                href: format!("?{}", prev.qs),
            });
        }
        if current_page < page_count {
            rel.push(RelTag {
                rel: "next".to_string(),
                href: format!("?{}", next.qs),
            });
        }

        Self {
            current_page,
            page_count,
            pages,
            prev,
            next,
            rel,
        }
    }
}
