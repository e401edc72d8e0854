use async_trait::async_trait;

use crate::unread::application::domain::entities::{CategorySelection, SelectedCategory};
use crate::unread::application::ports::outgoing::{CategoryResolveError, CategoryResolver};

#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub cid: i64,
    pub name: String,
    pub icon: String,
}

/// Flat category directory backing the resolver port. Unknown ids in the
/// `cid` parameter are ignored; an entirely unknown or absent selection
/// falls back to "all categories".
#[derive(Debug, Clone)]
pub struct InMemoryCategoryDirectory {
    categories: Vec<CategoryRecord>,
}

impl InMemoryCategoryDirectory {
    pub fn new(categories: Vec<CategoryRecord>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryResolver for InMemoryCategoryDirectory {
    async fn resolve(&self, cid: Option<&str>) -> Result<CategorySelection, CategoryResolveError> {
        let Some(raw) = cid else {
            return Ok(CategorySelection::all_categories());
        };

        let selected_cids: Vec<i64> = raw
            .split(',')
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .filter(|id| self.categories.iter().any(|c| c.cid == *id))
            .collect();

        if selected_cids.is_empty() {
            return Ok(CategorySelection::all_categories());
        }

        let selected_category = if let [only] = selected_cids.as_slice() {
            self.categories
                .iter()
                .find(|c| c.cid == *only)
                .map(|c| SelectedCategory {
                    cid: Some(c.cid),
                    name: c.name.clone(),
                    icon: c.icon.clone(),
                })
                .unwrap_or_else(SelectedCategory::all)
        } else {
            // A multi-category scope keeps the "all" presentation; the
            // cids still narrow the query.
            SelectedCategory::all()
        };

        Ok(CategorySelection {
            selected_category,
            selected_cids,
        })
    }
}
