use crate::unread::application::domain::entities::{FilterDescriptor, RawQuery};
use crate::unread::application::helpers::query_string;

/// The site's unread filter tabs: (filter key, label, icon). The empty key
/// is the unfiltered listing.
const FILTER_TABS: [(&str, &str, &str); 4] = [
    ("", "[[unread:all-topics]]", "fa-book"),
    ("new", "[[unread:new-topics]]", "fa-clock-o"),
    ("watched", "[[unread:watched-topics]]", "fa-bell-o"),
    ("unreplied", "[[unread:unreplied-topics]]", "fa-reply"),
];

/// Build the selectable filter tabs for the current request. An
/// unrecognized `active_filter` simply selects nothing.
pub fn build_filters(
    base_url: &str,
    active_filter: &str,
    query: &RawQuery,
) -> Vec<FilterDescriptor> {
    FILTER_TABS
        .iter()
        .map(|(key, name, icon)| FilterDescriptor {
            name: name.to_string(),
            url: format!(
                "{base_url}{}",
                query_string::build_query_string(query, "filter", key)
            ),
            icon: icon.to_string(),
            selected: *key == active_filter,
            filter: key.to_string(),
        })
        .collect()
}

pub fn selected_filter(filters: &[FilterDescriptor]) -> Option<FilterDescriptor> {
    filters.iter().find(|f| f.selected).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn exactly_one_tab_selected_for_known_filter() {
        let filters = build_filters("unread", "watched", &BTreeMap::new());

        assert_eq!(filters.len(), 4);
        assert_eq!(filters.iter().filter(|f| f.selected).count(), 1);
        assert_eq!(selected_filter(&filters).unwrap().filter, "watched");
    }

    #[test]
    fn empty_filter_selects_the_all_topics_tab() {
        let filters = build_filters("unread", "", &BTreeMap::new());

        let selected = selected_filter(&filters).unwrap();
        assert_eq!(selected.filter, "");
        assert_eq!(selected.name, "[[unread:all-topics]]");
    }

    #[test]
    fn unknown_filter_selects_nothing() {
        let filters = build_filters("unread", "bogus", &BTreeMap::new());

        assert!(selected_filter(&filters).is_none());
        assert!(filters.iter().all(|f| !f.selected));
    }

    #[test]
    fn tab_urls_rewrite_filter_and_drop_page() {
        let query: RawQuery = [("page", "3"), ("cid", "7"), ("filter", "new")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let filters = build_filters("unread", "new", &query);

        assert_eq!(filters[0].url, "unread?cid=7"); // all-topics drops the key
        assert_eq!(filters[2].url, "unread?cid=7&filter=watched");
        assert!(filters.iter().all(|f| !f.url.contains("page=")));
    }
}
