use maud::{html, Markup, DOCTYPE};

use crate::unread::application::domain::entities::UnreadPage;
use crate::unread::application::ports::outgoing::{PageRenderer, RenderError};

/// Minimal server-side renderer for the `unread` view. Stands in for the
/// real templating engine behind the renderer port; the `[[…]]` tokens are
/// emitted as-is.
pub struct MaudPageRenderer;

impl MaudPageRenderer {
    fn unread(&self, page: &UnreadPage) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head { title { (page.title) } }
                body {
                    @if let Some(trail) = &page.breadcrumbs {
                        nav class="breadcrumbs" {
                            @for crumb in trail {
                                @if let Some(url) = &crumb.url {
                                    a href=(url) { (crumb.text) }
                                } @else {
                                    span { (crumb.text) }
                                }
                            }
                        }
                    }
                    ul class="filters" {
                        @for filter in &page.filters {
                            li.selected[filter.selected] {
                                a href=(filter.url) { i class=(filter.icon) {} " " (filter.name) }
                            }
                        }
                    }
                    ul class="topics" data-count=(page.topic_count) {
                        @for topic in &page.topics {
                            li { a href={ "topic/" (topic.slug) } { (topic.title) } }
                        }
                    }
                    nav class="pagination" {
                        @for link in &page.pagination.pages {
                            @if link.active {
                                strong { (link.page) }
                            } @else {
                                a href={ "?" (link.qs) } { (link.page) }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl PageRenderer for MaudPageRenderer {
    fn render(&self, view: &str, page: &UnreadPage) -> Result<String, RenderError> {
        match view {
            "unread" => Ok(self.unread(page).into_string()),
            other => Err(RenderError::TemplateFailed {
                view: other.to_string(),
                reason: "unknown view".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::unread::application::domain::entities::SelectedCategory;
    use crate::unread::application::helpers::{self, Pagination};

    fn page() -> UnreadPage {
        let query = BTreeMap::new();
        let filters = helpers::build_filters("unread", "new", &query);
        let selected_filter = helpers::selected_filter(&filters);
        UnreadPage {
            title: "[[pages:unread]]".to_string(),
            breadcrumbs: None,
            topics: Vec::new(),
            topic_count: 0,
            page_count: 3,
            pagination: Pagination::create(2, 3, &query),
            show_select: true,
            show_topic_tools: false,
            all_categories_url: "unread".to_string(),
            selected_category: SelectedCategory::all(),
            selected_cids: Vec::new(),
            select_category_label: "[[unread:mark_as_read]]".to_string(),
            select_category_icon: "fa-inbox".to_string(),
            show_category_select_label: true,
            filters,
            selected_filter,
        }
    }

    #[test]
    fn renders_title_filters_and_pagination() {
        let html = MaudPageRenderer.render("unread", &page()).unwrap();

        assert!(html.contains("[[pages:unread]]"));
        assert!(html.contains("class=\"selected\""));
        assert!(html.contains("?page=1"));
        assert!(html.contains("<strong>2</strong>"));
    }

    #[test]
    fn unknown_view_is_an_error() {
        let result = MaudPageRenderer.render("recent", &page());

        assert!(matches!(
            result,
            Err(RenderError::TemplateFailed { view, .. }) if view == "recent"
        ));
    }
}
