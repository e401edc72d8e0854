use async_trait::async_trait;
use futures::try_join;

use crate::config::SiteConfig;
use crate::unread::application::{
    domain::entities::{Breadcrumb, RawQuery, UnreadOutcome, UnreadPage},
    helpers::{self, query_string, Pagination},
    ports::incoming::use_cases::{BuildUnreadPageError, BuildUnreadPageUseCase, UnreadPageCommand},
    ports::outgoing::{
        CategoryResolver, PrivilegeChecker, UnreadQuery, UnreadWindow, UserSettingsProvider,
    },
};

/// Orchestrates one unread-listing request: fans out the three independent
/// reads, fetches the topic window, and decides between rendering the view
/// model and redirecting to a corrected page number.
#[derive(Debug, Clone)]
pub struct BuildUnreadPageService<C, S, P, Q>
where
    C: CategoryResolver,
    S: UserSettingsProvider,
    P: PrivilegeChecker,
    Q: UnreadQuery,
{
    categories: C,
    settings: S,
    privileges: P,
    topics: Q,
    config: SiteConfig,
}

impl<C, S, P, Q> BuildUnreadPageService<C, S, P, Q>
where
    C: CategoryResolver,
    S: UserSettingsProvider,
    P: PrivilegeChecker,
    Q: UnreadQuery,
{
    pub fn new(categories: C, settings: S, privileges: P, topics: Q, config: SiteConfig) -> Self {
        Self {
            categories,
            settings,
            privileges,
            topics,
            config,
        }
    }
}

/// `page` query parameter, defaulting non-numeric and non-positive values
/// to 1.
fn requested_page(query: &RawQuery) -> u32 {
    query
        .get("page")
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| page.min(i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

/// Always >= 1, an empty listing still has one page.
fn page_count(topic_count: u64, topics_per_page: u32) -> u32 {
    let per_page = u64::from(topics_per_page.max(1));
    let pages = topic_count.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[async_trait]
impl<C, S, P, Q> BuildUnreadPageUseCase for BuildUnreadPageService<C, S, P, Q>
where
    C: CategoryResolver,
    S: UserSettingsProvider,
    P: PrivilegeChecker,
    Q: UnreadQuery,
{
    async fn execute(
        &self,
        command: UnreadPageCommand,
    ) -> Result<UnreadOutcome, BuildUnreadPageError> {
        let cid = command.query.get("cid").cloned();
        let filter = command.query.get("filter").cloned().unwrap_or_default();

        // Three independent reads; the first failure aborts the join.
        let (selection, settings, is_privileged) = try_join!(
            async {
                self.categories
                    .resolve(cid.as_deref())
                    .await
                    .map_err(|e| BuildUnreadPageError::CategoryLookup(e.to_string()))
            },
            async {
                self.settings
                    .settings_for(command.viewer)
                    .await
                    .map_err(|e| BuildUnreadPageError::SettingsLookup(e.to_string()))
            },
            async {
                self.privileges
                    .can_moderate(command.viewer)
                    .await
                    .map_err(|e| BuildUnreadPageError::PrivilegeCheck(e.to_string()))
            },
        )?;

        let page = requested_page(&command.query);
        let per_page = u64::from(settings.topics_per_page);
        let start = u64::from(page - 1) * per_page;
        let stop = start + per_page - 1;

        let window = UnreadWindow {
            viewer: command.viewer,
            cids: selection.selected_cids.clone(),
            start,
            stop,
            filter: filter.clone(),
        };
        let unread = self
            .topics
            .unread_topics(&window)
            .await
            .map_err(|e| BuildUnreadPageError::TopicQuery(e.to_string()))?;

        // Any path other than the /unread mounts (and their /api twins)
        // means the listing is serving as the site's home page.
        let rp = &self.config.relative_path;
        let displayed_as_home = !(command.request_path.starts_with(&format!("{rp}/api/unread"))
            || command.request_path.starts_with(&format!("{rp}/unread")));
        let base_url = if displayed_as_home { "" } else { "unread" };

        let (title, breadcrumbs) = if displayed_as_home {
            let title = self
                .config
                .home_page_title
                .clone()
                .unwrap_or_else(|| "[[pages:home]]".to_string());
            (title, None)
        } else {
            let trail =
                helpers::build_breadcrumbs(rp, vec![Breadcrumb::label("[[unread:title]]")]);
            ("[[pages:unread]]".to_string(), Some(trail))
        };

        let page_count = page_count(unread.topic_count, settings.topics_per_page);
        let pagination = Pagination::create(page, page_count, &command.query);

        if settings.use_pagination && !(1..=page_count).contains(&page) {
            let corrected = page.clamp(1, page_count);
            let qs = query_string::page_query(&command.query, corrected);
            return Ok(UnreadOutcome::Redirect {
                location: format!("{rp}/unread?{qs}"),
            });
        }

        let filters = helpers::build_filters(base_url, &filter, &command.query);
        let selected_filter = helpers::selected_filter(&filters);

        Ok(UnreadOutcome::Page(Box::new(UnreadPage {
            title,
            breadcrumbs,
            topics: unread.topics,
            topic_count: unread.topic_count,
            page_count,
            pagination,
            show_select: true,
            show_topic_tools: is_privileged,
            all_categories_url: format!(
                "{base_url}{}",
                query_string::build_query_string(&command.query, "cid", "")
            ),
            selected_category: selection.selected_category,
            selected_cids: selection.selected_cids,
            select_category_label: "[[unread:mark_as_read]]".to_string(),
            select_category_icon: "fa-inbox".to_string(),
            show_category_select_label: true,
            filters,
            selected_filter,
        })))
    }
}
