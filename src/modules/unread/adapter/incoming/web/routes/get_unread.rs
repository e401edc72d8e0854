use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};

use crate::{
    shared::api::ApiResponse,
    unread::adapter::incoming::web::extractors::Viewer,
    unread::application::{
        domain::entities::{RawQuery, UnreadOutcome, UnreadPage},
        ports::incoming::use_cases::{BuildUnreadPageError, UnreadPageCommand},
    },
    AppState,
};

/// `GET {base}/unread` (and `/` when mounted as home): the rendered HTML
/// page, or a 302 to the corrected page number.
pub async fn unread_page(
    viewer: Viewer,
    req: HttpRequest,
    query: web::Query<RawQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = UnreadPageCommand {
        viewer: viewer.id,
        query: query.into_inner(),
        request_path: req.path().to_string(),
    };

    match data.build_unread_page.execute(command).await {
        Ok(UnreadOutcome::Redirect { location }) => redirect(location),
        Ok(UnreadOutcome::Page(page)) => render_page(&data, &page),
        Err(err) => map_unread_error(err),
    }
}

/// `GET {base}/api/unread`: the same view model as JSON.
pub async fn unread_api(
    viewer: Viewer,
    req: HttpRequest,
    query: web::Query<RawQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = UnreadPageCommand {
        viewer: viewer.id,
        query: query.into_inner(),
        request_path: req.path().to_string(),
    };

    match data.build_unread_page.execute(command).await {
        Ok(UnreadOutcome::Redirect { location }) => redirect(location),
        Ok(UnreadOutcome::Page(page)) => HttpResponse::Ok().json(page),
        Err(err) => map_unread_error(err),
    }
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn render_page(data: &web::Data<AppState>, page: &UnreadPage) -> HttpResponse {
    match data.renderer.render("unread", page) {
        Ok(html) => {
            let mut builder = HttpResponse::Ok();
            builder.content_type("text/html; charset=utf-8");
            for tag in &page.pagination.rel {
                builder.append_header((
                    header::LINK,
                    format!("<{}>; rel=\"{}\"", tag.href, tag.rel),
                ));
            }
            builder.body(html)
        }
        Err(err) => {
            tracing::error!("Rendering the unread page failed: {err}");
            ApiResponse::internal_error()
        }
    }
}

fn map_unread_error(err: BuildUnreadPageError) -> HttpResponse {
    tracing::error!("Unread page request failed: {err}");
    match err {
        BuildUnreadPageError::CategoryLookup(_)
        | BuildUnreadPageError::SettingsLookup(_)
        | BuildUnreadPageError::PrivilegeCheck(_)
        | BuildUnreadPageError::TopicQuery(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use crate::unread::application::{
        domain::entities::{CategorySelection, UnreadOutcome, UnreadPage},
        helpers::Pagination,
        ports::incoming::use_cases::{
            BuildUnreadPageUseCase, GetUnreadTotalError, GetUnreadTotalUseCase,
        },
        ports::outgoing::{PageRenderer, RenderError},
    };
    use crate::unread::application::domain::entities::ViewerId;

    // ============================================================
    // Mock use case and renderer
    // ============================================================

    #[derive(Clone)]
    struct MockBuildUnreadPage {
        result: Result<UnreadOutcome, BuildUnreadPageError>,
    }

    #[async_trait]
    impl BuildUnreadPageUseCase for MockBuildUnreadPage {
        async fn execute(
            &self,
            _command: UnreadPageCommand,
        ) -> Result<UnreadOutcome, BuildUnreadPageError> {
            self.result.clone()
        }
    }

    #[derive(Clone)]
    struct StubUnreadTotal;

    #[async_trait]
    impl GetUnreadTotalUseCase for StubUnreadTotal {
        async fn execute(
            &self,
            _viewer: ViewerId,
            _filter: &str,
        ) -> Result<u64, GetUnreadTotalError> {
            unimplemented!("Not used in page tests")
        }
    }

    struct StubRenderer;

    impl PageRenderer for StubRenderer {
        fn render(&self, view: &str, page: &UnreadPage) -> Result<String, RenderError> {
            Ok(format!("<!-- {view} --><h1>{}</h1>", page.title))
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn sample_page(rel_query: &[(&str, &str)]) -> UnreadPage {
        let query: BTreeMap<String, String> = rel_query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UnreadPage {
            title: "[[pages:unread]]".to_string(),
            breadcrumbs: None,
            topics: Vec::new(),
            topic_count: 5,
            page_count: 2,
            pagination: Pagination::create(1, 2, &query),
            show_select: true,
            show_topic_tools: false,
            all_categories_url: "unread".to_string(),
            selected_category: CategorySelection::all_categories().selected_category,
            selected_cids: Vec::new(),
            select_category_label: "[[unread:mark_as_read]]".to_string(),
            select_category_icon: "fa-inbox".to_string(),
            show_category_select_label: true,
            filters: Vec::new(),
            selected_filter: None,
        }
    }

    fn app_state(result: Result<UnreadOutcome, BuildUnreadPageError>) -> web::Data<AppState> {
        web::Data::new(AppState {
            build_unread_page: Arc::new(MockBuildUnreadPage { result }),
            get_unread_total: Arc::new(StubUnreadTotal),
            renderer: Arc::new(StubRenderer),
        })
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn page_outcome_renders_html_with_link_headers() {
        // Arrange
        let page = sample_page(&[("filter", "new")]);
        let state = app_state(Ok(UnreadOutcome::Page(Box::new(page))));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/unread", web::get().to(unread_page)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/unread")
            .insert_header(("x-forum-uid", "42"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let link = resp.headers().get("link").unwrap().to_str().unwrap();
        assert!(link.contains("rel=\"next\""));

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("[[pages:unread]]"));
    }

    #[actix_web::test]
    async fn redirect_outcome_answers_302_with_location() {
        // Arrange
        let state = app_state(Ok(UnreadOutcome::Redirect {
            location: "/unread?filter=new&page=3".to_string(),
        }));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/unread", web::get().to(unread_page)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/unread?filter=new&page=9")
            .insert_header(("x-forum-uid", "42"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            "/unread?filter=new&page=3"
        );
    }

    #[actix_web::test]
    async fn collaborator_failure_answers_500_envelope() {
        // Arrange
        let state = app_state(Err(BuildUnreadPageError::TopicQuery("db down".to_string())));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/unread", web::get().to(unread_page)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/unread")
            .insert_header(("x-forum-uid", "42"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn missing_viewer_header_is_unauthorized() {
        // Arrange
        let state = app_state(Ok(UnreadOutcome::Page(Box::new(sample_page(&[])))));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/unread", web::get().to(unread_page)),
        )
        .await;

        let req = test::TestRequest::get().uri("/unread").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn api_twin_serves_the_view_model_as_json() {
        // Arrange
        let state = app_state(Ok(UnreadOutcome::Page(Box::new(sample_page(&[])))));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/unread", web::get().to(unread_api)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/unread")
            .insert_header(("x-forum-uid", "42"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "[[pages:unread]]");
        assert_eq!(json["topic_count"], 5);
        assert_eq!(json["page_count"], 2);
    }
}
