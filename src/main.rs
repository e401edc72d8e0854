pub mod config;
pub mod modules;
pub use modules::unread;
pub mod health;
pub mod shared;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use chrono::{Duration, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SiteConfig;
use crate::unread::adapter::incoming::web::routes;
use crate::unread::adapter::outgoing::in_memory::{
    CategoryRecord, InMemoryCategoryDirectory, InMemoryPrivilegeRoster, InMemorySettingsStore,
    InMemoryTopicStore, UnreadRecord,
};
use crate::unread::adapter::outgoing::MaudPageRenderer;
use crate::unread::application::domain::entities::{TopicSummary, UserSettings};
use crate::unread::application::ports::incoming::use_cases::{
    BuildUnreadPageUseCase, GetUnreadTotalUseCase,
};
use crate::unread::application::ports::outgoing::PageRenderer;
use crate::unread::application::services::{BuildUnreadPageService, UnreadTotalService};

#[derive(Clone)]
pub struct AppState {
    pub build_unread_page: Arc<dyn BuildUnreadPageUseCase + Send + Sync>,
    pub get_unread_total: Arc<dyn GetUnreadTotalUseCase + Send + Sync>,
    pub renderer: Arc<dyn PageRenderer + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let site = SiteConfig::from_env();

    // Demo wiring. Real deployments put the forum subsystems (settings
    // store, category tree, privileges, topic unread view) behind these
    // same ports.
    let settings = InMemorySettingsStore::new(UserSettings {
        topics_per_page: 20,
        use_pagination: true,
    });
    let categories = InMemoryCategoryDirectory::new(vec![
        CategoryRecord {
            cid: 1,
            name: "Announcements".to_string(),
            icon: "fa-bullhorn".to_string(),
        },
        CategoryRecord {
            cid: 2,
            name: "General Discussion".to_string(),
            icon: "fa-comments".to_string(),
        },
    ]);
    let privileges = InMemoryPrivilegeRoster::new([1]);
    let topics = InMemoryTopicStore::new(demo_topics());

    let state = AppState {
        build_unread_page: Arc::new(BuildUnreadPageService::new(
            categories,
            settings,
            privileges,
            topics.clone(),
            site.clone(),
        )),
        get_unread_total: Arc::new(UnreadTotalService::new(topics)),
        renderer: Arc::new(MaudPageRenderer),
    };

    let server_url = format!("{host}:{port}");
    info!("Listening on {server_url}");

    HttpServer::new(move || {
        let site = site.clone();
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .service(health::health);

        if site.relative_path.is_empty() {
            app.configure(|cfg| routes::configure(cfg, &site))
        } else {
            let prefix = site.relative_path.clone();
            app.service(web::scope(&prefix).configure(|cfg| routes::configure(cfg, &site)))
        }
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn demo_topics() -> Vec<UnreadRecord> {
    let topic = |tid: i64, cid: i64, title: &str, hours_ago: i64| TopicSummary {
        tid,
        cid,
        title: title.to_string(),
        slug: format!("{tid}/{}", title.to_lowercase().replace(' ', "-")),
        post_count: 3,
        last_post_time: Utc::now() - Duration::hours(hours_ago),
    };

    vec![
        UnreadRecord {
            viewer: 1,
            topic: topic(101, 1, "Forum maintenance window", 2),
            recent: true,
            watched: true,
            unreplied: false,
        },
        UnreadRecord {
            viewer: 1,
            topic: topic(102, 2, "Introductions thread", 30),
            recent: false,
            watched: false,
            unreplied: true,
        },
    ]
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
