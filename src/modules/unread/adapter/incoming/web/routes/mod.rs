mod get_unread;
mod get_unread_total;

use actix_web::web;

use crate::config::SiteConfig;

pub use get_unread::{unread_api, unread_page};
pub use get_unread_total::unread_total;

/// Mounts the unread routes. When the site's home route is `unread`, the
/// same page handler also serves `/`, which flips its title/breadcrumb
/// behavior via path detection.
pub fn configure(cfg: &mut web::ServiceConfig, config: &SiteConfig) {
    cfg.route("/unread", web::get().to(unread_page));
    cfg.route("/unread/total", web::get().to(unread_total));
    cfg.route("/api/unread", web::get().to(unread_api));

    if config.home_page_route == "unread" {
        cfg.route("/", web::get().to(unread_page));
    }
}
