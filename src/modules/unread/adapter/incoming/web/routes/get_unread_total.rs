use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{shared::api::ApiResponse, unread::adapter::incoming::web::extractors::Viewer, AppState};

#[derive(Debug, Deserialize)]
pub struct UnreadTotalQuery {
    #[serde(default)]
    filter: String,
}

/// `GET {base}/unread/total`: bare JSON integer.
pub async fn unread_total(
    viewer: Viewer,
    query: web::Query<UnreadTotalQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_unread_total.execute(viewer.id, &query.filter).await {
        Ok(total) => HttpResponse::Ok().json(total),
        Err(err) => {
            tracing::error!("Unread total request failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
