use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;
use crate::unread::application::domain::entities::ViewerId;

/// The user behind the request. Authentication terminates upstream; the
/// fronting auth layer forwards the resolved user id in `x-forum-uid`.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub id: ViewerId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for Viewer {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let id = req
            .headers()
            .get("x-forum-uid")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(ViewerId::new);

        match id {
            Some(id) => ready(Ok(Viewer { id })),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_VIEWER",
                "Missing or invalid viewer identity",
            )))),
        }
    }
}
