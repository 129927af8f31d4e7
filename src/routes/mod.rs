//! HTTP handlers and the service-error to response mapping.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

pub mod auth;
pub mod leads;
pub mod properties;

/// Machine-readable error body. The `error` field carries failure detail and
/// is only populated when the server runs with `development = true`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

/// Maps a [`ServiceError`] to its HTTP response.
///
/// Validation failures echo their message; unavailable and unknown failures
/// are logged in full server-side and reported generically unless the
/// development flag is set.
pub fn error_response(err: &ServiceError, development: bool) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("Not found")),
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Unauthorized"))
        }
        ServiceError::Unavailable(detail) => {
            log::error!("Data store unavailable: {detail}");
            let mut body = ErrorBody::new("Service temporarily unavailable");
            if development {
                body.error = Some(detail.clone());
            }
            HttpResponse::BadGateway().json(body)
        }
        ServiceError::Internal(detail) => {
            log::error!("Internal error: {detail}");
            let mut body = ErrorBody::new("Internal server error");
            if development {
                body.error = Some(detail.clone());
            }
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Default handler for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Route not found"))
}

#[actix_web::get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Property API is running")
}
