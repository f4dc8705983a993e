// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Wire shape for every failure body: `{ "error": "..." }`.
#[derive(Serialize, Clone, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Successful responses carry the payload bare (no envelope): a single
/// project object for create, a plain array for list.
pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
