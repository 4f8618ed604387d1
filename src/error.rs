use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Request failures. The taxonomy is flat on purpose: apart from the one
/// missing-image case every failure collapses into a 500 with the detail
/// logged server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please upload an image")]
    MissingImage,

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("blocking task error: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("upload error: {0}")]
    Upload(#[from] std::io::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingImage => {
                HttpResponse::BadRequest().json(json!({ "msg": "Please upload an image" }))
            }
            other => {
                log::error!("{}", other);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_renders_a_400_with_the_message() {
        let resp = ApiError::MissingImage.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_render_a_500() {
        let resp = ApiError::Database(diesel::result::Error::NotFound).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
