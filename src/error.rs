use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::order::OrderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Order(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(e) = self {
            tracing::error!(error = %e, "Request failed on storage");
        }

        // Storage details stay in the logs.
        let body = match self {
            AppError::Order(e) => e.to_string(),
            AppError::Storage(_) => "internal server error".to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}
