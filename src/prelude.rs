use askama::Template;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::pkg::server::uispec::NotFound;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(what) => {
                tracing::debug!("not found: {}", what);
                let body = NotFound { what }
                    .render()
                    .unwrap_or_else(|_| "<h1>Not Found</h1>".to_string());
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            AppError::Multipart(e) => {
                tracing::warn!("rejected multipart body: {}", e);
                (e.status(), e.body_text()).into_response()
            }
            _ => {
                tracing::error!("request failed: {}", &self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
