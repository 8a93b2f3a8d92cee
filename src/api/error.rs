use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::views;
use crate::services::{AuthError, MovieError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Falls back to a bare status when the page itself cannot be rendered.
fn error_page(status: StatusCode, page: &impl Template) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            status.into_response()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                error_page(StatusCode::NOT_FOUND, &views::NotFoundPage)
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, &views::ServerErrorPage)
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, &views::ServerErrorPage)
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::InternalError(format!("Template error: {err}"))
    }
}

impl From<tower_sessions::session::Error> for ApiError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::InternalError(format!("Session error: {err}"))
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(id) => Self::not_found("Movie", id),
            MovieError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(msg) => Self::DatabaseError(msg),
            other => Self::InternalError(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Fallback for every unmatched path.
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found("Path", uri.path())
}
