//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unsupported database url: {0}")]
    UnsupportedDatabase(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    /// Structured application error carrying its own status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl AppError {
    pub fn not_found(label: &str) -> Self {
        AppError::NotFound(format!("{} not found", label))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Api { status, .. } => *status,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Constraint violations become conflicts; everything else stays a database error.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AppError::Conflict(format!("already exists: {}", db.message()));
            }
            if db.is_foreign_key_violation() {
                return AppError::Conflict(format!("referenced row does not exist: {}", db.message()));
            }
            if db.is_check_violation() {
                return AppError::Validation(format!("constraint violated: {}", db.message()));
            }
        }
        AppError::Db(e)
    }
}

/// Keeps the extractor's status: 400 for bad syntax, 413 past the body limit, 415 without a JSON content type.
impl From<JsonRejection> for AppError {
    fn from(r: JsonRejection) -> Self {
        AppError::Api {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_resource() {
        let e = AppError::not_found("Planet");
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(e.to_string(), "Planet not found");
    }

    #[test]
    fn api_error_keeps_its_status() {
        let e = AppError::Api {
            status: StatusCode::IM_A_TEAPOT,
            message: "short and stout".into(),
        };
        assert_eq!(e.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(e.into_response().status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn row_not_found_is_internal() {
        let e: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
