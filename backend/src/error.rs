use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shared::ConfigError;

#[derive(Debug)]
pub enum Error {
    Database,
    NotFound(String),
    InvalidConfig(ConfigError),
    BadRequest(String),
    Export,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {}", err);
        Error::Database
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::InvalidConfig(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("export serialisation failed: {}", err);
        Error::Export
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Database => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            Error::InvalidConfig(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Error::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Error::Export => (StatusCode::INTERNAL_SERVER_ERROR, "Export failed".to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
