use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::ConfigError),
    #[error("Export error: {0}")]
    Export(#[from] dashboard::ExportError),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(config_err) => {
                tracing::debug!(error = ?config_err, "Rejected dashboard parameters.");
                (StatusCode::BAD_REQUEST, config_err.to_string())
            }
            AppError::Export(export_err) => {
                tracing::error!(error = ?export_err, "Export error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The summary could not be exported".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
