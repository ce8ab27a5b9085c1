use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tower_sessions::session::Error as SessionError;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Session error: {0}")]
    SessionError(String),
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PanelError::SessionError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Session error: {}", e),
            ),
            PanelError::TemplateError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            ),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<SessionError> for PanelError {
    fn from(err: SessionError) -> Self {
        PanelError::SessionError(err.to_string())
    }
}

impl From<tera::Error> for PanelError {
    fn from(err: tera::Error) -> Self {
        PanelError::TemplateError(err.to_string())
    }
}
