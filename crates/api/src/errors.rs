//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use stockroom_shared::AppError;
use tracing::error;

/// Error returned by handlers.
///
/// Anything convertible into [`AppError`] converts into this, so handlers can
/// use `?` on repository and domain results directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_internal() {
            error!(error = %self.0, "request failed");
            return json_error(status, self.0.error_code(), "An internal error occurred");
        }

        json_error(status, self.0.error_code(), self.0.to_string())
    }
}

/// Builds an `{ "error": code, "message": message }` response.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
