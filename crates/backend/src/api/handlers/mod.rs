pub mod d503_parts;
pub mod dashboard;
pub mod u601_irpv;

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use contracts::shared::view::ApiError;

/// Error half of every handler result: status plus `{"error": ...}`
pub type ApiFailure = (StatusCode, Json<ApiError>);
pub type ApiResult<T> = Result<Json<T>, ApiFailure>;

/// Header carrying the browser session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Generic message for any data-loading failure; details go to the log.
pub const NO_DATA_MESSAGE: &str = "No se pudieron cargar los datos. Verifique la conexión e intente nuevamente.";

pub fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (status, Json(ApiError::new(message)))
}

pub fn no_data() -> ApiFailure {
    failure(StatusCode::SERVICE_UNAVAILABLE, NO_DATA_MESSAGE)
}

/// Non-empty session id from the request headers
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.len() <= 128)
        .map(str::to_string)
}
