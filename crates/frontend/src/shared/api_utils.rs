//! API utilities for frontend-backend communication

use contracts::shared::view::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Base URL of the backend: same host, port 3000.
///
/// Returns an empty string when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failure of an API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCallError {
    /// Network error or the server could not load its data
    Unavailable(String),
    /// The server rejected the request with a message for the user
    Rejected(String),
}

impl std::fmt::Display for ApiCallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiCallError::Unavailable(msg) | ApiCallError::Rejected(msg) => f.write_str(msg),
        }
    }
}

/// Decode a JSON body, mapping error statuses to `ApiCallError`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiCallError> {
    let status = response.status();
    if !response.ok() {
        let message = response
            .json::<ApiError>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP error: {}", status));
        return Err(classify_status(status, message));
    }

    response
        .json()
        .await
        .map_err(|e| ApiCallError::Unavailable(format!("Failed to parse response: {}", e)))
}

/// 5xx means the backend or its data source is down; anything else is
/// a rejection the user can act on.
pub fn classify_status(status: u16, message: String) -> ApiCallError {
    if status >= 500 {
        ApiCallError::Unavailable(message)
    } else {
        ApiCallError::Rejected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(
            classify_status(503, "x".into()),
            ApiCallError::Unavailable("x".into())
        );
        assert_eq!(
            classify_status(422, "y".into()),
            ApiCallError::Rejected("y".into())
        );
        assert_eq!(ApiCallError::Rejected("z".into()).to_string(), "z");
    }
}
