use contracts::dashboards::d503_parts::{SpecialOperationRequest, SpecialOperationResult};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiCallError};

/// Margin and objective coverage of a discounted parts sale
pub async fn simulate(
    request: &SpecialOperationRequest,
) -> Result<SpecialOperationResult, ApiCallError> {
    let url = api_url("/api/d503/special_operation");
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiCallError::Rejected(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiCallError::Unavailable(format!("Request failed: {}", e)))?;
    read_json(response).await
}
