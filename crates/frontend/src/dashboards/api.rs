use contracts::shared::period::{Period, PeriodsResponse};
use contracts::shared::view::{DashboardTab, DashboardView};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiCallError};

const API_BASE: &str = "/api/dashboard";

fn unreachable_backend(e: gloo_net::Error) -> ApiCallError {
    ApiCallError::Unavailable(format!("Request failed: {}", e))
}

/// Periods with data, newest first, plus the default selection
pub async fn get_periods() -> Result<PeriodsResponse, ApiCallError> {
    let url = api_url(&format!("{}/periods", API_BASE));
    let response = Request::get(&url).send().await.map_err(unreachable_backend)?;
    read_json(response).await
}

/// Rendered view of one tab for the given period
pub async fn get_view(tab: DashboardTab, period: Period) -> Result<DashboardView, ApiCallError> {
    let url = api_url(&format!(
        "{}/{}?year={}&month={}",
        API_BASE,
        tab.slug(),
        period.year,
        period.month
    ));
    let response = Request::get(&url).send().await.map_err(unreachable_backend)?;
    read_json(response).await
}

/// Drop the server-side cache and reload the workbook
pub async fn refresh() -> Result<PeriodsResponse, ApiCallError> {
    let url = api_url(&format!("{}/refresh", API_BASE));
    let response = Request::post(&url).send().await.map_err(unreachable_backend)?;
    read_json(response).await
}
