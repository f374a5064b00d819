use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use contracts::dashboards::d503_parts::{SpecialOperationRequest, SpecialOperationResult};
use contracts::shared::period::Period;

use super::{failure, no_data, ApiResult};
use crate::dashboards::d503_parts::service::month_sales_and_objective;
use crate::dashboards::d503_parts::simulator::simulate;
use crate::state::SharedState;

/// POST /api/d503/special_operation
pub async fn special_operation(
    State(state): State<SharedState>,
    Json(request): Json<SpecialOperationRequest>,
) -> ApiResult<SpecialOperationResult> {
    let period = Period::new(request.year, request.month);
    if !period.is_valid() {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            format!("Mes inválido: {}", request.month),
        ));
    }

    let dataset = state.dataset().await.map_err(|e| {
        tracing::error!("D503 simulator: failed to load data: {}", e);
        no_data()
    })?;

    let (sales, objective) = month_sales_and_objective(&dataset, period);
    let result = simulate(&request, sales, objective, state.config.dashboard.target_margin_pct);
    tracing::info!(
        "D503 simulator: {}-{:02} net sale {} margin {}",
        period.year,
        period.month,
        result.net_sale_text,
        result.margin_pct_text
    );
    Ok(Json(result))
}
