use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Datelike;
use serde::Deserialize;

use contracts::shared::period::{Period, PeriodsResponse};
use contracts::shared::view::{DashboardTab, DashboardView};

use super::{failure, no_data, ApiFailure, ApiResult};
use crate::dashboards::build_view;
use crate::shared::sheets::{available_periods, Dataset};
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Explicit period, or the newest one in the data, or the current month.
fn resolve_period(query: &PeriodQuery, dataset: &Dataset) -> Result<Period, ApiFailure> {
    match (query.year, query.month) {
        (Some(year), Some(month)) => {
            let period = Period::new(year, month);
            if period.is_valid() {
                Ok(period)
            } else {
                Err(failure(StatusCode::BAD_REQUEST, format!("Mes inválido: {month}")))
            }
        }
        (None, None) => Ok(available_periods(dataset).default.unwrap_or_else(|| {
            let today = chrono::Local::now().date_naive();
            Period::new(today.year(), today.month())
        })),
        _ => Err(failure(
            StatusCode::BAD_REQUEST,
            "Se requieren año y mes juntos",
        )),
    }
}

/// GET /api/dashboard/periods
pub async fn get_periods(State(state): State<SharedState>) -> ApiResult<PeriodsResponse> {
    match state.dataset().await {
        Ok(dataset) => {
            let periods = available_periods(&dataset);
            tracing::info!("Dashboard: {} periods available", periods.periods.len());
            Ok(Json(periods))
        }
        Err(e) => {
            tracing::error!("Dashboard: failed to load data: {}", e);
            Err(no_data())
        }
    }
}

/// GET /api/dashboard/:tab?year=2025&month=3
pub async fn get_tab(
    State(state): State<SharedState>,
    Path(tab): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<DashboardView> {
    let Some(tab) = DashboardTab::from_slug(&tab) else {
        return Err(failure(StatusCode::NOT_FOUND, format!("Pestaña desconocida: {tab}")));
    };

    let dataset = state.dataset().await.map_err(|e| {
        tracing::error!("Dashboard {}: failed to load data: {}", tab.slug(), e);
        no_data()
    })?;
    let period = resolve_period(&query, &dataset)?;

    tracing::info!(
        "Dashboard {}: building view for {}-{:02}",
        tab.slug(),
        period.year,
        period.month
    );
    Ok(Json(build_view(tab, &dataset, period, &state.config.dashboard)))
}

/// POST /api/dashboard/refresh
pub async fn refresh(State(state): State<SharedState>) -> ApiResult<PeriodsResponse> {
    tracing::info!("Dashboard: cache invalidated on request");
    state.cache.invalidate().await;
    let periods = get_periods(State(state.clone())).await?;
    if let Some(left) = state.cache.expires_in().await {
        tracing::info!("Dashboard: reloaded, next refresh in {}s", left.as_secs());
    }
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::MemorySource;
    use crate::shared::config::test_config;
    use crate::shared::sheets::SheetName;
    use crate::state::AppState;
    use std::sync::Arc;

    const CSV: &str = "FECHA,FACTURACION MO,OBJ FACTURACION MO\n15/02/2025,10,20\n20/03/2025,30,40\n";

    fn state(source: MemorySource) -> SharedState {
        Arc::new(AppState::new(test_config(), Arc::new(source)))
    }

    #[tokio::test]
    async fn test_periods_and_default_tab() {
        let state = state(MemorySource::uniform(CSV));

        let Json(periods) = get_periods(State(state.clone())).await.unwrap();
        assert_eq!(periods.default, Some(Period::new(2025, 3)));

        let Json(view) = get_tab(
            State(state),
            Path("services".to_string()),
            Query(PeriodQuery::default()),
        )
        .await
        .unwrap();
        assert_eq!(view.period, Period::new(2025, 3));
        assert_eq!(view.sections[0].cards[0].value, 30.0);
    }

    #[tokio::test]
    async fn test_refresh_reloads_snapshot() {
        let state = state(MemorySource::uniform(CSV));
        get_periods(State(state.clone())).await.unwrap();

        let Json(periods) = refresh(State(state.clone())).await.unwrap();
        assert_eq!(periods.default, Some(Period::new(2025, 3)));
        assert!(state.cache.expires_in().await.is_some());
    }

    #[tokio::test]
    async fn test_explicit_period() {
        let state = state(MemorySource::uniform(CSV));
        let query = PeriodQuery {
            year: Some(2025),
            month: Some(2),
        };
        let Json(view) = get_tab(State(state), Path("services".to_string()), Query(query))
            .await
            .unwrap();
        assert_eq!(view.sections[0].cards[0].value, 10.0);
    }

    #[tokio::test]
    async fn test_bad_requests() {
        let state = state(MemorySource::uniform(CSV));

        let err = get_tab(State(state.clone()), Path("nope".to_string()), Query(PeriodQuery::default()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);

        let query = PeriodQuery {
            year: Some(2025),
            month: Some(13),
        };
        let err = get_tab(State(state.clone()), Path("parts".to_string()), Query(query))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        let query = PeriodQuery {
            year: Some(2025),
            month: None,
        };
        let err = get_tab(State(state), Path("parts".to_string()), Query(query))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_load_failure_is_503() {
        let state = state(MemorySource::uniform(CSV).failing(SheetName::Calendar));
        let err = get_periods(State(state.clone())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.1.error, super::super::NO_DATA_MESSAGE);

        let err = refresh(State(state)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }
}
