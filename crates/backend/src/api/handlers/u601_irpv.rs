use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use contracts::usecases::u601_irpv::IrpvResponse;

use super::{failure, session_id, ApiFailure, ApiResult, SESSION_HEADER};
use crate::state::SharedState;
use crate::usecases::u601_irpv::{process_uploads, IrpvError, Upload};

fn require_session(headers: &HeaderMap) -> Result<String, ApiFailure> {
    session_id(headers).ok_or_else(|| {
        failure(
            StatusCode::BAD_REQUEST,
            format!("Falta el encabezado {SESSION_HEADER}"),
        )
    })
}

/// GET /api/u601/irpv
pub async fn get_table(State(state): State<SharedState>, headers: HeaderMap) -> Json<IrpvResponse> {
    let table = session_id(&headers).and_then(|id| state.sessions.get(&id));
    Json(IrpvResponse { table })
}

/// POST /api/u601/irpv (multipart: `sales`, `workshop`)
pub async fn upload(
    State(state): State<SharedState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<IrpvResponse> {
    let session = require_session(&headers)?;

    let mut sales = None;
    let mut workshop = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("U601: malformed multipart body: {}", e);
        failure(StatusCode::BAD_REQUEST, format!("Carga inválida: {e}"))
    })? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{name}.csv"));
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("U601: failed to read field {}: {}", name, e);
            failure(StatusCode::BAD_REQUEST, format!("Carga inválida: {e}"))
        })?;

        let upload = Upload {
            file_name,
            bytes: bytes.to_vec(),
        };
        match name.as_str() {
            "sales" => sales = Some(upload),
            "workshop" => workshop = Some(upload),
            other => tracing::debug!("U601: ignoring field {}", other),
        }
    }

    let unprocessable = |e: IrpvError| {
        tracing::warn!("U601: {}", e);
        failure(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    };
    let sales = sales.ok_or(IrpvError::MissingUpload("ventas")).map_err(unprocessable)?;
    let workshop = workshop
        .ok_or(IrpvError::MissingUpload("taller"))
        .map_err(unprocessable)?;

    let table = process_uploads(&sales, &workshop, &state.config.irpv).map_err(unprocessable)?;
    tracing::info!(
        "U601: computed IRPV from {} ({} sales) and {} ({} visits), {} lines skipped",
        table.sales_file,
        table.sales_records,
        table.workshop_file,
        table.workshop_records,
        table.skipped_lines
    );

    state.sessions.put(&session, table.clone());
    Ok(Json(IrpvResponse { table: Some(table) }))
}

/// DELETE /api/u601/irpv
pub async fn clear(State(state): State<SharedState>, headers: HeaderMap) -> ApiResult<IrpvResponse> {
    let session = require_session(&headers)?;
    if state.sessions.clear(&session) {
        tracing::info!("U601: cleared IRPV table");
    }
    Ok(Json(IrpvResponse { table: None }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::test_config;
    use crate::shared::sheets::testing::MemorySource;
    use crate::state::AppState;
    use axum::http::HeaderValue;
    use contracts::usecases::u601_irpv::IrpvTable;
    use std::sync::Arc;

    fn headers(id: &'static str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(SESSION_HEADER, HeaderValue::from_static(id));
        h
    }

    fn table() -> IrpvTable {
        IrpvTable {
            rows: Vec::new(),
            sales_file: "ventas.csv".into(),
            workshop_file: "taller.csv".into(),
            sales_records: 1,
            workshop_records: 1,
            skipped_lines: 0,
        }
    }

    #[tokio::test]
    async fn test_get_and_clear_are_session_scoped() {
        let state = Arc::new(AppState::new(test_config(), Arc::new(MemorySource::uniform(""))));
        state.sessions.put("one", table());

        let Json(resp) = get_table(State(state.clone()), headers("one")).await;
        assert!(resp.table.is_some());
        let Json(resp) = get_table(State(state.clone()), headers("two")).await;
        assert!(resp.table.is_none());
        let Json(resp) = get_table(State(state.clone()), HeaderMap::new()).await;
        assert!(resp.table.is_none());

        clear(State(state.clone()), headers("one")).await.unwrap();
        assert!(state.sessions.get("one").is_none());

        let err = clear(State(state), HeaderMap::new()).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
