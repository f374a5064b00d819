use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::state::SharedState;

/// All application routes
pub fn configure_routes(state: SharedState) -> Router {
    let upload_limit = state.config.irpv.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARD TABS
        // ========================================
        .route(
            "/api/dashboard/periods",
            get(handlers::dashboard::get_periods),
        )
        .route(
            "/api/dashboard/refresh",
            post(handlers::dashboard::refresh),
        )
        .route("/api/dashboard/:tab", get(handlers::dashboard::get_tab))
        // D503: special-operation simulator
        .route(
            "/api/d503/special_operation",
            post(handlers::d503_parts::special_operation),
        )
        // ========================================
        // USECASE U601: IRPV calculator
        // ========================================
        .route(
            "/api/u601/irpv",
            get(handlers::u601_irpv::get_table)
                .post(handlers::u601_irpv::upload)
                .delete(handlers::u601_irpv::clear)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
