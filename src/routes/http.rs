// GET handlers: dashboard, api/stats, version

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::AppState;

const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// GET / — static dashboard page; it polls /api/stats from the browser.
pub(super) async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /api/stats — fresh metrics for every running container, or 500 with the error text.
pub(super) async fn stats_handler(State(state): State<AppState>) -> Response {
    match state.collector.collect().await {
        Ok(batch) => axum::Json(batch).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "api_stats", "collect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
