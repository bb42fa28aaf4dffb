// HTTP routes: dashboard page, JSON stats API, version

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::collector::CachedCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<CachedCollector>,
}

pub fn app(collector: Arc<CachedCollector>) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/", get(http::dashboard_handler)) // GET /
        .route("/api/stats", get(http::stats_handler)) // GET /api/stats
        .route("/version", get(http::version_handler)) // GET /version
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
