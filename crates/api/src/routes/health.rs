//! Liveness, readiness and build information.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::ApiState;

#[derive(Debug, Serialize)]
struct ProbeResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "ok" })
}

/// Ready once the store answers a lookup
async fn ready(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<ProbeResponse>) {
    match state.store.get_by_id(0).await {
        Ok(_) => (StatusCode::OK, Json(ProbeResponse { status: "ok" })),
        Err(err) => {
            warn!(error = ?err, "Store is not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(live))
        .route("/health/ready", get(ready))
        .route("/version", get(version))
}
