use axum::{Json, Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{ApiState, doc::ApiDoc};

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
