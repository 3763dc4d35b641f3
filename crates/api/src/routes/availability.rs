use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/add-time-slot/:id/",
            put(handlers::availability::add_time_slot),
        )
        .route(
            "/get-time-slots/",
            get(handlers::availability::get_time_slots),
        )
}
