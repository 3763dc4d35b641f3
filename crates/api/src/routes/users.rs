use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/add-user/", post(handlers::users::add_user))
        .route("/get-users/", get(handlers::users::get_users))
}
