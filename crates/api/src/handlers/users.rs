//! # User Handlers
//!
//! Registration and lookup of candidates, interviewers and HR staff.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use interview_core::models::user::{AddUserRequest, UserSearchQuery, UserSummary};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Registers a user
///
/// # Endpoint
///
/// ```text
/// POST /add-user/
/// {"name": "Ada", "role": "Candidate"}
/// ```
///
/// Answers with a plain-text confirmation carrying the new id.
///
/// # Errors
///
/// * `ScheduleError::Validation` - Missing or empty field, unknown role, name too long
/// * `ScheduleError::Store` - The store rejected the insert
#[utoipa::path(
    post,
    path = "/add-user/",
    tag = "users",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "User added", body = String, content_type = "text/plain",
            example = "User added successfully with id 1"),
        (status = 400, description = "Missing field or invalid role", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn add_user(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload?;
    let new_user = request.validate()?;

    let user = state.store.create(new_user).await?;
    info!(id = user.id, role = %user.role, "User added");

    Ok(format!("User added successfully with id {}", user.id))
}

/// Lists users, optionally filtered by a search term
///
/// # Endpoint
///
/// ```text
/// GET /get-users/?search=interv
/// ```
///
/// The term is matched case-insensitively against both name and role.
#[utoipa::path(
    get,
    path = "/get-users/",
    tag = "users",
    params(UserSearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserSummary>),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_users(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = state.store.list(query.search).await?;
    debug!(count = users.len(), "Listed users");

    Ok(Json(users.iter().map(|user| user.summary()).collect()))
}
