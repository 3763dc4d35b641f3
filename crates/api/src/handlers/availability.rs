//! # Availability Handlers
//!
//! Recording a user's availability window and matching a candidate with an
//! interviewer.
//!
//! ## Matching
//!
//! Each user holds at most one window. The lookup takes the candidate's and
//! the interviewer's windows, intersects them and splits the intersection
//! into whole hours starting at its beginning (see
//! [`interview_core::slots::overlapping_slots`]). An overlap of 90 minutes
//! yields one slot; the remaining half hour is dropped.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use interview_core::{
    errors::ScheduleError,
    models::user::{TimeSlotRequest, TimeSlotsQuery, User},
    slots::{Slot, overlapping_slots},
};
use interview_db::UserStore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Replaces a user's availability window
///
/// # Endpoint
///
/// ```text
/// PUT /add-time-slot/{id}/
/// {"from": "2025-01-26T08:00:00.000000Z", "to": "2025-01-26T12:00:00.000000Z"}
/// ```
///
/// The user is looked up before the body is examined, so an unknown id wins
/// over a malformed body.
///
/// # Errors
///
/// * `ScheduleError::NotFound` - No user with this id (answered with 500)
/// * `ScheduleError::Validation` - Missing bound (`Invalid slot format`) or
///   a bound not in `YYYY-MM-DDTHH:MM:SS.ffffffZ` (`Invalid time format`)
/// * `ScheduleError::Store` - The store rejected the update
#[utoipa::path(
    put,
    path = "/add-time-slot/{id}/",
    tag = "availability",
    params(("id" = i64, Path, description = "Id of the user")),
    request_body = TimeSlotRequest,
    responses(
        (status = 200, description = "Availability replaced", body = String, content_type = "text/plain",
            example = "Time slot added successfully"),
        (status = 400, description = "Missing or malformed bound", body = String, content_type = "text/plain"),
        (status = 500, description = "Unknown user or store failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn add_time_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    payload: Result<Json<TimeSlotRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let user = find_user(state.store.as_ref(), id).await?;

    let Json(request) = payload?;
    let availability = request.validate()?;

    state.store.update_availability(user.id, availability).await?;
    info!(id = user.id, from = %availability.from, to = %availability.to, "Availability replaced");

    Ok("Time slot added successfully".to_string())
}

/// Lists the one-hour slots in which a candidate and an interviewer are both
/// available
///
/// # Endpoint
///
/// ```text
/// GET /get-time-slots/?candidate_id=1&interviewer_id=2
/// ```
///
/// Answers with a JSON array of `[from, to]` pairs.
///
/// # Errors
///
/// Every failure is answered with 500:
///
/// * `ScheduleError::NotFound` - An id is missing, not a number, or unknown
/// * `ScheduleError::MissingAvailability` - A user never recorded a window
/// * `ScheduleError::Store` - The store failed
#[utoipa::path(
    get,
    path = "/get-time-slots/",
    tag = "availability",
    params(TimeSlotsQuery),
    responses(
        (status = 200, description = "Common one-hour slots as [from, to] pairs", body = Vec<Vec<String>>,
            example = json!([["2025-01-26T09:00:00.000000Z", "2025-01-26T10:00:00.000000Z"]])),
        (status = 500, description = "Unknown user, missing availability or store failure",
            body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_time_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TimeSlotsQuery>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let store = state.store.as_ref();
    let candidate = find_user_by_param(store, "candidate_id", query.candidate_id.as_deref()).await?;
    let interviewer =
        find_user_by_param(store, "interviewer_id", query.interviewer_id.as_deref()).await?;

    let candidate_time = candidate.available_time.ok_or_else(|| no_availability(&candidate))?;
    let interviewer_time = interviewer
        .available_time
        .ok_or_else(|| no_availability(&interviewer))?;

    let slots = overlapping_slots(&candidate_time, &interviewer_time);
    debug!(
        candidate = candidate.id,
        interviewer = interviewer.id,
        count = slots.len(),
        "Matched availability"
    );

    Ok(Json(slots))
}

async fn find_user(store: &dyn UserStore, id: i64) -> Result<User, ScheduleError> {
    store
        .get_by_id(id)
        .await?
        .ok_or_else(|| ScheduleError::NotFound(format!("User with id {id} does not exist")))
}

async fn find_user_by_param(
    store: &dyn UserStore,
    param: &str,
    raw: Option<&str>,
) -> Result<User, ScheduleError> {
    let id = raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .ok_or_else(|| {
            ScheduleError::NotFound(format!(
                "No user matches {param}={}",
                raw.unwrap_or_default()
            ))
        })?;

    find_user(store, id).await
}

fn no_availability(user: &User) -> ScheduleError {
    ScheduleError::MissingAvailability(format!(
        "User with id {} has no available time",
        user.id
    ))
}
