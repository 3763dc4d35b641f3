//! OpenAPI documentation for the scheduling endpoints.
//!
//! Served as JSON at `/api-docs/openapi.json`.

use interview_core::models::user::{AddUserRequest, Role, TimeSlotRequest, UserSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Interview scheduler API",
        description = "Registers candidates, interviewers and HR staff, records their \
            availability and lists the one-hour slots a candidate and an interviewer share."
    ),
    paths(
        crate::handlers::users::add_user,
        crate::handlers::users::get_users,
        crate::handlers::availability::add_time_slot,
        crate::handlers::availability::get_time_slots,
    ),
    components(schemas(AddUserRequest, TimeSlotRequest, UserSummary, Role)),
    tags(
        (name = "users", description = "Registration and search of users"),
        (name = "availability", description = "Availability windows and slot matching")
    )
)]
pub struct ApiDoc;
