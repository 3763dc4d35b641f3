use axum::{body::to_bytes, http::StatusCode};
use interview_api::middleware::error_handling::{AppError, map_error};
use interview_core::errors::ScheduleError;
use interview_db::mock::repositories::MockUserStore;
use rstest::rstest;
use serde_json::Value;

use crate::test_utils::TestContext;

#[rstest]
#[case::validation(ScheduleError::Validation("Invalid slot format".into()), StatusCode::BAD_REQUEST)]
#[case::not_found(
    ScheduleError::NotFound("User with id 9 does not exist".into()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case::missing_availability(
    ScheduleError::MissingAvailability("User with id 9 has no available time".into()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case::store(ScheduleError::Store(eyre::eyre!("deadlock detected")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::internal(
    ScheduleError::Internal(Box::new(std::io::Error::other("broken pipe"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: ScheduleError, #[case] expected: StatusCode) {
    assert_eq!(AppError(error).status(), expected);
}

#[tokio::test]
async fn test_error_body_is_plain_message() {
    let response = map_error(ScheduleError::Validation("Invalid time format".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Invalid time format");
}

#[tokio::test]
async fn test_eyre_report_becomes_store_error() {
    let error: AppError = eyre::eyre!("too many connections").into();

    assert!(matches!(error.0, ScheduleError::Store(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_and_version() {
    let ctx = TestContext::new();

    ctx.server.get("/health").await.assert_status_ok();
    ctx.server.get("/health/ready").await.assert_status_ok();

    let version = ctx.server.get("/version").await.json::<Value>();
    assert_eq!(
        version,
        serde_json::json!({ "name": "interview-api", "version": env!("CARGO_PKG_VERSION") })
    );
}

#[tokio::test]
async fn test_ready_reports_unreachable_store() {
    let mut store = MockUserStore::new();
    store
        .expect_get_by_id()
        .returning(|_| Err(eyre::eyre!("connection refused")));
    let ctx = TestContext::with_store(store);

    ctx.server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    ctx.server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let ctx = TestContext::new();

    let doc = ctx.server.get("/api-docs/openapi.json").await.json::<Value>();

    assert!(doc["paths"]["/add-user/"]["post"].is_object());
    assert!(doc["paths"]["/add-time-slot/{id}/"]["put"].is_object());
    assert!(doc["paths"]["/get-time-slots/"]["get"].is_object());
}
