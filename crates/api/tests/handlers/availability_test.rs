use axum::http::StatusCode;
use interview_core::{
    models::user::{Availability, Role, User},
    timestamp::parse,
};
use interview_db::mock::repositories::MockUserStore;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

/// Candidate and interviewer registered with the given windows
async fn matched_pair(candidate: (&str, &str), interviewer: (&str, &str)) -> TestContext {
    let ctx = TestContext::new();
    let candidate_id = ctx.add_user("Ada", "Candidate").await;
    let interviewer_id = ctx.add_user("Grace", "Interviewer").await;
    ctx.set_availability(candidate_id, candidate.0, candidate.1).await;
    ctx.set_availability(interviewer_id, interviewer.0, interviewer.1).await;
    ctx
}

async fn slots_between(ctx: &TestContext, candidate_id: &str, interviewer_id: &str) -> Value {
    let response = ctx
        .server
        .get("/get-time-slots/")
        .add_query_param("candidate_id", candidate_id)
        .add_query_param("interviewer_id", interviewer_id)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[test_log::test(tokio::test)]
async fn test_two_common_hours() {
    let ctx = matched_pair(
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T12:00:00.000000Z"),
        ("2025-01-26T09:00:00.000000Z", "2025-01-26T11:00:00.000000Z"),
    )
    .await;

    assert_eq!(
        slots_between(&ctx, "1", "2").await,
        json!([
            ["2025-01-26T09:00:00.000000Z", "2025-01-26T10:00:00.000000Z"],
            ["2025-01-26T10:00:00.000000Z", "2025-01-26T11:00:00.000000Z"],
        ])
    );
}

#[tokio::test]
async fn test_trailing_half_hour_is_dropped() {
    let ctx = matched_pair(
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T11:00:00.000000Z"),
        ("2025-01-26T09:30:00.000000Z", "2025-01-26T12:00:00.000000Z"),
    )
    .await;

    assert_eq!(
        slots_between(&ctx, "1", "2").await,
        json!([["2025-01-26T09:30:00.000000Z", "2025-01-26T10:30:00.000000Z"]])
    );
}

#[tokio::test]
async fn test_disjoint_windows_yield_empty_array() {
    let ctx = matched_pair(
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T09:00:00.000000Z"),
        ("2025-01-26T13:00:00.000000Z", "2025-01-26T17:00:00.000000Z"),
    )
    .await;

    assert_eq!(slots_between(&ctx, "1", "2").await, json!([]));
}

#[tokio::test]
async fn test_microseconds_survive_the_round_trip() {
    let ctx = matched_pair(
        ("2025-01-26T08:15:30.123456Z", "2025-01-26T12:00:00.000000Z"),
        ("2025-01-26T07:00:00.000000Z", "2025-01-26T10:00:00.000000Z"),
    )
    .await;

    assert_eq!(
        slots_between(&ctx, "1", "2").await,
        json!([["2025-01-26T08:15:30.123456Z", "2025-01-26T09:15:30.123456Z"]])
    );
}

#[tokio::test]
async fn test_latest_window_replaces_earlier_one() {
    let ctx = matched_pair(
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T12:00:00.000000Z"),
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T12:00:00.000000Z"),
    )
    .await;
    ctx.set_availability(1, "2025-01-26T11:00:00.000000Z", "2025-01-26T15:00:00.000000Z")
        .await;

    assert_eq!(
        slots_between(&ctx, "1", "2").await,
        json!([["2025-01-26T11:00:00.000000Z", "2025-01-26T12:00:00.000000Z"]])
    );
}

#[tokio::test]
async fn test_add_time_slot_confirms() {
    let ctx = TestContext::new();
    let id = ctx.add_user("Ada", "Candidate").await;

    let response = ctx
        .server
        .put(&format!("/add-time-slot/{id}/"))
        .json(&json!({
            "from": "2025-01-26T04:47:36.672Z",
            "to": "2025-01-26T08:47:36.672Z",
        }))
        .await;

    response.assert_status_ok();
    response.assert_text("Time slot added successfully");
}

#[rstest]
#[case::missing_to(json!({ "from": "2025-01-26T08:00:00.000000Z" }), "Invalid slot format")]
#[case::empty_from(json!({ "from": "", "to": "2025-01-26T08:00:00.000000Z" }), "Invalid slot format")]
#[case::no_fraction(
    json!({ "from": "2025-01-26T08:00:00Z", "to": "2025-01-26T09:00:00.000000Z" }),
    "Invalid time format"
)]
#[case::offset_instead_of_z(
    json!({ "from": "2025-01-26T08:00:00.000000Z", "to": "2025-01-26T09:00:00.000000+00:00" }),
    "Invalid time format"
)]
#[case::signed_year(
    json!({ "from": "+262142-12-31T23:30:00.000000Z", "to": "+262142-12-31T23:59:00.000000Z" }),
    "Invalid time format"
)]
#[case::short_year(
    json!({ "from": "25-01-26T08:00:00.000000Z", "to": "2025-01-26T09:00:00.000000Z" }),
    "Invalid time format"
)]
#[case::negative_year(
    json!({ "from": "2025-01-26T08:00:00.000000Z", "to": "-0001-01-26T09:00:00.000000Z" }),
    "Invalid time format"
)]
#[tokio::test]
async fn test_add_time_slot_rejects_bad_windows(#[case] body: Value, #[case] message: &str) {
    let ctx = TestContext::new();
    let id = ctx.add_user("Ada", "Candidate").await;

    let response = ctx
        .server
        .put(&format!("/add-time-slot/{id}/"))
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text(message);
}

#[tokio::test]
async fn test_add_time_slot_unknown_user_is_500() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put("/add-time-slot/99/")
        .json(&json!({
            "from": "2025-01-26T08:00:00.000000Z",
            "to": "2025-01-26T09:00:00.000000Z",
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("User with id 99 does not exist");
}

#[tokio::test]
async fn test_add_time_slot_checks_user_before_body() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put("/add-time-slot/99/")
        .json(&json!({ "from": "soon" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_time_slot_bad_window_is_not_stored() {
    let user = User {
        id: 5,
        name: "Ada".to_string(),
        role: Role::Candidate,
        available_time: None,
    };
    let mut store = MockUserStore::new();
    store
        .expect_get_by_id()
        .with(predicate::eq(5))
        .returning(move |_| Ok(Some(user.clone())));
    store.expect_update_availability().never();
    let ctx = TestContext::with_store(store);

    let response = ctx
        .server
        .put("/add-time-slot/5/")
        .json(&json!({ "from": "2025-01-26T08:00:00.000000Z", "to": "later" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_time_slot_passes_parsed_window_to_store() {
    let expected = Availability::new(
        parse("2025-01-26T08:00:00.5Z").unwrap(),
        parse("2025-01-26T09:00:00.000000Z").unwrap(),
    );
    let mut store = MockUserStore::new();
    store.expect_get_by_id().returning(|id| {
        Ok(Some(User {
            id,
            name: "Ada".to_string(),
            role: Role::Candidate,
            available_time: None,
        }))
    });
    store
        .expect_update_availability()
        .with(predicate::eq(5), predicate::eq(expected))
        .times(1)
        .returning(|_, _| Ok(()));
    let ctx = TestContext::with_store(store);

    let response = ctx
        .server
        .put("/add-time-slot/5/")
        .json(&json!({ "from": "2025-01-26T08:00:00.5Z", "to": "2025-01-26T09:00:00.000000Z" }))
        .await;

    response.assert_status_ok();
}

#[rstest]
#[case::unknown_candidate("42", "2")]
#[case::unknown_interviewer("1", "42")]
#[case::non_numeric_id("abc", "2")]
#[tokio::test]
async fn test_get_time_slots_bad_ids_are_500(
    #[case] candidate_id: &str,
    #[case] interviewer_id: &str,
) {
    let ctx = matched_pair(
        ("2025-01-26T08:00:00.000000Z", "2025-01-26T12:00:00.000000Z"),
        ("2025-01-26T09:00:00.000000Z", "2025-01-26T11:00:00.000000Z"),
    )
    .await;

    let response = ctx
        .server
        .get("/get-time-slots/")
        .add_query_param("candidate_id", candidate_id)
        .add_query_param("interviewer_id", interviewer_id)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_time_slots_missing_params_are_500() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/get-time-slots/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_time_slots_without_availability_is_500() {
    let ctx = TestContext::new();
    let candidate_id = ctx.add_user("Ada", "Candidate").await;
    let interviewer_id = ctx.add_user("Grace", "Interviewer").await;
    ctx.set_availability(candidate_id, "2025-01-26T08:00:00.000000Z", "2025-01-26T12:00:00.000000Z")
        .await;

    let response = ctx
        .server
        .get("/get-time-slots/")
        .add_query_param("candidate_id", candidate_id)
        .add_query_param("interviewer_id", interviewer_id)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text(format!("User with id {interviewer_id} has no available time"));
}

#[tokio::test]
async fn test_get_time_slots_store_failure_is_500() {
    let mut store = MockUserStore::new();
    store
        .expect_get_by_id()
        .returning(|_| Err(eyre::eyre!("pool timed out")));
    let ctx = TestContext::with_store(store);

    let response = ctx
        .server
        .get("/get-time-slots/")
        .add_query_param("candidate_id", 1)
        .add_query_param("interviewer_id", 2)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("pool timed out");
}
