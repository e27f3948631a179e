use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use caresync_core::models::availability::{Availability, AvailableSlot, NewAvailability};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

fn slots(count: i64) -> Vec<AvailableSlot> {
    let start = Utc.with_ymd_and_hms(2024, 12, 2, 8, 0, 0).unwrap();
    (0..count)
        .map(|i| AvailableSlot { date: start + Duration::hours(i) })
        .collect()
}

#[tokio::test]
async fn test_add_availability_success() {
    let mut ctx = TestContext::new();
    let requested = NewAvailability {
        caregiver_id: 101,
        available_slots: slots(2),
    };

    ctx.availability_repo
        .expect_create()
        .with(predicate::eq(requested.clone()))
        .times(1)
        .returning(|new| {
            Ok(Availability {
                id: 1,
                caregiver_id: new.caregiver_id,
                available_slots: new.available_slots,
            })
        });

    let server = ctx.into_server();
    let response = server.post("/api/availability").json(&requested).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.header("location"), "/api/availability/1");

    let created: Availability = response.json();
    assert_eq!(created.caregiver_id, 101);
    assert_eq!(created.available_slots.len(), 2);
}

#[tokio::test]
async fn test_add_availability_null_body() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_create().times(0);

    let server = ctx.into_server();
    let response = server.post("/api/availability").json(&Value::Null).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid availability data." })
    );
}

#[tokio::test]
async fn test_add_availability_missing_caregiver() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_create().times(0);

    let server = ctx.into_server();
    let response = server
        .post("/api/availability")
        .json(&json!({ "availableSlots": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "CaregiverId is required.");
}

#[tokio::test]
async fn test_get_all_availabilities() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_get_all().times(1).returning(|| {
        Ok(vec![
            Availability { id: 1, caregiver_id: 101, available_slots: slots(1) },
            Availability { id: 2, caregiver_id: 102, available_slots: slots(1) },
        ])
    });

    let server = ctx.into_server();
    let response = server.get("/api/availability").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Availability>>().len(), 2);
}

#[tokio::test]
async fn test_get_availabilities_by_caregiver_id() {
    let mut ctx = TestContext::new();
    ctx.availability_repo
        .expect_get_by_caregiver_id()
        .with(predicate::eq(101))
        .times(1)
        .returning(|caregiver_id| {
            Ok(vec![Availability { id: 1, caregiver_id, available_slots: slots(1) }])
        });

    let server = ctx.into_server();
    let response = server.get("/api/availability/caregiver/101").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let availabilities: Vec<Availability> = response.json();
    assert_eq!(availabilities.len(), 1);
    assert!(availabilities.iter().all(|a| a.caregiver_id == 101));
}

#[tokio::test]
async fn test_get_availability_not_found() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_get_by_id().returning(|_| Ok(None));

    let server = ctx.into_server();
    let response = server.get("/api/availability/42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_availability_replaces_slots() {
    let mut ctx = TestContext::new();
    let replacement = slots(3);
    let expected = replacement.clone();

    ctx.availability_repo
        .expect_update_slots()
        .with(predicate::eq(7), predicate::eq(expected))
        .times(1)
        .returning(|id, available_slots| {
            Ok(Some(Availability { id, caregiver_id: 101, available_slots }))
        });

    let server = ctx.into_server();
    let response = server
        .put("/api/availability/7")
        .json(&json!({ "availableSlots": replacement }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Availability>().available_slots.len(), 3);
}

#[tokio::test]
async fn test_update_availability_unreadable_body() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_update_slots().times(0);

    let server = ctx.into_server();
    let response = server
        .put("/api/availability/7")
        .json(&json!({ "availableSlots": "tomorrow" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid availability data.");
}

#[tokio::test]
async fn test_delete_availability_when_exists() {
    let mut ctx = TestContext::new();
    ctx.availability_repo
        .expect_get_by_id()
        .with(predicate::eq(1))
        .times(1)
        .returning(|id| Ok(Some(Availability { id, caregiver_id: 101, available_slots: vec![] })));
    ctx.availability_repo
        .expect_delete()
        .with(predicate::eq(1))
        .times(1)
        .returning(|_| Ok(true));

    let server = ctx.into_server();
    let response = server.delete("/api/availability/1").await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_availability_missing() {
    let mut ctx = TestContext::new();
    ctx.availability_repo.expect_get_by_id().returning(|_| Ok(None));
    ctx.availability_repo.expect_delete().times(0);

    let server = ctx.into_server();
    let response = server.delete("/api/availability/9").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
