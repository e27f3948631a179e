use axum::http::StatusCode;
use caresync_core::models::feedback::{Feedback, NewFeedback};
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_create_feedback_success() {
    let mut ctx = TestContext::new();
    let submitted = NewFeedback {
        appointment_id: 12,
        patient_id: 3,
        comment: "Very kind and on time".to_string(),
    };

    ctx.feedback_repo
        .expect_create()
        .with(predicate::eq(submitted.clone()))
        .times(1)
        .returning(|new| {
            Ok(Feedback {
                id: 1,
                appointment_id: new.appointment_id,
                patient_id: new.patient_id,
                comment: new.comment,
            })
        });

    let server = ctx.into_server();
    let response = server.post("/api/feedback").json(&submitted).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Feedback>().comment, "Very kind and on time");
}

#[rstest]
#[case(json!(null), "Invalid feedback data.")]
#[case(json!({ "patientId": 3, "comment": "ok" }), "AppointmentId is required.")]
#[case(json!({ "appointmentId": 12, "comment": "ok" }), "PatientId is required.")]
#[case(json!({ "appointmentId": 12, "patientId": 3, "comment": "" }), "Comment is required.")]
#[tokio::test]
async fn test_create_feedback_rejected(#[case] body: Value, #[case] message: &str) {
    let mut ctx = TestContext::new();
    ctx.feedback_repo.expect_create().times(0);

    let server = ctx.into_server();
    let response = server.post("/api/feedback").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], message);
}

#[tokio::test]
async fn test_feedback_by_appointment() {
    let mut ctx = TestContext::new();
    ctx.feedback_repo
        .expect_get_by_appointment_id()
        .with(predicate::eq(12))
        .times(1)
        .returning(|appointment_id| {
            Ok(vec![Feedback {
                id: 1,
                appointment_id,
                patient_id: 3,
                comment: "Great".to_string(),
            }])
        });

    let server = ctx.into_server();
    let feedback: Vec<Feedback> = server.get("/api/feedback/appointment/12").await.json();

    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].appointment_id, 12);
}

#[tokio::test]
async fn test_delete_feedback_missing() {
    let mut ctx = TestContext::new();
    ctx.feedback_repo.expect_delete().returning(|_| Ok(false));

    let server = ctx.into_server();
    let response = server.delete("/api/feedback/8").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
