use crate::models::DbFeedback;
use caresync_core::models::feedback::NewFeedback;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_feedback(pool: &Pool<Postgres>, feedback: &NewFeedback) -> Result<DbFeedback> {
    let row = sqlx::query_as::<_, DbFeedback>(
        r#"
        INSERT INTO feedbacks (appointment_id, patient_id, comment)
        VALUES ($1, $2, $3)
        RETURNING id, appointment_id, patient_id, comment
        "#,
    )
    .bind(feedback.appointment_id)
    .bind(feedback.patient_id)
    .bind(&feedback.comment)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Feedback created: id={}, appointment_id={}", row.id, row.appointment_id);
    Ok(row)
}

pub async fn get_all_feedback(pool: &Pool<Postgres>) -> Result<Vec<DbFeedback>> {
    let rows = sqlx::query_as::<_, DbFeedback>(
        r#"
        SELECT id, appointment_id, patient_id, comment
        FROM feedbacks
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_feedback_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbFeedback>> {
    let row = sqlx::query_as::<_, DbFeedback>(
        r#"
        SELECT id, appointment_id, patient_id, comment
        FROM feedbacks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_feedback_by_appointment_id(
    pool: &Pool<Postgres>,
    appointment_id: i32,
) -> Result<Vec<DbFeedback>> {
    let rows = sqlx::query_as::<_, DbFeedback>(
        r#"
        SELECT id, appointment_id, patient_id, comment
        FROM feedbacks
        WHERE appointment_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(appointment_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_feedback(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM feedbacks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
