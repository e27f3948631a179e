use crate::models::DbAvailability;
use caresync_core::models::availability::AvailableSlot;
use eyre::Result;
use sqlx::{Pool, Postgres, types::Json};

pub async fn create_availability(
    pool: &Pool<Postgres>,
    caregiver_id: i32,
    slots: &[AvailableSlot],
) -> Result<DbAvailability> {
    tracing::debug!(
        "Creating availability: caregiver_id={}, slots={}",
        caregiver_id,
        slots.len()
    );

    let row = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO availabilities (caregiver_id, available_slots)
        VALUES ($1, $2)
        RETURNING id, caregiver_id, available_slots
        "#,
    )
    .bind(caregiver_id)
    .bind(Json(slots))
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_all_availabilities(pool: &Pool<Postgres>) -> Result<Vec<DbAvailability>> {
    let rows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, caregiver_id, available_slots
        FROM availabilities
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_availability_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbAvailability>> {
    let row = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, caregiver_id, available_slots
        FROM availabilities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_availabilities_by_caregiver_id(
    pool: &Pool<Postgres>,
    caregiver_id: i32,
) -> Result<Vec<DbAvailability>> {
    let rows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, caregiver_id, available_slots
        FROM availabilities
        WHERE caregiver_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(caregiver_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn update_availability_slots(
    pool: &Pool<Postgres>,
    id: i32,
    slots: &[AvailableSlot],
) -> Result<Option<DbAvailability>> {
    let row = sqlx::query_as::<_, DbAvailability>(
        r#"
        UPDATE availabilities
        SET available_slots = $2
        WHERE id = $1
        RETURNING id, caregiver_id, available_slots
        "#,
    )
    .bind(id)
    .bind(Json(slots))
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_availability(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM availabilities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
