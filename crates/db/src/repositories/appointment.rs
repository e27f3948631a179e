use crate::models::DbAppointment;
use caresync_core::models::appointment::{AppointmentStatus, NewAppointment};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: caregiver_id={}, patient_id={}, date_time={}",
        appointment.caregiver_id, appointment.patient_id, appointment.date_time
    );

    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (patient_id, caregiver_id, date_time, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id, patient_id, caregiver_id, date_time, status
        "#,
    )
    .bind(appointment.patient_id)
    .bind(appointment.caregiver_id)
    .bind(appointment.date_time)
    .bind(appointment.status.code())
    .fetch_one(pool)
    .await?;

    tracing::debug!("Appointment created successfully: id={}", row.id);
    Ok(row)
}

pub async fn get_all_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, patient_id, caregiver_id, date_time, status
        FROM appointments
        ORDER BY date_time ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_appointment_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbAppointment>> {
    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, patient_id, caregiver_id, date_time, status
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_appointments_by_caregiver_id(
    pool: &Pool<Postgres>,
    caregiver_id: i32,
) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, patient_id, caregiver_id, date_time, status
        FROM appointments
        WHERE caregiver_id = $1
        ORDER BY date_time ASC
        "#,
    )
    .bind(caregiver_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_appointments_by_patient_id(
    pool: &Pool<Postgres>,
    patient_id: i32,
) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, patient_id, caregiver_id, date_time, status
        FROM appointments
        WHERE patient_id = $1
        ORDER BY date_time ASC
        "#,
    )
    .bind(patient_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: i32,
    status: AppointmentStatus,
) -> Result<Option<DbAppointment>> {
    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1
        RETURNING id, patient_id, caregiver_id, date_time, status
        "#,
    )
    .bind(id)
    .bind(status.code())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_appointment(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
