use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id SERIAL PRIMARY KEY,
            patient_id INTEGER NOT NULL,
            caregiver_id INTEGER NOT NULL,
            date_time TIMESTAMP WITH TIME ZONE NOT NULL,
            status INTEGER NOT NULL DEFAULT 0,
            CONSTRAINT positive_ids CHECK (patient_id > 0 AND caregiver_id > 0),
            CONSTRAINT known_status CHECK (status IN (0, 1, 2))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availabilities table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availabilities (
            id SERIAL PRIMARY KEY,
            caregiver_id INTEGER NOT NULL,
            available_slots JSONB NOT NULL DEFAULT '[]'::jsonb
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create feedbacks table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedbacks (
            id SERIAL PRIMARY KEY,
            appointment_id INTEGER NOT NULL,
            patient_id INTEGER NOT NULL,
            comment TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username VARCHAR(50) NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            roles JSONB NOT NULL DEFAULT '[]'::jsonb
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One live appointment per caregiver and time; cancelled rows (status 2) free the slot
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS uq_appointments_caregiver_slot
            ON appointments(caregiver_id, date_time)
            WHERE status <> 2;
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query since prepared statements take a single command
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_appointments_caregiver_id ON appointments(caregiver_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_patient_id ON appointments(patient_id)",
        "CREATE INDEX IF NOT EXISTS idx_availabilities_caregiver_id ON availabilities(caregiver_id)",
        "CREATE INDEX IF NOT EXISTS idx_feedbacks_appointment_id ON feedbacks(appointment_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
