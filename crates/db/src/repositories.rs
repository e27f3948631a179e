pub mod appointment;
pub mod availability;
pub mod feedback;
pub mod user;

/// Whether `err` wraps a Postgres unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &eyre::Report) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => {
            db_err.code().map(|code| code == "23505").unwrap_or(false)
        }
        _ => false,
    }
}
