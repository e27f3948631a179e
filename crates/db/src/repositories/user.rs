use crate::models::DbUser;
use caresync_core::models::user::Role;
use eyre::Result;
use sqlx::{Pool, Postgres, types::Json};

pub async fn create_user(
    pool: &Pool<Postgres>,
    username: &str,
    password_hash: &str,
    roles: &[Role],
) -> Result<DbUser> {
    tracing::debug!("Creating user: username={}, roles={:?}", username, roles);

    let row = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (username, password_hash, roles)
        VALUES ($1, $2, $3)
        RETURNING id, username, password_hash, roles
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(Json(roles))
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_all_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let rows = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, roles
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, roles
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, roles
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_user(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
