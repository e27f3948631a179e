use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/register", post(handlers::user::register))
        .route("/api/auth/login", post(handlers::user::login))
        .route("/api/users", get(handlers::user::get_all_users))
        .route(
            "/api/users/:id",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
}
