//! # User Handlers
//!
//! Account registration, password login, and basic account administration.
//! Password hashes never appear in a response; every handler answers with
//! [`UserResponse`].

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use caresync_core::{
    errors::CareError,
    models::user::{LoginRequest, NewUser, RegisterRequest, Role, UserResponse},
    validation::validate_registration,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

const USERNAME_TAKEN: &str = "Username is already taken.";
const INVALID_CREDENTIALS: &str = "Invalid username or password.";
const INVALID_LOGIN: &str = "Invalid login data.";

fn not_found(id: i32) -> AppError {
    AppError(CareError::NotFound(format!("User with ID {} not found", id)))
}

/// Registers a new account
///
/// Self-registered accounts always get the `User` role; a `roles` field in the
/// request body is ignored.
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let request = validate_registration(payload.map(|Json(request)| request))
        .inspect_err(|e| warn!("Rejected registration: {}", e))?;
    let username = request.username.trim().to_string();

    if state.users.get_by_username(&username).await?.is_some() {
        return Err(AppError(CareError::Conflict(USERNAME_TAKEN.to_string())));
    }

    let password_hash = auth::hash_password(&request.password)
        .map_err(|e| AppError(CareError::Internal(e.into())))?;

    let user = state
        .users
        .create(NewUser {
            username,
            password_hash,
            roles: vec![Role::User],
        })
        .await?;
    info!("User {} registered as {:?}", user.id, user.roles);

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// Checks a username and password
///
/// Unknown usernames and wrong passwords produce the same 401 response.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    payload: Option<Json<LoginRequest>>,
) -> Result<Json<UserResponse>, AppError> {
    let Some(Json(payload)) = payload else {
        return Err(AppError(CareError::InvalidInput(INVALID_LOGIN.to_string())));
    };
    let invalid = || AppError(CareError::Authentication(INVALID_CREDENTIALS.to_string()));

    let user = state
        .users
        .get_by_username(payload.username.trim())
        .await?
        .ok_or_else(invalid)?;

    let verified = auth::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError(CareError::Internal(e.into())))?;
    if !verified {
        warn!("Failed login for user {}", user.id);
        return Err(invalid());
    }

    Ok(Json(UserResponse::from(user)))
}

#[axum::debug_handler]
pub async fn get_all_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.get_all().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(user.into()))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.users.delete(id).await? {
        return Err(not_found(id));
    }

    info!("User {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
