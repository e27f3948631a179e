use axum::http::StatusCode;
use caresync_api::middleware::auth;
use caresync_core::{
    errors::CareError,
    models::user::{NewUser, Role, User, UserResponse},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

fn stored_user(id: i32, username: &str, password: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: auth::hash_password(password).unwrap(),
        roles: vec![Role::User],
    }
}

#[tokio::test]
async fn test_register_hashes_password_and_defaults_role() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_get_by_username()
        .times(1)
        .returning(|_| Ok(None));
    ctx.user_repo
        .expect_create()
        .withf(|user: &NewUser| {
            user.username == "alice"
                && user.password_hash.starts_with("$argon2")
                && user.roles == vec![Role::User]
        })
        .times(1)
        .returning(|user| {
            Ok(User {
                id: 1,
                username: user.username,
                password_hash: user.password_hash,
                roles: user.roles,
            })
        });

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": " alice ", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "id": 1, "username": "alice", "roles": ["User"] }));
}

#[tokio::test]
async fn test_register_ignores_requested_roles() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_get_by_username().returning(|_| Ok(None));
    ctx.user_repo
        .expect_create()
        .withf(|user: &NewUser| user.roles == vec![Role::User])
        .times(1)
        .returning(|user| {
            Ok(User {
                id: 1,
                username: user.username,
                password_hash: user.password_hash,
                roles: user.roles,
            })
        });

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "mallory", "password": "x", "roles": ["Admin", "Caregiver"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["roles"], json!(["User"]));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let mut ctx = TestContext::new();
    ctx.user_repo
        .expect_get_by_username()
        .returning(|username| {
            Ok(Some(User {
                id: 1,
                username: username.to_string(),
                password_hash: "hash".to_string(),
                roles: vec![Role::User],
            }))
        });
    ctx.user_repo.expect_create().times(0);

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"], "Username is already taken.");
}

#[tokio::test]
async fn test_register_race_lost_to_store_constraint() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_get_by_username().returning(|_| Ok(None));
    ctx.user_repo
        .expect_create()
        .times(1)
        .returning(|_| Err(CareError::Conflict("Username is already taken.".to_string())));

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_missing_password() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_get_by_username().times(0);
    ctx.user_repo.expect_create().times(0);

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Password is required.");
}

#[tokio::test]
async fn test_login_success() {
    let mut ctx = TestContext::new();
    let user = stored_user(5, "bob", "correct horse");
    ctx.user_repo
        .expect_get_by_username()
        .times(1)
        .returning(move |_| Ok(Some(user.clone())));

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "bob", "password": "correct horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.id, 5);
    assert_eq!(body.username, "bob");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let mut ctx = TestContext::new();
    let user = stored_user(5, "bob", "correct horse");
    ctx.user_repo
        .expect_get_by_username()
        .returning(move |username| {
            if username == "bob" {
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        });

    let server = ctx.into_server();
    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "username": "bob", "password": "battery staple" }))
        .await;
    let unknown_user = server
        .post("/api/auth/login")
        .json(&json!({ "username": "mallory", "password": "battery staple" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
}

#[tokio::test]
async fn test_login_unreadable_body() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_get_by_username().times(0);

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "bob" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid login data.");
}

#[tokio::test]
async fn test_login_with_corrupt_stored_hash_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_get_by_username().returning(|username| {
        Ok(Some(User {
            id: 9,
            username: username.to_string(),
            password_hash: "not-a-phc-string".to_string(),
            roles: vec![Role::User],
        }))
    });

    let server = ctx.into_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "bob", "password": "pw" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "Internal server error");
}

#[tokio::test]
async fn test_get_user_hides_password_hash() {
    let mut ctx = TestContext::new();
    let user = stored_user(2, "carol", "pw");
    ctx.user_repo
        .expect_get_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let server = ctx.into_server();
    let body: Value = server.get("/api/users/2").await.json();

    assert!(body.get("password_hash").is_none());
    assert!(body.get("passwordHash").is_none());
    assert_eq!(body["username"], "carol");
}

#[tokio::test]
async fn test_delete_user_missing() {
    let mut ctx = TestContext::new();
    ctx.user_repo.expect_delete().returning(|_| Ok(false));

    let server = ctx.into_server();
    let response = server.delete("/api/users/3").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
