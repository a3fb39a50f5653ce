//! User signup and login endpoints
//!
//! Passwords are bcrypt-hashed on signup and verified on login; the raw
//! credential never reaches the database. Login failure is the same 401
//! whether the username is unknown or the password is wrong.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Signup request
#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: &'static str,
    pub user_id: i64,
    pub username: String,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserInfo,
}

/// Public view of a user row. Never carries the password column.
#[derive(Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

/// Treat missing and empty the same way, matching the original
/// falsy-field validation.
fn required(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// POST /users/signup - create an account
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        required(req.username.as_ref()),
        required(req.email.as_ref()),
        required(req.password.as_ref()),
    ) else {
        return Err(ApiError::Validation(
            "username, email, and password are required",
        ));
    };

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user_id = UserRepo::new(state.pool())
        .create(username, email, &password_hash)
        .await?;

    tracing::info!(user_id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully",
            user_id,
            username: username.to_owned(),
        }),
    ))
}

/// POST /users/login - verify credentials
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (
        required(req.username.as_ref()),
        required(req.password.as_ref()),
    ) else {
        return Err(ApiError::Validation("username and password are required"));
    };

    let user = UserRepo::new(state.pool())
        .find_by_username(username)
        .await?
        .ok_or(ApiError::Unauthorized("Invalid username or password"))?;

    if !bcrypt::verify(password, &user.password)? {
        return Err(ApiError::Unauthorized("Invalid username or password"));
    }

    Ok(Json(LoginResponse {
        message: "Login successful",
        user: UserInfo::from(user),
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
}
