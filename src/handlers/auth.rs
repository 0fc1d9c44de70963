//! Registration and login handlers
//!
//! Handlers follow the thin-layer pattern: they validate nothing themselves,
//! delegate to the service layer, and shape the response. Both endpoints
//! return a bearer token plus the public user object.

use axum::{Json, extract::State, http::StatusCode};
use secrecy::ExposeSecret;

use crate::{
    error::Result,
    models::users::{LoginUser, PublicUser, RegisterUser},
    services::{jwt::generate_jwt, users},
    state::AppState,
};

/// POST /api/auth/register
///
/// Registers a new user with name, email, and password.
///
/// # HTTP Status Codes
/// - `201 CREATED`: User registered; body carries token + user
/// - `400 BAD_REQUEST`: Validation error or duplicate email
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterUser>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await?;

    let user = users::register_user(&mut conn, request).await?;

    let token = generate_jwt(
        user.id,
        &user.email,
        state.config.jwt.secret.expose_secret(),
        state.config.jwt.expiration_days,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User registered successfully",
            "token": token,
            "user": PublicUser::from(user),
        })),
    ))
}

/// POST /api/auth/login
///
/// Authenticates a user with email and password.
///
/// # HTTP Status Codes
/// - `200 OK`: Authentication successful; body carries token + user
/// - `400 BAD_REQUEST`: Missing email or password
/// - `401 UNAUTHORIZED`: Invalid email or password
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await?;

    let user = users::login_user(&mut conn, request).await?;

    let token = generate_jwt(
        user.id,
        &user.email,
        state.config.jwt.secret.expose_secret(),
        state.config.jwt.expiration_days,
    )?;

    Ok(Json(serde_json::json!({
        "message": "Login successful",
        "token": token,
        "user": PublicUser::from(user),
    })))
}
