//! JWT authentication middleware
//!
//! Validates the bearer token on every protected request and threads the
//! resolved acting user through request extensions as an immutable value.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::users::User,
    queries,
    services::jwt::authenticate_bearer,
    state::AppState,
};

use secrecy::ExposeSecret;

/// Authenticated user extracted from the bearer token
///
/// Added to request extensions by the JWT middleware after successful
/// validation; handlers receive it via `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub id: Uuid,
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// JWT authentication middleware
///
/// # Behavior
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Validates the signature and expiration
/// 3. Loads the user row by id; a token for a deleted account is rejected
/// 4. Adds `AuthenticatedUser` to request extensions
/// 5. Returns 401 if the token is invalid, expired, or missing
///
/// Apply to protected routes with `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/resumes", get(list_resumes))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         jwt_auth_middleware,
///     ))
/// ```
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    let user_id = authenticate_bearer(auth_header, state.config.jwt.secret.expose_secret())?;

    let user = {
        let mut conn = state.pool.acquire().await?;
        queries::users::get_user_by_id(&mut conn, user_id)
            .await?
            .ok_or_else(|| Error::Authentication("User not found".to_string()))?
    };

    request.extensions_mut().insert(AuthenticatedUser::from(user));
    Ok(next.run(request).await)
}
