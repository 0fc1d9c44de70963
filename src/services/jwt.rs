use crate::error::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user_id as string
    pub sub: String,
    /// Email of the token holder
    pub email: String,
    /// Expiration time as Unix timestamp
    pub exp: i64,
    /// Issued at time as Unix timestamp
    pub iat: i64,
}

/// Generates a signed bearer token for a user
///
/// # Arguments
/// * `user_id` - The user's UUID
/// * `email` - The user's email, embedded alongside the id
/// * `secret` - The JWT secret key for signing
/// * `expiration_days` - Token lifetime in days (from config, default 7)
pub fn generate_jwt(user_id: Uuid, email: &str, secret: &str, expiration_days: i64) -> Result<String> {
    let now = Utc::now();
    let expiration = now + Duration::days(expiration_days);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| Error::Internal(format!("Failed to generate JWT: {}", e)))
}

/// Verifies a bearer token and returns the claims if valid
///
/// # Errors
/// Returns `Error::Authentication` if the token is expired, has a bad
/// signature, or is otherwise malformed.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        let error_msg = e.to_string().to_lowercase();
        if error_msg.contains("expired") {
            Error::Authentication("Token has expired".to_string())
        } else if error_msg.contains("signature") {
            Error::Authentication("Invalid token signature".to_string())
        } else {
            Error::Authentication("Invalid token".to_string())
        }
    })?;

    Ok(token_data.claims)
}

/// Extracts the user id from a valid bearer token
pub fn get_user_id_from_token(token: &str, secret: &str) -> Result<Uuid> {
    let claims = verify_jwt(token, secret)?;
    Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::Authentication("Invalid user id in token".to_string()))
}

/// Validates the Authorization header and returns the embedded user id
/// Format: "Authorization: Bearer <token>"
pub fn authenticate_bearer(auth_header: Option<&str>, secret: &str) -> Result<Uuid> {
    let token = extract_token_from_header(auth_header)?;
    get_user_id_from_token(&token, secret)
}

/// Extracts the Bearer token from the Authorization header
fn extract_token_from_header(auth_header: Option<&str>) -> Result<String> {
    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = header[7..].to_string();
            if token.is_empty() {
                return Err(Error::Authentication("Empty token".to_string()));
            }
            Ok(token)
        }
        Some(_) => Err(Error::Authentication(
            "Invalid Authorization header format. Expected: 'Bearer <token>'".to_string(),
        )),
        None => Err(Error::Authentication(
            "Missing Authorization header".to_string(),
        )),
    }
}
