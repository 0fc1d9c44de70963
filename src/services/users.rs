use crate::{
    database::DbConn,
    error::{Error, Result},
    models::users::{LoginUser, NewUser, RegisterUser, User},
    queries::users,
    validation::{validate_email, validate_password, validate_required_string},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Registers a new user with input validation and Argon2 password hashing.
///
/// The duplicate-email check runs before the insert; the UNIQUE constraint
/// still backstops a race between two concurrent registrations.
pub async fn register_user(conn: &mut DbConn, payload: RegisterUser) -> Result<User> {
    let name = validate_required_string(payload.name.as_deref().unwrap_or(""), "Name")?;
    let email = validate_required_string(payload.email.as_deref().unwrap_or(""), "Email")?;
    let password = payload.password.unwrap_or_default();

    validate_email(&email)?;
    validate_password(&password)?;

    let email = email.to_lowercase();

    if users::get_user_by_email(conn, &email).await?.is_some() {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let new_user = NewUser {
        name,
        email,
        password_hash,
    };

    let user = users::create_user(conn, new_user).await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok(user)
}

/// Authenticates a user by email and password.
///
/// Unknown email and wrong password return the same message so that the
/// endpoint cannot be used to probe which addresses have accounts.
pub async fn login_user(conn: &mut DbConn, payload: LoginUser) -> Result<User> {
    let email = validate_required_string(payload.email.as_deref().unwrap_or(""), "Email")?;
    let password = payload.password.unwrap_or_default();
    if password.is_empty() {
        return Err(Error::Validation("Password is required".to_string()));
    }

    let user = users::get_user_by_email(conn, &email.to_lowercase())
        .await?
        .ok_or_else(|| Error::Authentication("Invalid email or password".to_string()))?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(Error::Authentication("Invalid email or password".to_string()));
    }

    Ok(user)
}

/// Verifies a password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
