//! Input validation utilities for the service layer.

use crate::error::{Error, Result};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates email format
///
/// # Arguments
/// * `email` - The email address to validate
///
/// # Returns
/// * `Ok(())` if the email is valid
/// * `Err(Error)` with descriptive message if invalid
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::Validation("Email cannot be empty".to_string()));
    }

    if email.len() > 254 {
        return Err(Error::Validation(
            "Email address is too long (max 254 characters)".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(Error::Validation(
            "Invalid email format: must contain exactly one @ symbol".to_string(),
        ));
    }

    let (local_part, domain) = (parts[0], parts[1]);

    if local_part.is_empty() {
        return Err(Error::Validation(
            "Invalid email format: local part cannot be empty".to_string(),
        ));
    }

    if domain.is_empty() || !domain.contains('.') {
        return Err(Error::Validation(
            "Invalid email format: domain must contain at least one dot".to_string(),
        ));
    }

    if email.contains("..") {
        return Err(Error::Validation(
            "Invalid email format: cannot contain consecutive dots".to_string(),
        ));
    }

    if email.contains(' ') {
        return Err(Error::Validation(
            "Invalid email format: cannot contain spaces".to_string(),
        ));
    }

    Ok(())
}

/// Validates password length
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if password.len() > 128 {
        return Err(Error::Validation(
            "Password is too long (max 128 characters)".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a string is not empty after trimming
///
/// # Arguments
/// * `input` - The input string to validate
/// * `field_name` - Name of the field for error messages
///
/// # Returns
/// * `Ok(String)` with the trimmed string
/// * `Err(Error)` if empty after trimming
pub fn validate_required_string(input: &str, field_name: &str) -> Result<String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field_name)));
    }

    Ok(trimmed.to_string())
}
