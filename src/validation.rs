//! Client-side field validation.
//!
//! Every check here runs before a request is built, so a rejected form never
//! reaches the network. Inputs are trimmed first; a whitespace-only field
//! counts as empty.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::client::types::{LoginRequest, RecipeInput, RegisterRequest};

/// Shortest password accepted at registration, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Reasons a form is rejected before submission.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("Please fill in all fields.")]
    MissingRegistrationFields,

    #[error("Please enter both a recipe name and source.")]
    MissingRecipeFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long.")]
    PasswordTooShort,
}

/// Checks the `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// `.` somewhere inside the domain part with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
        })
        .is_match(email)
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, ValidationError> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingRegistrationFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_recipe(name: &str, source: &str) -> Result<RecipeInput, ValidationError> {
    let name = name.trim();
    let source = source.trim();

    if name.is_empty() || source.is_empty() {
        return Err(ValidationError::MissingRecipeFields);
    }

    Ok(RecipeInput {
        name: name.to_string(),
        source: source.to_string(),
    })
}
