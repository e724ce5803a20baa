//! Validation rules for user input
//!
//! Pure functions over request fields and the current list of users. The
//! store calls them while holding its lock.

use crate::error::{Result, RosterError};
use crate::types::{User, UserId};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Require a non-blank value for `field`
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Check `email` has the shape `local@domain.tld`
pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(RosterError::validation("Invalid email format"));
    }
    Ok(())
}

/// Reject `email` if any user other than `exclude` already holds it
///
/// Comparison is case-sensitive.
pub fn ensure_email_available(users: &[User], email: &str, exclude: Option<UserId>) -> Result<()> {
    let taken = users
        .iter()
        .any(|user| Some(user.id) != exclude && user.email == email);
    if taken {
        return Err(RosterError::validation("Email already exists"));
    }
    Ok(())
}

/// Collapse a blank patch value into "not supplied"
pub fn normalize_patch_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
