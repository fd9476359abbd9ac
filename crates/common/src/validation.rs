//! Username validation shared by the account and message domains

use regex::Regex;

use crate::{Error, Result};

/// Maximum username length in characters
pub const MAX_USERNAME_LENGTH: usize = 64;

lazy_static::lazy_static! {
    /// Printable, non-whitespace characters only
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[^\s\p{Cc}]+$").unwrap();
}

/// Validate a username: non-empty, at most 64 characters, no whitespace
/// or control characters.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::Validation("Username is required".to_string()));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(Error::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        )));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(Error::Validation(
            "Username must not contain whitespace or control characters".to_string(),
        ));
    }

    Ok(())
}
