//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};

use chatlog_common::{hash_credential, validate_username, verify_credential, Error, Result};

/// Minimum passphrase length in characters
pub const MIN_PASSPHRASE_LENGTH: usize = 16;

/// Maximum passphrase length in characters
pub const MAX_PASSPHRASE_LENGTH: usize = 1024;

/// Registered account.
///
/// Deliberately not `Serialize`: handlers convert to a response DTO so the
/// credential hash never reaches a response body or a log line.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub username: String,
    pub credential_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account, validating the username and passphrase policy
    pub fn new(username: String, passphrase: &str) -> Result<Self> {
        validate_username(&username)?;
        Self::validate_passphrase(passphrase)?;

        Ok(Account {
            username,
            credential_hash: hash_credential(passphrase)?,
            created_at: Utc::now(),
        })
    }

    /// Check a candidate passphrase against the stored hash
    pub fn verify_passphrase(&self, candidate: &str) -> bool {
        verify_credential(candidate, &self.credential_hash)
    }

    fn validate_passphrase(passphrase: &str) -> Result<()> {
        let length = passphrase.chars().count();
        if length < MIN_PASSPHRASE_LENGTH {
            return Err(Error::Validation(format!(
                "Passphrase must be at least {} characters",
                MIN_PASSPHRASE_LENGTH
            )));
        }
        if length > MAX_PASSPHRASE_LENGTH {
            return Err(Error::Validation(format!(
                "Passphrase must be at most {} characters",
                MAX_PASSPHRASE_LENGTH
            )));
        }
        Ok(())
    }
}
