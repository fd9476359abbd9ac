//! Account directory service
//!
//! Registration and credential checks, plus the read-only existence
//! capability handed to the message domain.

use async_trait::async_trait;
use chatlog_common::{AccountDirectory, Error, Result};
use sqlx::SqlitePool;

use crate::domain::entities::Account;
use crate::repository::AccountRepository;

/// Uniform message for unknown usernames and wrong passphrases
const AUTHENTICATION_FAILED: &str = "Invalid username or passphrase";

#[derive(Clone)]
pub struct AccountService {
    accounts: AccountRepository,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    /// Register a new account.
    ///
    /// Rejects passphrases shorter than 16 characters and usernames that are
    /// already taken.
    #[tracing::instrument(skip(self, passphrase))]
    pub async fn create_user(&self, username: &str, passphrase: &str) -> Result<Account> {
        let account = Account::new(username.to_string(), passphrase).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected registration");
        })?;

        if self.accounts.exists(username).await? {
            return Err(Error::Conflict("Desired username already taken".to_string()));
        }

        let created = self.accounts.create(&account).await?;
        tracing::info!(username = %created.username, "Account created");
        Ok(created)
    }

    /// Verify a username/passphrase pair
    #[tracing::instrument(skip(self, passphrase))]
    pub async fn authenticate(&self, username: &str, passphrase: &str) -> Result<()> {
        let account = self
            .accounts
            .find(username)
            .await?
            .ok_or_else(|| Error::Authentication(AUTHENTICATION_FAILED.to_string()))?;

        if !account.verify_passphrase(passphrase) {
            tracing::warn!(username = %username, "Passphrase mismatch");
            return Err(Error::Authentication(AUTHENTICATION_FAILED.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl AccountDirectory for AccountService {
    async fn exists(&self, username: &str) -> Result<bool> {
        self.accounts.exists(username).await
    }
}
