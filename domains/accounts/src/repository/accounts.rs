//! Account repository

use crate::domain::entities::Account;
use chatlog_common::{Error, RepositoryError, Result};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find account by username
    pub async fn find(&self, username: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT username, credential_hash, created_at
            FROM accounts
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Whether an account with this username exists
    pub async fn exists(&self, username: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Create a new account
    ///
    /// Returns `Error::Conflict` when the username is already taken.
    pub async fn create(&self, account: &Account) -> Result<Account> {
        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (username, credential_hash, created_at)
            VALUES (?, ?, ?)
            RETURNING username, credential_hash, created_at
            "#,
        )
        .bind(&account.username)
        .bind(&account.credential_hash)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match RepositoryError::from_write(e) {
            RepositoryError::AlreadyExists => {
                Error::Conflict("Desired username already taken".to_string())
            }
            other => other.into(),
        })?;

        Ok(created)
    }
}
