//! Read-only account capability consumed by the message domain

use async_trait::async_trait;

use crate::Result;

/// Answers "does this account exist" for referential checks.
///
/// The message domain only ever reads through this trait; registration and
/// credential handling stay with the account domain that implements it.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Whether `username` is a registered account
    async fn exists(&self, username: &str) -> Result<bool>;
}
