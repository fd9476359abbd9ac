//! Shared utilities, configuration, and error handling for Chatlog
//!
//! This crate provides common functionality used across the Chatlog workspace:
//! - Configuration management following 12-factor principles
//! - Error taxonomy shared by the account and message domains
//! - SQLite pool bootstrap and embedded migrations
//! - Credential hashing and username validation
//! - The account-existence capability shared between domains

pub mod config;
pub mod crypto;
pub mod db;
pub mod directory;
pub mod error;
pub mod extractors;
pub mod validation;

pub use config::{Config, DatabaseConfig};
pub use crypto::{hash_credential, verify_credential};
pub use db::RepositoryError;
pub use directory::AccountDirectory;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
pub use validation::validate_username;
