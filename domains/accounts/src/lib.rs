//! Accounts domain: registration, credential verification, account directory

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Account, MAX_PASSPHRASE_LENGTH, MIN_PASSPHRASE_LENGTH};

// Re-export repository and service types
pub use repository::AccountRepository;
pub use service::AccountService;

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
