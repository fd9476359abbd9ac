//! Repository implementations for the Accounts domain

pub mod accounts;

pub use accounts::AccountRepository;
