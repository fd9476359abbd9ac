//! Accounts domain layer: entities and passphrase policy

pub mod entities;
