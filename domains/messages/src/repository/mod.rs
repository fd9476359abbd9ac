//! Repository implementations for the Messages domain

pub mod messages;

pub use messages::MessageRepository;
