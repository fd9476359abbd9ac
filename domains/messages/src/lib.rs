//! Messages domain: two-party conversations over one append-only log
//!
//! A conversation is never stored. It is the view of every message whose
//! sender/recipient pair, taken unordered, matches two usernames, ordered by
//! the global sequence number and read newest-first with a resumable cursor.

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::classification::classify;
pub use domain::conversation::ConversationKey;
pub use domain::entities::{MediaType, Message, MessageMetadata, NewMessage};
pub use domain::pagination::{Cursor, Page, PageLimit};

// Re-export repository and service types
pub use repository::MessageRepository;
pub use service::MessageService;

// Re-export API types
pub use api::routes;
pub use api::MessagesState;
