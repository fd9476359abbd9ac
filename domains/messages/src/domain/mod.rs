//! Messages domain layer: conversation identity, entities, pagination

pub mod classification;
pub mod conversation;
pub mod entities;
pub mod pagination;
