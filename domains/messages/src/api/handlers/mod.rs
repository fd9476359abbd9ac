//! HTTP handlers for the Messages domain

pub mod messages;
