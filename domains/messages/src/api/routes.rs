//! Route definitions for Messages domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::messages;
use super::middleware::MessagesState;

/// Create all Messages domain API routes
pub fn routes() -> Router<MessagesState> {
    Router::new()
        .route("/v1/messages", post(messages::send_message))
        .route(
            "/v1/conversations/{user_a}/{user_b}/messages",
            get(messages::fetch_messages),
        )
}
