//! Chatlog application composition root
//!
//! Composes the account and message domain routers into a single application.

use axum::Router;
use chatlog_accounts::{AccountService, AccountsState};
use chatlog_messages::{MessageService, MessagesState};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Create the main application router with all routes
pub fn create_app(pool: SqlitePool) -> Router {
    let accounts = AccountService::new(pool.clone());

    // The message domain only sees the directory's read capability
    let messages = MessageService::new(pool, Arc::new(accounts.clone()));

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Chatlog API v0.0.1-SNAPSHOT" }),
        )
        .merge(chatlog_accounts::routes().with_state(AccountsState { accounts }))
        .merge(chatlog_messages::routes().with_state(MessagesState { messages }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
