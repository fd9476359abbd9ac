//! Route definitions for Accounts domain API

use axum::{routing::post, Router};

use super::handlers::users;
use super::middleware::AccountsState;

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/users", post(users::create_user))
        .route("/v1/users/authenticate", post(users::authenticate))
}
