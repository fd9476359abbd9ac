//! User registration API handlers
//!
//! - POST /v1/users - Register a new account
//! - POST /v1/users/authenticate - Verify a username/passphrase pair

use axum::{extract::State, http::StatusCode, Json};
use chatlog_common::{Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::Account;

/// Request for creating or authenticating an account
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    pub passphrase: String,
}

/// Public view of an account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            created_at: account.created_at,
        }
    }
}

/// Register a new account
pub async fn create_user(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let account = state
        .accounts
        .create_user(&req.username, &req.passphrase)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Verify credentials without creating any session state
pub async fn authenticate(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<StatusCode> {
    state
        .accounts
        .authenticate(&req.username, &req.passphrase)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
