//! Accounts domain state

use crate::AccountService;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub accounts: AccountService,
}
