//! Messages domain state

use crate::MessageService;

/// Application state for the Messages domain
#[derive(Clone)]
pub struct MessagesState {
    pub messages: MessageService,
}
