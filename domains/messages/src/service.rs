//! Message submission and conversation fetch
//!
//! The library-level contract of the messages domain. Both operations are
//! stateless over the pool; all concurrency control is SQLite's.

use std::sync::Arc;

use chatlog_common::{validate_username, AccountDirectory, Error, Result};
use sqlx::SqlitePool;

use crate::domain::conversation::ConversationKey;
use crate::domain::entities::{Message, NewMessage};
use crate::domain::pagination::{Cursor, Page, PageLimit};
use crate::repository::MessageRepository;

#[derive(Clone)]
pub struct MessageService {
    messages: MessageRepository,
    directory: Arc<dyn AccountDirectory>,
}

impl MessageService {
    pub fn new(pool: SqlitePool, directory: Arc<dyn AccountDirectory>) -> Self {
        Self {
            messages: MessageRepository::new(pool),
            directory,
        }
    }

    /// Append a message from `sender` to `recipient`.
    ///
    /// Both accounts must exist (`Error::UnknownAccount` otherwise, nothing
    /// written). If an account disappears between the check and the commit,
    /// the store's foreign keys reject the row with
    /// `Error::ReferentialIntegrityViolation`.
    #[tracing::instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn send(&self, sender: &str, recipient: &str, content: &str) -> Result<Message> {
        let new_message =
            NewMessage::new(sender.to_string(), recipient.to_string(), content.to_string())?;

        for username in [sender, recipient] {
            if !self.directory.exists(username).await? {
                tracing::warn!(username = %username, "Send rejected: unknown account");
                return Err(Error::UnknownAccount(username.to_string()));
            }
        }

        let message = self.messages.append(&new_message).await?;

        tracing::info!(
            sequence = message.sequence,
            conversation = %message.conversation(),
            media_type = ?message.media_type(),
            "Message appended"
        );
        Ok(message)
    }

    /// Fetch one page of the conversation between `user_a` and `user_b`,
    /// newest first. Argument order does not matter.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        user_a: &str,
        user_b: &str,
        limit: PageLimit,
        cursor: Cursor,
    ) -> Result<Page> {
        validate_username(user_a)?;
        validate_username(user_b)?;

        let key = ConversationKey::resolve(user_a, user_b);
        let page = self.messages.conversation_before(&key, cursor, limit).await?;

        tracing::debug!(
            conversation = %key,
            returned = page.messages.len(),
            next_cursor = page.next_cursor.value(),
            "Conversation page read"
        );
        Ok(page)
    }
}
