//! Domain entities for the Messages domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use chatlog_common::{validate_username, Result};

use super::classification::classify;
use super::conversation::ConversationKey;

/// Media type inferred from message content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Image,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Video => write!(f, "video"),
            MediaType::Image => write!(f, "image"),
        }
    }
}

/// Classification stored alongside a message, written once at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub media_type: MediaType,
}

/// Message entity, as stored in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    /// Global, strictly increasing; the only ordering key
    pub sequence: i64,
    /// Wall clock at insert; informational only
    pub created_at: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    pub content: String,
    pub metadata: Option<Json<MessageMetadata>>,
}

impl Message {
    /// Conversation this message belongs to
    pub fn conversation(&self) -> ConversationKey {
        ConversationKey::resolve(&self.sender, &self.recipient)
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.metadata.as_ref().map(|m| m.media_type)
    }
}

/// A message that has not been assigned a sequence number yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender: String,
    pub recipient: String,
    pub content: String,
    pub metadata: Option<MessageMetadata>,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Validate participants and derive metadata from the content.
    ///
    /// Content may be empty. Classification never fails the message.
    pub fn new(sender: String, recipient: String, content: String) -> Result<Self> {
        validate_username(&sender)?;
        validate_username(&recipient)?;

        Ok(NewMessage {
            metadata: classify(&content),
            sender,
            recipient,
            content,
            created_at: Utc::now(),
        })
    }
}
