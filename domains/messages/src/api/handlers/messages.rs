//! Message API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chatlog_common::{Pagination, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::MessagesState;
use crate::domain::entities::{Message, MessageMetadata};
use crate::domain::pagination::{Cursor, PageLimit};

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 64))]
    pub sender: String,

    #[validate(length(min = 1, max = 64))]
    pub recipient: String,

    /// Message content; may be empty
    pub content: String,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub sequence: i64,
    pub created_at: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    pub content: String,
    pub metadata: Option<MessageMetadata>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            sequence: m.sequence,
            created_at: m.created_at,
            sender: m.sender,
            recipient: m.recipient,
            content: m.content,
            metadata: m.metadata.map(|j| j.0),
        }
    }
}

/// One page of a conversation
#[derive(Debug, Serialize)]
pub struct FetchMessagesResponse {
    pub messages: Vec<MessageResponse>,
    pub next_cursor: Cursor,
}

/// Send a message
pub async fn send_message(
    State(state): State<MessagesState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let message = state
        .messages
        .send(&req.sender, &req.recipient, &req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Fetch a page of the conversation between two users, newest first.
///
/// `limit=0` (or absent) returns everything before the cursor;
/// `cursor=0` (or absent) starts from the newest message.
pub async fn fetch_messages(
    State(state): State<MessagesState>,
    Path((user_a, user_b)): Path<(String, String)>,
    pagination: Pagination,
) -> Result<Json<FetchMessagesResponse>> {
    let cursor = Cursor::from_token(pagination.cursor())?;
    let limit = PageLimit::from_raw(pagination.limit());

    let page = state
        .messages
        .fetch(&user_a, &user_b, limit, cursor)
        .await?;

    Ok(Json(FetchMessagesResponse {
        messages: page.messages.into_iter().map(Into::into).collect(),
        next_cursor: page.next_cursor,
    }))
}
