//! Message log repository
//!
//! Append-only: there is no update or delete path.

use chatlog_common::{Error, RepositoryError, Result};
use sqlx::types::Json;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::domain::conversation::ConversationKey;
use crate::domain::entities::{Message, NewMessage};
use crate::domain::pagination::{Cursor, Page, PageLimit};

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a message and return it with its assigned sequence number.
    ///
    /// Sequence assignment is the `AUTOINCREMENT` of the insert itself, so it
    /// follows SQLite's write serialization. Fails with
    /// `Error::ReferentialIntegrityViolation` if either participant is
    /// missing when the row is committed.
    pub async fn append(&self, msg: &NewMessage) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (created_at, sender, recipient, content, metadata)
            VALUES (?, ?, ?, ?, ?)
            RETURNING sequence, created_at, sender, recipient, content, metadata
            "#,
        )
        .bind(msg.created_at)
        .bind(&msg.sender)
        .bind(&msg.recipient)
        .bind(&msg.content)
        .bind(msg.metadata.map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(created)
    }

    /// Read one page of a conversation, newest first, strictly before `cursor`.
    ///
    /// Runs in a single read transaction so the page and the existence check
    /// see the same snapshot. Fails with `Error::ConversationNotFound` when
    /// the pair has never exchanged a message.
    pub async fn conversation_before(
        &self,
        key: &ConversationKey,
        cursor: Cursor,
        limit: PageLimit,
    ) -> Result<Page> {
        let mut tx = self.pool.begin().await?;

        let messages = page_tx(&mut tx, key, cursor, limit).await?;
        if messages.is_empty() && !conversation_exists_tx(&mut tx, key).await? {
            let (user_a, user_b) = key.participants();
            return Err(Error::ConversationNotFound {
                user_a: user_a.to_string(),
                user_b: user_b.to_string(),
            });
        }

        tx.commit().await?;
        Ok(Page::new(messages, cursor))
    }
}

/// Page query: the union of both directions, each an index range scan on
/// `(sender, recipient, sequence)`. `UNION` rather than `UNION ALL` so a
/// self-conversation, where both branches match the same rows, is not read
/// twice.
async fn page_tx(
    tx: &mut Transaction<'_, Sqlite>,
    key: &ConversationKey,
    cursor: Cursor,
    limit: PageLimit,
) -> std::result::Result<Vec<Message>, sqlx::Error> {
    let (low, high) = key.participants();
    sqlx::query_as::<_, Message>(
        r#"
        SELECT sequence, created_at, sender, recipient, content, metadata
        FROM messages
        WHERE sender = ? AND recipient = ? AND sequence < ?
        UNION
        SELECT sequence, created_at, sender, recipient, content, metadata
        FROM messages
        WHERE sender = ? AND recipient = ? AND sequence < ?
        ORDER BY sequence DESC
        LIMIT ?
        "#,
    )
    .bind(low)
    .bind(high)
    .bind(cursor.value())
    .bind(high)
    .bind(low)
    .bind(cursor.value())
    .bind(limit.as_sql_limit())
    .fetch_all(&mut **tx)
    .await
}

async fn conversation_exists_tx(
    tx: &mut Transaction<'_, Sqlite>,
    key: &ConversationKey,
) -> std::result::Result<bool, sqlx::Error> {
    let (low, high) = key.participants();
    let found = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM messages
            WHERE (sender = ? AND recipient = ?) OR (sender = ? AND recipient = ?)
        )
        "#,
    )
    .bind(low)
    .bind(high)
    .bind(high)
    .bind(low)
    .fetch_one(&mut **tx)
    .await?;

    Ok(found != 0)
}
