//! Cursor pagination types
//!
//! Pages are read newest-first. A cursor is a sequence-number boundary:
//! a page holds only messages strictly older than it.

use chatlog_common::{Error, Result};
use serde::{Deserialize, Serialize};

use super::entities::Message;

/// Exclusive upper bound on sequence numbers for the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(i64);

impl Cursor {
    /// Sentinel: nothing consumed yet, start from the newest message
    pub const LATEST: Cursor = Cursor(i64::MAX);

    /// Parse a wire token. `0` selects [`Cursor::LATEST`]; negative values
    /// cannot come from a page and are rejected.
    pub fn from_token(token: i64) -> Result<Self> {
        match token {
            0 => Ok(Self::LATEST),
            t if t < 0 => Err(Error::InvalidCursor(format!(
                "Cursor must be positive, got {}",
                t
            ))),
            t => Ok(Cursor(t)),
        }
    }

    /// Cursor that resumes strictly before `sequence`
    pub fn before(sequence: i64) -> Self {
        Cursor(sequence)
    }

    /// Raw boundary value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::LATEST
    }
}

/// Page-size limit. `0` on the wire means unbounded, never an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLimit {
    #[default]
    Unbounded,
    AtMost(u32),
}

impl PageLimit {
    pub fn from_raw(limit: u32) -> Self {
        match limit {
            0 => PageLimit::Unbounded,
            n => PageLimit::AtMost(n),
        }
    }

    /// Value for a SQLite `LIMIT` clause, where a negative limit means none
    pub fn as_sql_limit(&self) -> i64 {
        match self {
            PageLimit::Unbounded => -1,
            PageLimit::AtMost(n) => i64::from(*n),
        }
    }
}

/// One page of a conversation plus the cursor for the following page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub messages: Vec<Message>,
    pub next_cursor: Cursor,
}

impl Page {
    /// Build a page read with `requested`. The next cursor is the oldest
    /// sequence returned, or `requested` itself when nothing was returned.
    pub fn new(messages: Vec<Message>, requested: Cursor) -> Self {
        let next_cursor = messages
            .iter()
            .map(|m| m.sequence)
            .min()
            .map(Cursor::before)
            .unwrap_or(requested);

        Self {
            messages,
            next_cursor,
        }
    }

    /// An empty page means the start of the conversation has been reached
    pub fn is_exhausted(&self) -> bool {
        self.messages.is_empty()
    }
}
