//! Conversation identity
//!
//! Two usernames, taken as an unordered pair, name exactly one conversation.
//! The key keeps both names as separate fields in lexicographic order, so it
//! needs no separator and cannot collide for different pairs.

use std::fmt;

/// Canonical key of a two-party conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationKey {
    low: String,
    high: String,
}

impl ConversationKey {
    /// Resolve the key for a pair of usernames, in either order.
    ///
    /// Total over any two strings; `a == b` is a self-conversation.
    pub fn resolve(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// Participants in lexicographic order
    pub fn participants(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

impl fmt::Display for ConversationKey {
    #[mutants::skip] // Log formatting only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.low, self.high)
    }
}
