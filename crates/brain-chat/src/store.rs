//! The conversation store: an append-only, ordered log of messages.

use std::sync::{Mutex, PoisonError};

use brain_core::types::Message;

/// Ordered, append-only log of exchanged messages.
///
/// The single source of truth for what the presentation renders. `append`
/// is the only mutator; entries are never edited, reordered, or removed for
/// the lifetime of the session. The store performs no validation — callers
/// reject invalid messages (e.g. empty user text) before they get here.
#[derive(Default)]
pub struct ConversationStore {
    messages: Mutex<Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log.
    ///
    /// Appends are serialized by the interior mutex, so interleaved request
    /// completions commit in the order their `append` calls arrive and no
    /// entry is ever dropped or merged.
    pub fn append(&self, message: Message) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// A read-only copy of the log in chronological order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
