//! Core data types shared across the Brain client.
//!
//! Wire-facing types (`Citation`, `ExtractionRow`) carry the backend's exact
//! field names; everything else is client-side state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Conversation
// =============================================================================

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A reference to a source location supporting an assistant turn.
///
/// Owned by the message that carries it; never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source document identifier.
    pub file_name: String,
    /// Page number within the document (1-based).
    pub page: u32,
}

/// One turn in the conversation log.
///
/// Messages are immutable once created and are never removed from the log
/// for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Source citations; only assistant turns carry any.
    #[serde(default)]
    pub citations: Vec<Citation>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a user turn. The caller is responsible for rejecting empty
    /// input before constructing one.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            citations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant turn with its citations.
    pub fn assistant(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            text: text.into(),
            citations,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Door schedule extraction
// =============================================================================

/// One structured fact recovered from a document by the extraction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRow {
    pub file_name: String,
    pub page: u32,
    /// The extracted textual content.
    pub line: String,
}

/// The payload of one successful extraction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub rows: Vec<ExtractionRow>,
    /// Advisory note the backend may attach to the result set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The extraction store's visible state.
///
/// `NotRun` and `Loaded` with zero rows are distinct: the first means the
/// extraction was never requested this session, the second that it ran and
/// found nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResults {
    NotRun,
    Loaded(ScheduleSnapshot),
}

impl ExtractionResults {
    /// Rows of the latest successful extraction, if one has run.
    pub fn rows(&self) -> Option<&[ExtractionRow]> {
        match self {
            ExtractionResults::NotRun => None,
            ExtractionResults::Loaded(snapshot) => Some(&snapshot.rows),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
