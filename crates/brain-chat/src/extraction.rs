//! The extraction result store: the latest door-schedule rows.

use std::sync::{Mutex, PoisonError};

use brain_core::types::{ExtractionResults, ScheduleSnapshot};

/// Holds the most recent successful extraction, with a lifecycle independent
/// of the conversation log.
///
/// `replace` overwrites the whole result set atomically; old rows are
/// discarded, never merged. The store distinguishes "extraction never run"
/// (`ExtractionResults::NotRun`) from "ran and returned zero rows"
/// (`Loaded` with an empty `rows`).
pub struct ExtractionStore {
    results: Mutex<ExtractionResults>,
}

impl ExtractionStore {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(ExtractionResults::NotRun),
        }
    }

    /// Atomically replace the visible result set.
    pub fn replace(&self, snapshot: ScheduleSnapshot) {
        *self
            .results
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = ExtractionResults::Loaded(snapshot);
    }

    /// A read-only copy of the current state.
    pub fn snapshot(&self) -> ExtractionResults {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ExtractionStore {
    fn default() -> Self {
        Self::new()
    }
}
