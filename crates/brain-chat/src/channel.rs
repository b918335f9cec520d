//! Per-channel request state.
//!
//! The chat and extraction channels each own one `RequestChannel`; the two
//! never share state, so a fault or in-flight request on one cannot affect
//! the other.

use std::sync::{Mutex, PoisonError};

/// Transient state of one request channel, as read by the presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelState {
    /// True exactly while a request on this channel is in flight.
    pub pending: bool,
    /// The fixed user-facing message of the last failed attempt, cleared on
    /// the next attempt. Overwritten, never accumulated.
    pub last_error: Option<String>,
}

/// One independent asynchronous request channel.
pub struct RequestChannel {
    name: &'static str,
    state: Mutex<ChannelState>,
    /// Serializes this channel's requests: a second submission waits until
    /// the first one's outcome is committed, so no update is ever dropped.
    flight: tokio::sync::Mutex<()>,
}

impl RequestChannel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(ChannelState::default()),
            flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Channel name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A copy of the current pending/error state.
    pub fn state(&self) -> ChannelState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the in-flight guard. Held across the network call so the channel
    /// serializes its own requests; different channels interleave freely.
    pub async fn acquire(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.flight.lock().await
    }

    /// Mark a request as initiated: pending on, previous error cleared.
    pub fn begin(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.pending = true;
        state.last_error = None;
    }

    /// Record a successful terminal outcome.
    pub fn succeed(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.pending = false;
    }

    /// Record a failed terminal outcome with its user-facing message.
    pub fn fail(&self, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.pending = false;
        state.last_error = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let channel = RequestChannel::new("chat");
        assert_eq!(channel.state(), ChannelState::default());
        assert_eq!(channel.name(), "chat");
    }

    #[test]
    fn test_begin_sets_pending_and_clears_error() {
        let channel = RequestChannel::new("chat");
        channel.fail("boom");
        channel.begin();

        let state = channel.state();
        assert!(state.pending);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_succeed_clears_pending() {
        let channel = RequestChannel::new("chat");
        channel.begin();
        channel.succeed();

        let state = channel.state();
        assert!(!state.pending);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_fail_records_message_and_clears_pending() {
        let channel = RequestChannel::new("extraction");
        channel.begin();
        channel.fail("backend down");

        let state = channel.state();
        assert!(!state.pending);
        assert_eq!(state.last_error.as_deref(), Some("backend down"));
    }

    #[test]
    fn test_error_is_overwritten_not_accumulated() {
        let channel = RequestChannel::new("chat");
        channel.begin();
        channel.fail("first");
        channel.begin();
        channel.fail("second");

        assert_eq!(channel.state().last_error.as_deref(), Some("second"));
    }

    #[test]
    fn test_state_returns_a_copy() {
        let channel = RequestChannel::new("chat");
        let before = channel.state();
        channel.begin();
        assert!(!before.pending);
        assert!(channel.state().pending);
    }

    #[tokio::test]
    async fn test_flight_guard_serializes_channel() {
        let channel = RequestChannel::new("chat");
        let guard = channel.acquire().await;
        // A second request on the same channel must wait.
        assert!(channel.flight.try_lock().is_err());
        drop(guard);
        assert!(channel.flight.try_lock().is_ok());
    }
}
