//! Request orchestrator: coordinates user actions against the gateway.
//!
//! Owns the conversation log, the extraction results, and the two request
//! channels. Each operation issues one gateway call and commits exactly one
//! outcome — a store commit on success, a channel error on failure. Faults
//! never propagate past this boundary and never corrupt committed history.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use brain_core::types::{ExtractionResults, Message};
use brain_gateway::{Endpoint, Gateway};

use crate::channel::{ChannelState, RequestChannel};
use crate::decode::{decode_chat_reply, decode_schedule};
use crate::extraction::ExtractionStore;
use crate::store::ConversationStore;

/// User-facing message recorded on the chat channel when a request fails.
pub const CHAT_FAILURE_MESSAGE: &str = "Could not reach the backend. Is it running?";

/// User-facing message recorded on the extraction channel when a request fails.
pub const SCHEDULE_FAILURE_MESSAGE: &str =
    "Failed to fetch the door schedule. Is the backend running?";

/// Central coordinator for the two request channels.
pub struct ChatOrchestrator {
    gateway: Arc<dyn Gateway>,
    conversation: ConversationStore,
    extraction: ExtractionStore,
    chat_channel: RequestChannel,
    extraction_channel: RequestChannel,
}

impl ChatOrchestrator {
    /// Create an orchestrator with empty stores and idle channels.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            conversation: ConversationStore::new(),
            extraction: ExtractionStore::new(),
            chat_channel: RequestChannel::new("chat"),
            extraction_channel: RequestChannel::new("extraction"),
        }
    }

    /// Submit a free-form chat message.
    ///
    /// Empty or whitespace-only input is silently ignored. Otherwise the
    /// user's turn is committed to the log before the network call resolves,
    /// and the outcome is committed exactly once: an assistant turn on
    /// success, the fixed channel error on failure. The user's turn stays in
    /// the log either way.
    pub async fn submit_chat_message(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty chat submission");
            return;
        }

        let _flight = self.chat_channel.acquire().await;

        self.conversation.append(Message::user(trimmed));
        self.chat_channel.begin();

        match self
            .gateway
            .send(Endpoint::Chat, json!({ "message": trimmed }))
            .await
        {
            Ok(body) => {
                let reply = decode_chat_reply(&body);
                info!(citations = reply.citations.len(), "Chat reply committed");
                self.conversation
                    .append(Message::assistant(reply.answer, reply.citations));
                self.chat_channel.succeed();
            }
            Err(e) => {
                warn!(error = %e, "Chat request failed");
                self.chat_channel.fail(CHAT_FAILURE_MESSAGE);
            }
        }
    }

    /// Request a door-schedule extraction with the default (empty) query.
    pub async fn request_extraction(&self) {
        self.run_extraction(json!({})).await;
    }

    /// Request a door-schedule extraction steered by a retrieval query.
    pub async fn request_extraction_with_query(&self, query: &str) {
        self.run_extraction(json!({ "query": query })).await;
    }

    /// Shared extraction path. On success the result store is replaced
    /// atomically; on failure it is left untouched, so stale rows remain
    /// visible.
    async fn run_extraction(&self, payload: Value) {
        let _flight = self.extraction_channel.acquire().await;

        self.extraction_channel.begin();

        match self.gateway.send(Endpoint::DoorSchedule, payload).await {
            Ok(body) => {
                let snapshot = decode_schedule(&body);
                info!(rows = snapshot.rows.len(), "Door schedule committed");
                self.extraction.replace(snapshot);
                self.extraction_channel.succeed();
            }
            Err(e) => {
                warn!(error = %e, "Door schedule request failed");
                self.extraction_channel.fail(SCHEDULE_FAILURE_MESSAGE);
            }
        }
    }

    // -- Read-only views for the presentation --

    /// The conversation log in chronological order.
    pub fn conversation(&self) -> Vec<Message> {
        self.conversation.snapshot()
    }

    /// The extraction store's current state.
    pub fn schedule(&self) -> ExtractionResults {
        self.extraction.snapshot()
    }

    /// Pending/error state of the chat channel.
    pub fn chat_state(&self) -> ChannelState {
        self.chat_channel.state()
    }

    /// Pending/error state of the extraction channel.
    pub fn extraction_state(&self) -> ChannelState {
        self.extraction_channel.state()
    }
}

// =============================================================================
// Tests
// =============================================================================
