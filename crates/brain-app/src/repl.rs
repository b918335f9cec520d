//! Terminal presentation binding.
//!
//! Reads store snapshots and channel state from the orchestrator and renders
//! them; maps input lines to orchestrator operations. Never mutates store
//! state directly. Rendering helpers are pure functions over snapshots so
//! they can be tested without terminal I/O.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use brain_chat::ChatOrchestrator;
use brain_core::types::{Citation, ExtractionResults, Message, Role};
use brain_gateway::HttpGateway;

/// Line-oriented REPL over the orchestrator.
pub struct Repl {
    orchestrator: Arc<ChatOrchestrator>,
    gateway: Arc<HttpGateway>,
}

impl Repl {
    pub fn new(orchestrator: Arc<ChatOrchestrator>, gateway: Arc<HttpGateway>) -> Self {
        Self {
            orchestrator,
            gateway,
        }
    }

    /// Run the input loop until `:quit` or end of input.
    pub async fn run(&self) -> std::io::Result<()> {
        println!(
            "Brain — ask about the project documents. \
             :schedule generates the door schedule, :history reprints the \
             conversation, :quit exits."
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt()?;
        while let Some(line) = lines.next_line().await? {
            if !self.handle_line(line.trim()).await {
                break;
            }
            prompt()?;
        }
        Ok(())
    }

    /// Dispatch one input line. Returns false when the REPL should exit.
    async fn handle_line(&self, line: &str) -> bool {
        match line {
            "" => true,
            ":quit" | ":q" => false,
            ":history" => {
                println!("{}", render_transcript(&self.orchestrator.conversation()));
                true
            }
            ":health" => {
                match self.gateway.health().await {
                    Ok(_) => println!("backend ok at {}", self.gateway.base_url()),
                    Err(e) => println!("backend check failed: {}", e),
                }
                true
            }
            _ if line == ":schedule" || line.starts_with(":schedule ") => {
                let query = line.strip_prefix(":schedule").unwrap_or("").trim();
                if query.is_empty() {
                    self.orchestrator.request_extraction().await;
                } else {
                    self.orchestrator.request_extraction_with_query(query).await;
                }
                match self.orchestrator.extraction_state().last_error {
                    Some(err) => println!("error: {}", err),
                    None => println!("{}", render_schedule(&self.orchestrator.schedule())),
                }
                true
            }
            _ if line.starts_with(':') => {
                println!("unknown command: {}", line);
                true
            }
            text => {
                self.orchestrator.submit_chat_message(text).await;
                match self.orchestrator.chat_state().last_error {
                    Some(err) => println!("error: {}", err),
                    None => {
                        let log = self.orchestrator.conversation();
                        if let Some(reply) = log.iter().rev().find(|m| m.role == Role::Assistant) {
                            println!("{}", render_message(reply));
                        }
                    }
                }
                true
            }
        }
    }
}

fn prompt() -> std::io::Result<()> {
    use std::io::Write;
    print!("> ");
    std::io::stdout().flush()
}

// =============================================================================
// Rendering helpers
// =============================================================================

/// Render one message, with its sources line when it carries citations.
pub fn render_message(message: &Message) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "brain",
    };
    let mut out = format!("{}> {}", speaker, message.text);
    if let Some(sources) = render_citations(&message.citations) {
        out.push('\n');
        out.push_str(&sources);
    }
    out
}

/// Render a sources line, or `None` when there are no citations.
pub fn render_citations(citations: &[Citation]) -> Option<String> {
    if citations.is_empty() {
        return None;
    }
    let list = citations
        .iter()
        .map(|c| format!("{} (p. {})", c.file_name, c.page))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("  sources: {}", list))
}

/// Render the whole conversation log.
pub fn render_transcript(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "No messages yet. Ask something about the documents.".to_string();
    }
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the extraction store's state, distinguishing its three shapes:
/// never run, ran with no rows, and populated.
pub fn render_schedule(results: &ExtractionResults) -> String {
    let snapshot = match results {
        ExtractionResults::NotRun => {
            return "Door schedule has not been generated yet. Run :schedule.".to_string();
        }
        ExtractionResults::Loaded(snapshot) => snapshot,
    };

    let mut out = if snapshot.rows.is_empty() {
        "Door schedule ran and found no rows.".to_string()
    } else {
        let file_width = snapshot
            .rows
            .iter()
            .map(|r| r.file_name.len())
            .max()
            .unwrap_or(0)
            .max("file".len());
        let page_width = snapshot
            .rows
            .iter()
            .map(|r| r.page.to_string().len())
            .max()
            .unwrap_or(0)
            .max("page".len());

        let mut table = format!(
            "{:<file_width$}  {:>page_width$}  line",
            "file", "page"
        );
        for row in &snapshot.rows {
            table.push_str(&format!(
                "\n{:<file_width$}  {:>page_width$}  {}",
                row.file_name, row.page, row.line
            ));
        }
        table
    };

    if let Some(note) = &snapshot.note {
        out.push_str(&format!("\nnote: {}", note));
    }
    out
}
