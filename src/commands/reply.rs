use std::path::Path;

use anyhow::{Context, Result};
use timeblock_core::conversation::{ChatResponse, ERROR_REPLY};
use tracing::warn;

use super::AppContext;

/// Record the assistant's answer from a chat-completion response file.
///
/// An unreadable response is recorded as the error apology so the history
/// still alternates user and assistant turns.
pub fn run(file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let reply = reply_text(&contents);
    println!("{}", reply);

    let mut ctx = AppContext::load()?;
    ctx.conversation.record_reply(reply);
    ctx.save()
}

fn reply_text(contents: &str) -> String {
    match serde_json::from_str::<ChatResponse>(contents) {
        Ok(response) => response.reply().to_string(),
        Err(e) => {
            warn!("Unreadable chat response: {}", e);
            ERROR_REPLY.to_string()
        }
    }
}
