use anyhow::{Context, Result};

use super::AppContext;

/// Record the message and print the chat-completion request for it.
///
/// Sending the request is left to whatever client the user pipes it to.
pub fn run(message: &str) -> Result<()> {
    let mut ctx = AppContext::load()?;

    let request = ctx
        .conversation
        .send(&ctx.config.model, ctx.profile.as_ref(), message);
    let json = serde_json::to_string_pretty(&request).context("Failed to serialize request")?;
    println!("{}", json);

    ctx.save()
}
