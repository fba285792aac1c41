use anyhow::Result;
use owo_colors::OwoColorize;

use super::AppContext;

pub fn run(id: &str) -> Result<()> {
    let mut ctx = AppContext::load()?;

    let event_id = ctx.schedule.accept_suggestion(id)?.id.clone();
    println!("{}", format!("  Event id: {}", event_id).dimmed());

    ctx.save()
}
