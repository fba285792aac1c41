use anyhow::Result;
use owo_colors::OwoColorize;

use super::AppContext;

pub fn run(id: &str) -> Result<()> {
    let mut ctx = AppContext::load()?;

    let event = ctx.schedule.remove_event(id)?;
    println!("{}", format!("  Removed \"{}\"", event.title).red());

    ctx.save()
}
