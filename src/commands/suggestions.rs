use anyhow::Result;
use owo_colors::OwoColorize;

use super::AppContext;
use crate::dates::{date_or_today, format_date_label};
use crate::render::render_suggestions;

pub fn run(date: Option<&str>) -> Result<()> {
    let mut ctx = AppContext::load()?;
    let date = date_or_today(date)?;

    ctx.schedule.select_date(date);
    ctx.schedule.set_suggestions_visible(true);

    let suggestions: Vec<_> = ctx.schedule.visible_suggestions().collect();

    println!("{}", format!("AI suggestions for {}", format_date_label(date)).bold());
    println!("{}", render_suggestions(&suggestions));

    Ok(())
}
