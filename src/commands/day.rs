use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::ViewMode;

use super::AppContext;
use crate::dates::{date_or_today, format_date_label};
use crate::render::render_day;

pub fn run(date: Option<&str>, suggestions: bool, all_hours: bool) -> Result<()> {
    let mut ctx = AppContext::load()?;
    let date = date_or_today(date)?;

    let schedule = &mut ctx.schedule;
    schedule.select_date(date);
    schedule.set_view_mode(ViewMode::Day);
    if suggestions {
        schedule.set_suggestions_visible(true);
    }

    let header = format!("{} ({})", date.format("%A, %B %-d, %Y"), format_date_label(date));
    println!("{}", header.bold());
    println!("{}", render_day(&schedule.day_grid(), all_hours));

    let pending = schedule.visible_suggestions().count();
    if pending > 0 {
        println!();
        println!(
            "{}",
            format!(
                "  {} suggestion(s) for this day. Use `timeblock accept <id>` or `timeblock reject <id>`.",
                pending
            )
            .dimmed()
        );
    }

    Ok(())
}
