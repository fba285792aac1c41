use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::ViewMode;
use timeblock_core::date_range::start_of_week;

use super::AppContext;
use crate::dates::date_or_today;
use crate::render::render_week;

pub fn run(date: Option<&str>, offset: i64) -> Result<()> {
    let mut ctx = AppContext::load()?;
    let date = date_or_today(date)?;

    let schedule = &mut ctx.schedule;
    schedule.select_date(date);
    schedule.shift_week(offset);
    schedule.set_view_mode(ViewMode::Week);

    let monday = start_of_week(schedule.selection().date);
    let count = schedule.visible_events().count();

    let header = format!("Week of {}", monday.format("%B %-d, %Y"));
    println!("{} {}", header.bold(), format!("({} events)", count).dimmed());
    println!("{}", render_week(&schedule.week_grid()));

    Ok(())
}
