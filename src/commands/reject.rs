use anyhow::Result;

use super::AppContext;

pub fn run(id: &str) -> Result<()> {
    let mut ctx = AppContext::load()?;
    ctx.schedule.reject_suggestion(id)?;
    ctx.save()
}
