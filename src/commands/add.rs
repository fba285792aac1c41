use anyhow::{Result, bail};
use dialoguer::Input;
use owo_colors::OwoColorize;
use timeblock_core::{EventDraft, TimeOfDay};

use super::AppContext;
use crate::dates::{parse_date, parse_duration, parse_time};

pub struct AddArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
    pub recurring: bool,
    pub color: Option<String>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let interactive = args.title.is_none();

    // --- Title ---
    let title = match &args.title {
        Some(t) => t.clone(),
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Start ---
    let start = match &args.start {
        Some(s) => Some(parse_time(s)?),
        None if interactive => prompt_start()?,
        None => None,
    };

    let draft = build_draft(&args, title, start)?;

    let mut ctx = AppContext::load()?;
    let event_id = ctx.schedule.add_event(draft)?.id.clone();
    println!("{}", format!("  Event id: {}", event_id).dimmed());

    ctx.save()
}

/// Ask for a start time; an empty answer leaves it to the schedule's defaults.
fn prompt_start() -> Result<Option<TimeOfDay>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Starts at? (now)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse_time(&input) {
            Ok(time) => return Ok(Some(time)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn build_draft(args: &AddArgs, title: String, start: Option<TimeOfDay>) -> Result<EventDraft> {
    let mut draft = EventDraft::titled(title).recurring(args.recurring);

    if let Some(start) = start {
        draft = draft.start(start);
    }

    let end = match (&args.end, &args.duration) {
        (Some(end), _) => Some(parse_time(end)?),
        (None, Some(duration)) => Some(resolve_end(start, &parse_duration(duration)?)?),
        (None, None) => None,
    };
    if let Some(end) = end {
        draft = draft.end(end);
    }

    if let Some(date) = &args.date {
        draft = draft.date(parse_date(date)?);
    }
    if let Some(color) = &args.color {
        draft = draft.color(color.as_str());
    }

    Ok(draft)
}

fn resolve_end(start: Option<TimeOfDay>, duration: &chrono::Duration) -> Result<TimeOfDay> {
    let Some(start) = start else {
        bail!("--duration needs a start time");
    };
    match start.checked_add(*duration) {
        Some(end) => Ok(end),
        None => bail!("Event starting at {} would run past midnight", start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args() -> AddArgs {
        AddArgs {
            title: Some("Gym".into()),
            start: None,
            end: None,
            duration: None,
            date: None,
            recurring: false,
            color: None,
        }
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn duration_sets_end() {
        let a = AddArgs {
            duration: Some("1h 30m".into()),
            ..args()
        };
        let draft = build_draft(&a, "Gym".into(), Some(t("07:00"))).unwrap();
        assert_eq!(draft.start, Some(t("07:00")));
        assert_eq!(draft.end, Some(t("08:30")));
    }

    #[test]
    fn explicit_end_and_date() {
        let a = AddArgs {
            end: Some("6:30pm".into()),
            date: Some("2024-01-02".into()),
            color: Some("green".into()),
            recurring: true,
            ..args()
        };
        let draft = build_draft(&a, "Gym".into(), Some(t("17:00"))).unwrap();
        assert_eq!(draft.end, Some(t("18:30")));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(draft.color.as_deref(), Some("green"));
        assert_eq!(draft.recurring, Some(true));
    }

    #[test]
    fn no_times_leaves_defaults_to_schedule() {
        let draft = build_draft(&args(), "Gym".into(), None).unwrap();
        assert_eq!(draft.start, None);
        assert_eq!(draft.end, None);
        assert_eq!(draft.date, None);
    }

    #[test]
    fn duration_past_midnight_is_an_error() {
        let a = AddArgs {
            duration: Some("2h".into()),
            ..args()
        };
        assert!(build_draft(&a, "Late".into(), Some(t("23:00"))).is_err());
    }

    #[test]
    fn duration_without_start_is_an_error() {
        assert!(resolve_end(None, &chrono::Duration::hours(1)).is_err());
    }
}
