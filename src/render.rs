//! TUI rendering traits for timeblock types.
//!
//! Extension traits that add colored terminal rendering to timeblock-core
//! types using owo_colors.

use owo_colors::{AnsiColors, OwoColorize};
use timeblock_core::conversation::{ProfileSection, UserProfile};
use timeblock_core::schedule::DayColumn;
use timeblock_core::slots::HourSlot;
use timeblock_core::{Event, ScheduleItem, Suggestion, TimeOfDay};

use crate::dates::format_date_label;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Map an event's color hint onto a terminal color.
fn ansi_color(name: &str) -> Option<AnsiColors> {
    let color = match name.to_ascii_lowercase().as_str() {
        "blue" => AnsiColors::Blue,
        "indigo" => AnsiColors::BrightBlue,
        "green" => AnsiColors::Green,
        "purple" | "violet" => AnsiColors::Magenta,
        "red" => AnsiColors::Red,
        "yellow" | "orange" => AnsiColors::Yellow,
        "cyan" | "teal" => AnsiColors::Cyan,
        _ => return None,
    };
    Some(color)
}

fn paint(text: &str, color: Option<&str>) -> String {
    match color.and_then(ansi_color) {
        Some(c) => text.color(c).to_string(),
        None => text.to_string(),
    }
}

fn time_span(start: &TimeOfDay, end: &TimeOfDay) -> String {
    format!("{} - {}", start.to_12h(), end.to_12h())
}

impl Render for Event {
    fn render(&self) -> String {
        let mut title = paint(&self.title, self.color.as_deref());
        if self.recurring {
            title = format!("{} {}", title, "(regular)".dimmed());
        }
        let id = format!("[{}]", self.id);

        format!(
            "{} {} {}",
            title,
            time_span(&self.start, &self.end).dimmed(),
            id.dimmed()
        )
    }
}

impl Render for Suggestion {
    fn render(&self) -> String {
        let id = format!("[{}]", self.id);
        format!(
            "{} {} {} {}",
            "✦".cyan(),
            self.title.cyan(),
            time_span(&self.start, &self.end).dimmed(),
            id.dimmed()
        )
    }
}

impl Render for ScheduleItem<'_> {
    fn render(&self) -> String {
        match self {
            ScheduleItem::Event(e) => e.render(),
            ScheduleItem::Suggestion(s) => s.render(),
        }
    }
}

impl Render for HourSlot<'_> {
    fn render(&self) -> String {
        let label = format!("{:>8}", self.label);
        let label = if self.is_working_hour() {
            label
        } else {
            label.dimmed().to_string()
        };

        if self.items.is_empty() {
            return format!("{} {}", label, "│".dimmed());
        }

        let pad = " ".repeat(8);
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let gutter = if i == 0 { label.as_str() } else { pad.as_str() };
                format!("{} {} {}", gutter, "│".dimmed(), item.render())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render the hourly grid, skipping empty hours unless `all_hours` is set.
pub fn render_day(slots: &[HourSlot<'_>], all_hours: bool) -> String {
    if !all_hours && slots.iter().all(|s| s.is_empty()) {
        return "   Nothing scheduled".dimmed().to_string();
    }

    slots
        .iter()
        .filter(|s| all_hours || !s.is_empty())
        .map(|s| s.render())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render each day of the week with its events in hour order.
pub fn render_week(columns: &[DayColumn<'_>]) -> String {
    let mut lines = Vec::new();

    for column in columns {
        let header = format!(
            "{} {}",
            format_date_label(column.date),
            column.date.format("%Y-%m-%d")
        );
        lines.push(header.bold().to_string());

        let mut items = column.slots.iter().flat_map(|s| s.items.iter()).peekable();
        if items.peek().is_none() {
            lines.push(format!("   {}", "free".dimmed()));
        }
        for item in items {
            lines.push(format!("   {}", item.render()));
        }
    }

    lines.join("\n")
}

/// Render suggestions with their descriptions.
pub fn render_suggestions(suggestions: &[&Suggestion]) -> String {
    if suggestions.is_empty() {
        return "   No suggestions".dimmed().to_string();
    }

    suggestions
        .iter()
        .map(|s| {
            if s.description.is_empty() {
                format!("   {}", s.render())
            } else {
                format!("   {}\n     {}", s.render(), s.description.dimmed())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Each profile section with its title; unanswered ones say so.
pub fn render_profile(profile: &UserProfile) -> String {
    ProfileSection::ALL
        .iter()
        .map(|&section| {
            let body = match profile.section(section) {
                Some(text) => text
                    .lines()
                    .map(|line| format!("   {}", line))
                    .collect::<Vec<_>>()
                    .join("\n"),
                None => format!("   {}", "Not answered yet".dimmed()),
            };
            format!(
                "{} {}\n{}",
                section.title().bold(),
                format!("({})", section).dimmed(),
                body
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use timeblock_core::slots::day_slots;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn event(title: &str, start: &str, end: &str) -> Event {
        Event::new(title, start.parse().unwrap(), end.parse().unwrap(), date()).unwrap()
    }

    #[test]
    fn event_render_shows_title_and_times() {
        let mut e = event("Work", "09:00", "17:00");
        e.color = Some("blue".into());
        let out = e.render();
        assert!(out.contains("Work"));
        assert!(out.contains("09:00 AM - 05:00 PM"));
        assert!(out.contains(&e.id));
    }

    #[test]
    fn unknown_color_is_left_plain() {
        assert_eq!(paint("Gym", Some("bg-green-100")), "Gym");
        assert_eq!(paint("Gym", None), "Gym");
        assert_ne!(paint("Gym", Some("Green")), "Gym");
    }

    #[test]
    fn day_render_skips_empty_hours() {
        let events = vec![event("Gym", "07:00", "08:30"), event("Work", "09:00", "17:00")];
        let slots = day_slots(&events);

        let compact = render_day(&slots, false);
        assert_eq!(compact.lines().count(), 2);
        assert!(compact.contains("7:00 AM"));

        let full = render_day(&slots, true);
        assert_eq!(full.lines().count(), 24);
    }

    #[test]
    fn day_render_stacks_items_in_same_hour() {
        let events = vec![event("Standup", "09:00", "09:15"), event("Work", "09:30", "17:00")];
        let slots = day_slots(&events);
        let out = render_day(&slots, false);
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().contains("Work"));
    }

    #[test]
    fn empty_day_says_so() {
        let slots = day_slots(Vec::<ScheduleItem>::new());
        assert!(render_day(&slots, false).contains("Nothing scheduled"));
    }

    #[test]
    fn suggestions_render_with_description() {
        let s = Suggestion::new(
            "s1",
            "Meditation Session",
            "Clear your mind",
            "06:00 PM".parse().unwrap(),
            "06:30 PM".parse().unwrap(),
            date(),
        )
        .unwrap();
        let out = render_suggestions(&[&s]);
        assert!(out.contains("Meditation Session"));
        assert!(out.contains("Clear your mind"));
        assert!(render_suggestions(&[]).contains("No suggestions"));
    }

    #[test]
    fn profile_render_lists_all_sections() {
        let profile = UserProfile {
            what_do_you_want: Some("to be happy".into()),
            what_do_you_really_want: None,
            regulars: Some("work 9-5\ngym 7-8:30am".into()),
        };
        let out = render_profile(&profile);
        assert!(out.contains("What do you want?"));
        assert!(out.contains("What do you really want?"));
        assert!(out.contains("What are your regulars?"));
        assert!(out.contains("Not answered yet"));
        assert!(out.contains("   gym 7-8:30am"));
        assert!(out.contains("(really-want)"));
    }
}
