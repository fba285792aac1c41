//! Terminal feedback for schedule transitions.

use owo_colors::OwoColorize;
use timeblock_core::observer::ScheduleObserver;
use timeblock_core::{Event, Suggestion};

use crate::dates::format_date_label;

pub struct Notifier;

impl ScheduleObserver for Notifier {
    fn event_added(&self, event: &Event) {
        println!(
            "{}",
            format!(
                "  Added \"{}\" on {} at {}",
                event.title,
                format_date_label(event.date),
                event.start.to_12h()
            )
            .green()
        );
    }

    fn suggestion_accepted(&self, suggestion: &Suggestion, _event: &Event) {
        println!(
            "{}",
            format!("  Suggestion accepted: added \"{}\" to your calendar.", suggestion.title).green()
        );
    }

    fn suggestion_rejected(&self, suggestion: &Suggestion) {
        println!(
            "{}",
            format!("  Suggestion declined: removed \"{}\" from suggestions.", suggestion.title).yellow()
        );
    }
}
