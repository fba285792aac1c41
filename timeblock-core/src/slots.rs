//! Hourly grid binning.
//!
//! Items are placed in the slot whose hour equals the hour of their start
//! time. Minutes are ignored, so a 09:45 event sits in the 9 AM slot
//! alongside one starting at 09:00. Grid rendering relies on this.

use std::ops::Range;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::ScheduleItem;
use crate::time_of_day::{TimeOfDay, hour_label};

pub const HOURS_PER_DAY: usize = 24;

/// Hours highlighted as the working day.
pub const WORKING_HOURS: Range<u32> = 9..18;

/// One row of the hourly grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot<'a> {
    pub label: String,
    pub hour: u32,
    pub items: Vec<ScheduleItem<'a>>,
}

impl HourSlot<'_> {
    pub fn is_working_hour(&self) -> bool {
        WORKING_HOURS.contains(&self.hour)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The grid's standard labels, "12:00 AM" through "11:00 PM".
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_PER_DAY as u32).map(hour_label).collect()
}

/// Group items by start hour into one slot per label.
///
/// `labels` must hold exactly 24 entries, each parseable as a time of day
/// ("1:00 PM", "13:00", ...). Items keep their input order within a slot.
pub fn bin_by_hour<'a, L, I>(labels: &[L], items: I) -> ScheduleResult<Vec<HourSlot<'a>>>
where
    L: AsRef<str>,
    I: IntoIterator,
    I::Item: Into<ScheduleItem<'a>>,
{
    if labels.len() != HOURS_PER_DAY {
        return Err(ScheduleError::invalid(format!(
            "Expected {} hour labels, got {}",
            HOURS_PER_DAY,
            labels.len()
        )));
    }

    let slots = labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let hour = label
                .parse::<TimeOfDay>()
                .map_err(|_| ScheduleError::invalid(format!("Unparseable hour label '{}'", label)))?
                .hour();
            Ok((label.to_string(), hour))
        })
        .collect::<ScheduleResult<Vec<_>>>()?;

    Ok(bin(slots, items))
}

/// Bin items into the standard 24-hour grid.
pub fn day_slots<'a, I>(items: I) -> Vec<HourSlot<'a>>
where
    I: IntoIterator,
    I::Item: Into<ScheduleItem<'a>>,
{
    let slots = (0..HOURS_PER_DAY as u32).map(|hour| (hour_label(hour), hour));
    bin(slots, items)
}

fn bin<'a, S, I>(slots: S, items: I) -> Vec<HourSlot<'a>>
where
    S: IntoIterator<Item = (String, u32)>,
    I: IntoIterator,
    I::Item: Into<ScheduleItem<'a>>,
{
    let items: Vec<ScheduleItem<'a>> = items.into_iter().map(Into::into).collect();

    slots
        .into_iter()
        .map(|(label, hour)| HourSlot {
            label,
            hour,
            items: items
                .iter()
                .filter(|item| item.start().hour() == hour)
                .copied()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, Suggestion};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn event(title: &str, start: &str, end: &str) -> Event {
        Event::new(title, start.parse().unwrap(), end.parse().unwrap(), date()).unwrap()
    }

    #[test]
    fn bins_by_start_hour_ignoring_minutes() {
        let events = vec![
            event("Gym", "07:00 AM", "08:30 AM"),
            event("Standup", "09:45", "10:00"),
            event("Work", "09:00", "17:00"),
        ];

        let slots = bin_by_hour(&hour_labels(), &events).unwrap();
        assert_eq!(slots.len(), 24);

        let titles = |hour: usize| slots[hour].items.iter().map(|i| i.title()).collect::<Vec<_>>();
        assert_eq!(titles(7), vec!["Gym"]);
        assert_eq!(titles(9), vec!["Standup", "Work"]);
        assert!(slots[8].is_empty());
        assert!(slots[17].is_empty());
    }

    #[test]
    fn afternoon_labels_match_afternoon_events() {
        let events = vec![event("Dinner", "07:00 PM", "09:00 PM")];
        let slots = bin_by_hour(&hour_labels(), &events).unwrap();

        assert!(slots[7].is_empty());
        assert_eq!(slots[19].items.len(), 1);
        assert_eq!(slots[19].label, "7:00 PM");
    }

    #[test]
    fn accepts_24_hour_labels() {
        let labels: Vec<String> = (0..24).map(|h| format!("{:02}:00", h)).collect();
        let events = vec![event("Late", "23:10", "23:50")];
        let slots = bin_by_hour(&labels, &events).unwrap();
        assert_eq!(slots[23].items.len(), 1);
    }

    #[test]
    fn rejects_wrong_label_count() {
        let labels = ["9:00 AM", "10:00 AM"];
        let events: Vec<Event> = Vec::new();
        let err = bin_by_hour(&labels, &events).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_unparseable_label() {
        let mut labels = hour_labels();
        labels[3] = "three o'clock".to_string();
        let events: Vec<Event> = Vec::new();
        assert!(bin_by_hour(&labels, &events).is_err());
    }

    #[test]
    fn mixes_events_and_suggestions() {
        let events = vec![event("Work", "09:00", "17:00")];
        let suggestion = Suggestion::new(
            "s1",
            "Reading Time",
            "",
            "08:30 PM".parse().unwrap(),
            "09:30 PM".parse().unwrap(),
            date(),
        )
        .unwrap();

        let items = events
            .iter()
            .map(ScheduleItem::from)
            .chain(std::iter::once(ScheduleItem::from(&suggestion)));
        let slots = day_slots(items);

        assert_eq!(slots[9].items[0].title(), "Work");
        assert!(slots[20].items[0].is_suggestion());
    }

    #[test]
    fn working_hours_are_flagged() {
        let slots = day_slots(Vec::<ScheduleItem>::new());
        assert!(!slots[8].is_working_hour());
        assert!(slots[9].is_working_hour());
        assert!(slots[17].is_working_hour());
        assert!(!slots[18].is_working_hour());
    }
}
