//! Calendar events, AI suggestions and the drafts used to create events.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::time_of_day::TimeOfDay;

/// A committed calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub date: NaiveDate,
    /// Regular commitment (work, gym, ...)
    #[serde(default)]
    pub recurring: bool,
    /// Display color hint, e.g. "blue"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A proposed time block from the planning assistant, awaiting accept/reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub date: NaiveDate,
}

/// A partially specified event. Missing fields are filled in by
/// [`Schedule::add_event`](crate::schedule::Schedule::add_event).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub date: Option<NaiveDate>,
    pub recurring: Option<bool>,
    pub color: Option<String>,
}

/// Either kind of entry that can occupy an hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleItem<'a> {
    Event(&'a Event),
    Suggestion(&'a Suggestion),
}

/// Generate a fresh opaque event identifier.
pub(crate) fn new_event_id() -> String {
    format!("evt-{}", uuid::Uuid::new_v4())
}

fn validate_entry(title: &str, start: TimeOfDay, end: TimeOfDay) -> ScheduleResult<()> {
    if title.trim().is_empty() {
        return Err(ScheduleError::invalid("Title must not be empty"));
    }
    if start >= end {
        return Err(ScheduleError::invalid(format!(
            "End time {} must be after start time {}",
            end, start
        )));
    }
    Ok(())
}

impl Event {
    /// Create an event with a freshly minted identifier.
    pub fn new(
        title: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
        date: NaiveDate,
    ) -> ScheduleResult<Self> {
        let event = Event {
            id: new_event_id(),
            title: title.into(),
            start,
            end,
            date,
            recurring: false,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        validate_entry(&self.title, self.start, self.end)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
        date: NaiveDate,
    ) -> ScheduleResult<Self> {
        let suggestion = Suggestion {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            start,
            end,
            date,
        };
        suggestion.validate()?;
        Ok(suggestion)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        validate_entry(&self.title, self.start, self.end)
    }

    /// Commit this suggestion as an event. The suggestion's identifier is
    /// not carried over.
    pub(crate) fn into_event(self, color: Option<String>) -> Event {
        Event {
            id: new_event_id(),
            title: self.title,
            start: self.start,
            end: self.end,
            date: self.date,
            recurring: false,
            color,
        }
    }
}

impl EventDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        EventDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn start(mut self, start: TimeOfDay) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: TimeOfDay) -> Self {
        self.end = Some(end);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = Some(recurring);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl<'a> ScheduleItem<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            ScheduleItem::Event(e) => &e.id,
            ScheduleItem::Suggestion(s) => &s.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            ScheduleItem::Event(e) => &e.title,
            ScheduleItem::Suggestion(s) => &s.title,
        }
    }

    pub fn start(&self) -> TimeOfDay {
        match self {
            ScheduleItem::Event(e) => e.start,
            ScheduleItem::Suggestion(s) => s.start,
        }
    }

    pub fn end(&self) -> TimeOfDay {
        match self {
            ScheduleItem::Event(e) => e.end,
            ScheduleItem::Suggestion(s) => s.end,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            ScheduleItem::Event(e) => e.date,
            ScheduleItem::Suggestion(s) => s.date,
        }
    }

    pub fn is_suggestion(&self) -> bool {
        matches!(self, ScheduleItem::Suggestion(_))
    }
}

impl<'a> From<&'a Event> for ScheduleItem<'a> {
    fn from(event: &'a Event) -> Self {
        ScheduleItem::Event(event)
    }
}

impl<'a> From<&'a Suggestion> for ScheduleItem<'a> {
    fn from(suggestion: &'a Suggestion) -> Self {
        ScheduleItem::Suggestion(suggestion)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
