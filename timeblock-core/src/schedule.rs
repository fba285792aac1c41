//! The schedule view model.
//!
//! Owns the user's events and pending suggestions, derives what is visible
//! for the current [`ViewSelection`], and applies user-initiated transitions.
//! Every mutation runs to completion before returning; a failed operation
//! leaves both collections untouched.

use std::collections::HashSet;
use std::fmt;

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::date_range::{DAYS_PER_WEEK, DateRange};
use crate::error::{ScheduleError, ScheduleResult};
use crate::event::{Event, EventDraft, ScheduleItem, Suggestion, new_event_id};
use crate::observer::ScheduleObserver;
use crate::slots::{HourSlot, day_slots};
use crate::time_of_day::TimeOfDay;
use crate::view::{ViewMode, ViewSelection};

/// Defaults applied when creating events and opening the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    /// Length of an event added without an end time
    pub default_duration: Duration,
    /// Color given to events created from accepted suggestions
    pub accepted_color: Option<String>,
    pub show_suggestions: bool,
    pub default_view: ViewMode,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        ScheduleSettings {
            default_duration: Duration::hours(1),
            accepted_color: Some("indigo".to_string()),
            show_suggestions: false,
            default_view: ViewMode::Day,
        }
    }
}

/// One day of the week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    pub slots: Vec<HourSlot<'a>>,
}

pub struct Schedule {
    events: Vec<Event>,
    suggestions: Vec<Suggestion>,
    selection: ViewSelection,
    settings: ScheduleSettings,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn ScheduleObserver>>,
}

impl Schedule {
    /// Build a schedule from externally loaded collections. The selection
    /// starts on the clock's current date in day view.
    ///
    /// Fails with a validation error if any entry breaks its invariants or if
    /// an identifier appears twice in the same collection.
    pub fn new(
        events: Vec<Event>,
        suggestions: Vec<Suggestion>,
        clock: impl Clock + 'static,
    ) -> ScheduleResult<Self> {
        check_unique("event", events.iter().map(|e| e.id.as_str()))?;
        check_unique("suggestion", suggestions.iter().map(|s| s.id.as_str()))?;

        for event in &events {
            event.validate()?;
        }
        for suggestion in &suggestions {
            suggestion.validate()?;
        }

        let today = clock.now().date();

        Ok(Schedule {
            events,
            suggestions,
            selection: ViewSelection::new(today),
            settings: ScheduleSettings::default(),
            clock: Box::new(clock),
            observers: Vec::new(),
        })
    }

    pub fn with_settings(mut self, settings: ScheduleSettings) -> Self {
        self.selection.mode = settings.default_view;
        self.selection.show_suggestions = settings.show_suggestions;
        self.settings = settings;
        self
    }

    pub fn with_observer(mut self, observer: impl ScheduleObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn add_observer(&mut self, observer: impl ScheduleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn find_suggestion(&self, id: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }

    /// Hand the collections back to the host, e.g. for persistence.
    pub fn into_parts(self) -> (Vec<Event>, Vec<Suggestion>) {
        (self.events, self.suggestions)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.date = date;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.selection.mode = mode;
    }

    pub fn set_suggestions_visible(&mut self, visible: bool) {
        self.selection.show_suggestions = visible;
    }

    /// Flip suggestion visibility, returning the new state.
    pub fn toggle_suggestions(&mut self) -> bool {
        self.selection.show_suggestions = !self.selection.show_suggestions;
        self.selection.show_suggestions
    }

    /// Move the selected date by whole weeks (negative goes back), stopping
    /// at the first or last representable date.
    pub fn shift_week(&mut self, weeks: i64) {
        let date = self.selection.date;
        let shifted = weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(Duration::try_days)
            .and_then(|offset| date.checked_add_signed(offset));

        self.selection.date = match shifted {
            Some(date) => date,
            None if weeks < 0 => NaiveDate::MIN,
            None => NaiveDate::MAX,
        };
    }

    pub fn go_to_today(&mut self) {
        self.selection.date = self.clock.now().date();
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Events on the selected day, or in the Monday-starting week containing
    /// it, in insertion order. Recomputed on every call.
    pub fn visible_events(&self) -> impl Iterator<Item = &Event> + '_ {
        let range = self.selection.event_range();
        self.events.iter().filter(move |e| range.contains(e.date))
    }

    /// Suggestions for the selected day when suggestions are shown. Always
    /// day scoped, even in week view.
    pub fn visible_suggestions(&self) -> impl Iterator<Item = &Suggestion> + '_ {
        let ViewSelection {
            date,
            show_suggestions,
            ..
        } = self.selection;
        self.suggestions
            .iter()
            .filter(move |s| show_suggestions && s.date == date)
    }

    /// Hourly grid for the selected date: its events plus visible suggestions.
    pub fn day_grid(&self) -> Vec<HourSlot<'_>> {
        let date = self.selection.date;
        let events = self
            .events
            .iter()
            .filter(move |e| e.date == date)
            .map(ScheduleItem::from);
        let suggestions = self.visible_suggestions().map(ScheduleItem::from);

        day_slots(events.chain(suggestions))
    }

    /// Hourly grid for each day of the selected week, Monday first.
    pub fn week_grid(&self) -> Vec<DayColumn<'_>> {
        DateRange::week_of(self.selection.date)
            .days()
            .map(|date| DayColumn {
                date,
                slots: day_slots(self.events.iter().filter(|e| e.date == date)),
            })
            .collect()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Commit a suggestion as a new event with a fresh identifier.
    pub fn accept_suggestion(&mut self, id: &str) -> ScheduleResult<&Event> {
        let index = self.suggestion_index(id)?;

        let suggestion = self.suggestions.remove(index);
        let event = suggestion
            .clone()
            .into_event(self.settings.accepted_color.clone());

        debug!(suggestion = %suggestion.id, event = %event.id, "accepted suggestion");
        self.events.push(event);

        let event = &self.events[self.events.len() - 1];
        for observer in &self.observers {
            observer.suggestion_accepted(&suggestion, event);
        }

        Ok(event)
    }

    /// Drop a suggestion without creating an event.
    pub fn reject_suggestion(&mut self, id: &str) -> ScheduleResult<Suggestion> {
        let index = self.suggestion_index(id)?;

        let suggestion = self.suggestions.remove(index);
        debug!(suggestion = %suggestion.id, "rejected suggestion");

        for observer in &self.observers {
            observer.suggestion_rejected(&suggestion);
        }

        Ok(suggestion)
    }

    /// Add an event from a draft, filling in whatever the draft leaves out:
    /// the date defaults to the selected date, a missing end is one default
    /// duration after the start, a missing start is one default duration
    /// before the end, and with neither the event starts now. Defaulted ends
    /// are clamped to the end of the day.
    ///
    /// "Now" after 23:58 starts the event at 23:58 so it keeps at least one
    /// minute. An explicit start of 23:59 with no end has no room left and
    /// fails validation.
    pub fn add_event(&mut self, draft: EventDraft) -> ScheduleResult<&Event> {
        let title = draft.title.trim();
        if title.is_empty() {
            warn!("refusing to add event without a title");
            return Err(ScheduleError::invalid("Title must not be empty"));
        }

        let duration = self.settings.default_duration;
        let after = |start: TimeOfDay| start.checked_add(duration).unwrap_or(TimeOfDay::END_OF_DAY);

        let (start, end) = match (draft.start, draft.end) {
            (Some(start), Some(end)) => (start, end),
            (Some(start), None) => (start, after(start)),
            (None, Some(end)) => (
                end.checked_sub(duration).unwrap_or(TimeOfDay::MIDNIGHT),
                end,
            ),
            (None, None) => {
                let now = TimeOfDay::from_naive_time(self.clock.now().time())
                    .min(TimeOfDay::LATEST_START);
                (now, after(now))
            }
        };

        let event = Event {
            id: new_event_id(),
            title: title.to_string(),
            start,
            end,
            date: draft.date.unwrap_or(self.selection.date),
            recurring: draft.recurring.unwrap_or(false),
            color: draft.color,
        };
        event.validate()?;

        debug!(event = %event.id, date = %event.date, start = %event.start, "added event");
        self.events.push(event);

        let event = &self.events[self.events.len() - 1];
        for observer in &self.observers {
            observer.event_added(event);
        }

        Ok(event)
    }

    /// Discard an event from the in-memory list.
    pub fn remove_event(&mut self, id: &str) -> ScheduleResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ScheduleError::NotFound {
                kind: "Event",
                id: id.to_string(),
            })?;

        let event = self.events.remove(index);
        debug!(event = %event.id, "removed event");
        Ok(event)
    }

    /// Feed in suggestions produced by an external planner. Either all are
    /// added or, on any invalid entry or clashing identifier, none are.
    pub fn add_suggestions(&mut self, incoming: Vec<Suggestion>) -> ScheduleResult<usize> {
        for suggestion in &incoming {
            suggestion.validate()?;
        }
        check_unique(
            "suggestion",
            self.suggestions
                .iter()
                .chain(incoming.iter())
                .map(|s| s.id.as_str()),
        )?;

        let count = incoming.len();
        self.suggestions.extend(incoming);
        debug!(count, "added suggestions");
        Ok(count)
    }

    fn suggestion_index(&self, id: &str) -> ScheduleResult<usize> {
        self.suggestions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| {
                warn!(suggestion = id, "no such suggestion");
                ScheduleError::suggestion_not_found(id)
            })
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> ScheduleResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ScheduleError::invalid(format!(
                "Duplicate {} id '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

impl fmt::Debug for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schedule")
            .field("events", &self.events)
            .field("suggestions", &self.suggestions)
            .field("selection", &self.selection)
            .field("settings", &self.settings)
            .field("clock", &self.clock)
            .field("observers", &self.observers.len())
            .finish()
    }
}
