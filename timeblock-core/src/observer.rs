//! Notifications for the hosting application.
//!
//! The schedule never persists anything itself. Hosts register observers to
//! save changes or show feedback after each transition completes.

use crate::event::{Event, Suggestion};

/// Synchronous callbacks invoked after a transition has been applied.
/// All methods default to doing nothing.
pub trait ScheduleObserver {
    fn event_added(&self, _event: &Event) {}

    fn suggestion_accepted(&self, _suggestion: &Suggestion, _event: &Event) {}

    fn suggestion_rejected(&self, _suggestion: &Suggestion) {}
}
