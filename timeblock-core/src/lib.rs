//! Core types for timeblock.
//!
//! - `schedule::Schedule`, the view model over events and AI suggestions
//! - `slots` for binning entries into an hourly grid
//! - `onboarding` and `conversation` for the assistant's user context
//! - `config` for the on-disk settings

pub mod clock;
pub mod config;
pub mod conversation;
pub mod date_range;
pub mod error;
pub mod event;
pub mod observer;
pub mod onboarding;
pub mod schedule;
pub mod slots;
pub mod time_of_day;
pub mod view;

pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventDraft, ScheduleItem, Suggestion};
pub use schedule::{Schedule, ScheduleSettings};
pub use time_of_day::TimeOfDay;
pub use view::{ViewMode, ViewSelection};
