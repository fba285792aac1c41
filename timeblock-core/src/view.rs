//! View selection: which date, at what granularity, with or without suggestions.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::{ScheduleError, ScheduleResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelection {
    pub date: NaiveDate,
    pub mode: ViewMode,
    pub show_suggestions: bool,
}

impl ViewSelection {
    /// Day view of `date` with suggestions hidden.
    pub fn new(date: NaiveDate) -> Self {
        ViewSelection {
            date,
            mode: ViewMode::Day,
            show_suggestions: false,
        }
    }

    /// Dates whose events are visible under this selection.
    pub fn event_range(&self) -> DateRange {
        match self.mode {
            ViewMode::Day => DateRange::day(self.date),
            ViewMode::Week => DateRange::week_of(self.date),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            other => Err(ScheduleError::invalid(format!(
                "Unknown view mode '{}'. Expected 'day' or 'week'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_range_follows_mode() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let mut selection = ViewSelection::new(date);
        assert_eq!(selection.event_range(), DateRange::day(date));

        selection.mode = ViewMode::Week;
        assert_eq!(selection.event_range(), DateRange::week_of(date));
    }

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!("Week".parse::<ViewMode>().unwrap(), ViewMode::Week);
        assert_eq!("day".parse::<ViewMode>().unwrap(), ViewMode::Day);
        assert!("month".parse::<ViewMode>().is_err());
    }
}
