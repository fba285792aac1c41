//! Wall-clock time of day, stored as minutes since midnight.
//!
//! Display strings like "09:00 AM" only exist at the edges: they are parsed
//! into a `TimeOfDay` on the way in and rendered back on the way out.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Last representable minute of the day (23:59).
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        minutes: MINUTES_PER_DAY - 1,
    };

    /// Latest start that still leaves a minute before [`Self::END_OF_DAY`].
    pub const LATEST_START: TimeOfDay = TimeOfDay {
        minutes: MINUTES_PER_DAY - 2,
    };

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(TimeOfDay {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY as u32 {
            return None;
        }
        Some(TimeOfDay {
            minutes: minutes as u16,
        })
    }

    /// Truncates seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        TimeOfDay {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    pub fn hour(&self) -> u32 {
        self.minutes as u32 / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes as u32 % 60
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes as u32
    }

    /// Add a duration, returning None if the result leaves the day.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let total = self.minutes as i64 + duration.num_minutes();
        if total < 0 {
            return None;
        }
        TimeOfDay::from_minutes(u32::try_from(total).ok()?)
    }

    /// Subtract a duration, returning None if the result leaves the day.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        self.checked_add(-duration)
    }

    /// Render as a 12-hour clock string, e.g. "06:30 PM".
    pub fn to_12h(&self) -> String {
        let (hour, meridiem) = to_12h_parts(self.hour());
        format!("{:02}:{:02} {}", hour, self.minute(), meridiem)
    }
}

fn to_12h_parts(hour: u32) -> (u32, &'static str) {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour, meridiem)
}

/// Label for an hour slot as the calendar grid shows it, e.g. "1:00 PM".
pub fn hour_label(hour: u32) -> String {
    let (display, meridiem) = to_12h_parts(hour);
    format!("{}:00 {}", display, meridiem)
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Accepts "17:00", "9:30", "09:00 AM", "6:30pm" and "9am".
impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let invalid = || ScheduleError::invalid(format!("Invalid time of day '{}'", s.trim()));

        let (clock, meridiem) = split_meridiem(&lower);

        let (hour_str, minute_str) = match clock.split_once(':') {
            Some((h, m)) => (h, m),
            None if meridiem.is_some() => (clock, "0"),
            None => return Err(invalid()),
        };

        let hour: u32 = hour_str.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.trim().parse().map_err(|_| invalid())?;

        let hour = match meridiem {
            Some(m) => {
                if !(1..=12).contains(&hour) {
                    return Err(invalid());
                }
                match m {
                    Meridiem::Am => hour % 12,
                    Meridiem::Pm => hour % 12 + 12,
                }
            }
            None => hour,
        };

        TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
    }
}

fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    if let Some(rest) = s.strip_suffix("am") {
        (rest.trim_end(), Some(Meridiem::Am))
    } else if let Some(rest) = s.strip_suffix("pm") {
        (rest.trim_end(), Some(Meridiem::Pm))
    } else {
        (s, None)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> ScheduleResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn parses_24_hour_clock() {
        assert_eq!(t("17:00"), TimeOfDay::from_hm(17, 0).unwrap());
        assert_eq!(t("9:30"), TimeOfDay::from_hm(9, 30).unwrap());
        assert_eq!(t("00:00"), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn parses_12_hour_display_strings() {
        assert_eq!(t("09:00 AM"), TimeOfDay::from_hm(9, 0).unwrap());
        assert_eq!(t("05:00 PM"), TimeOfDay::from_hm(17, 0).unwrap());
        assert_eq!(t("6:30pm"), TimeOfDay::from_hm(18, 30).unwrap());
        assert_eq!(t("9am"), TimeOfDay::from_hm(9, 0).unwrap());
    }

    #[test]
    fn twelve_oclock_edge_cases() {
        assert_eq!(t("12:00 AM"), TimeOfDay::MIDNIGHT);
        assert_eq!(t("12:15 PM"), TimeOfDay::from_hm(12, 15).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "25:00", "10:75", "13:00 PM", "0 am", "noon", "9"] {
            let err = bad.parse::<TimeOfDay>().unwrap_err();
            assert!(err.is_validation(), "expected validation error for {bad:?}");
        }
    }

    #[test]
    fn display_formats() {
        let time = TimeOfDay::from_hm(18, 5).unwrap();
        assert_eq!(time.to_string(), "18:05");
        assert_eq!(time.to_12h(), "06:05 PM");
        assert_eq!(TimeOfDay::MIDNIGHT.to_12h(), "12:00 AM");
    }

    #[test]
    fn hour_labels_match_grid() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(1), "1:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
    }

    #[test]
    fn checked_arithmetic_stays_within_day() {
        let time = t("22:30");
        assert_eq!(time.checked_add(Duration::hours(1)), Some(t("23:30")));
        assert_eq!(time.checked_add(Duration::hours(2)), None);
        assert_eq!(t("00:30").checked_sub(Duration::hours(1)), None);
    }

    #[test]
    fn serde_uses_24_hour_strings() {
        let json = serde_json::to_string(&t("7:05 PM")).unwrap();
        assert_eq!(json, "\"19:05\"");
        let back: TimeOfDay = serde_json::from_str("\"08:30 AM\"").unwrap();
        assert_eq!(back, t("08:30"));
        assert!(serde_json::from_str::<TimeOfDay>("\"later\"").is_err());
    }
}
