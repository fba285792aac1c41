//! Date range for filtering events.

use chrono::{Datelike, Duration, NaiveDate};

/// Days in a calendar week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        DateRange {
            from: date,
            to: date,
        }
    }

    /// The Monday-starting week containing `date`, cut short at the ends of
    /// the representable calendar.
    pub fn week_of(date: NaiveDate) -> Self {
        let from = start_of_week(date);
        DateRange {
            from,
            to: from
                .checked_add_signed(Duration::days(DAYS_PER_WEEK - 1))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let from = self.from;
        let len = (self.to - self.from).num_days() + 1;
        (0..len).filter_map(move |offset| from.checked_add_signed(Duration::days(offset)))
    }
}

/// Monday of the week containing `date`, or the first representable date.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))
        .unwrap_or(NaiveDate::MIN)
}
