//! Parsing of user-supplied dates, times and durations.

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use timeblock_core::TimeOfDay;

/// Parse "YYYY-MM-DD" or natural language ("tomorrow", "next friday").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let dt = fuzzydate::parse(expand_abbreviations(input))
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

/// Short day and month names that fuzzydate only knows spelled out.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("tues", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("thur", "thursday"),
    ("thurs", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(short, _)| *short == word)
                .map_or(word, |(_, full)| full)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The given date, or today when none was given.
pub fn date_or_today(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    input
        .parse::<TimeOfDay>()
        .with_context(|| format!("Could not parse time: \"{}\"", input.trim()))
}

pub fn parse_duration(input: &str) -> Result<Duration> {
    let std_dur = humantime::parse_duration(input.trim()).map_err(|e| anyhow::anyhow!("{}", e))?;
    Duration::from_std(std_dur).context("Duration too large")
}

/// Human-readable label, e.g. "Today", "Tomorrow" or "Wed Feb 25".
pub fn format_date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso_date() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn parse_relative_date() {
        let today = Local::now().date_naive();
        let tomorrow = parse_date("tomorrow").unwrap();
        assert!(tomorrow > today - Duration::days(1));
    }

    #[test]
    fn abbreviations_are_spelled_out() {
        assert_eq!(expand_abbreviations("Next Tue"), "next tuesday");
        assert_eq!(expand_abbreviations("fri"), "friday");
        assert_eq!(expand_abbreviations("dec 25"), "december 25");
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }

    #[test]
    fn parse_abbreviated_weekday() {
        use chrono::{Datelike, Weekday};
        assert_eq!(parse_date("next fri").unwrap().weekday(), Weekday::Fri);
        assert_eq!(parse_date("next tue").unwrap().weekday(), Weekday::Tue);
    }

    #[test]
    fn parse_date_rejects_nonsense() {
        assert!(parse_date("not a date at all xyz").is_err());
    }

    #[test]
    fn parse_time_accepts_display_format() {
        assert_eq!(parse_time("06:30 PM").unwrap(), TimeOfDay::from_hm(18, 30).unwrap());
        assert!(parse_time("half past").is_err());
    }

    #[test]
    fn parse_duration_strings() {
        assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("2h 30m").unwrap(), Duration::minutes(150));
        assert!(parse_duration("a while").is_err());
    }

    #[test]
    fn date_labels() {
        let today = Local::now().date_naive();
        assert_eq!(format_date_label(today), "Today");
        assert_eq!(format_date_label(today + Duration::days(1)), "Tomorrow");

        let fixed = NaiveDate::from_ymd_opt(2000, 2, 23).unwrap();
        assert_eq!(format_date_label(fixed), "Wed Feb 23");
    }
}
