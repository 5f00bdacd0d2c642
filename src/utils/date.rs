//! Date utility functions
//!
//! Everything here takes "today" as an argument; callers decide which clock
//! applies.

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};

/// Storage and interchange format for dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default display format for times of day
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date string in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), ISO_DATE_FORMAT)
}

/// Parse a time of day as HH:MM, seconds optional
pub fn parse_time(time_str: &str) -> Result<NaiveTime, chrono::ParseError> {
    let trimmed = time_str.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether a strftime pattern contains only recognized specifiers
pub fn is_valid_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

/// Long form such as "March 10, 2025"
pub fn format_long(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// Completed years between `birthday` and `today`, `None` for future birthdays
pub fn calculate_age(birthday: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birthday > today {
        return None;
    }
    let had_birthday = (today.month(), today.day()) >= (birthday.month(), birthday.day());
    let years = today.year() - birthday.year() - i32::from(!had_birthday);
    u32::try_from(years).ok()
}

/// Monday and Sunday of the week containing `day`
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Human label for `date` relative to `today` ("today", "next Friday", "in 12 days", ...)
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}
