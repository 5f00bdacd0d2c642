use chrono::{NaiveDate, NaiveTime};
use family_hub::utils::date::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(d(2023, 12, 25)), "2023-12-25");
    assert_eq!(parse_date(" 2023-12-25 ").unwrap(), d(2023, 12, 25));
    assert!(parse_date("25/12/2023").is_err());
}

#[test]
fn test_format_long() {
    assert_eq!(format_long(d(2025, 3, 10)), "March 10, 2025");
}

#[test]
fn test_parse_time_accepts_optional_seconds() {
    assert_eq!(parse_time("14:00").unwrap(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    assert_eq!(parse_time("09:30:15").unwrap(), NaiveTime::from_hms_opt(9, 30, 15).unwrap());
    assert!(parse_time("25:00").is_err());
}

#[test]
fn test_calculate_age() {
    let birthday = d(1990, 6, 15);
    assert_eq!(calculate_age(birthday, d(2025, 6, 14)), Some(34));
    assert_eq!(calculate_age(birthday, d(2025, 6, 15)), Some(35));
    assert_eq!(calculate_age(birthday, d(1990, 6, 15)), Some(0));
    assert_eq!(calculate_age(birthday, d(1989, 1, 1)), None);
}

#[test]
fn test_week_bounds() {
    // 2025-03-12 is a Wednesday
    assert_eq!(week_bounds(d(2025, 3, 12)), (d(2025, 3, 10), d(2025, 3, 16)));
    // Sunday belongs to the week that started the previous Monday
    assert_eq!(week_bounds(d(2025, 3, 16)), (d(2025, 3, 10), d(2025, 3, 16)));
    assert_eq!(week_bounds(d(2025, 3, 10)), (d(2025, 3, 10), d(2025, 3, 16)));
}

#[test]
fn test_relative_label() {
    let today = d(2025, 3, 10); // Monday
    assert_eq!(relative_label(today, today), "today");
    assert_eq!(relative_label(d(2025, 3, 11), today), "tomorrow");
    assert_eq!(relative_label(d(2025, 3, 9), today), "yesterday");
    assert_eq!(relative_label(d(2025, 3, 14), today), "next Friday");
    assert_eq!(relative_label(d(2025, 3, 25), today), "in 15 days");
    assert_eq!(relative_label(d(2025, 6, 1), today), "Jun 01");
    assert_eq!(relative_label(d(2026, 6, 1), today), "Jun 01, 2026");
}

#[test]
fn test_format_validation() {
    assert!(is_valid_format("%d/%m/%Y"));
    assert!(!is_valid_format("%Q"));
}
