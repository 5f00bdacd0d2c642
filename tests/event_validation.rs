use chrono::{Duration, NaiveDate, NaiveTime};
use family_hub::calendar::{EventDraft, EventInputError, EventValidationError, Schedule};
use family_hub::choices::Repeat;
use family_hub::forms::FormError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_end_date_before_start_is_rejected() {
    let schedule = Schedule {
        end_date: Some(date(2025, 3, 8)),
        ..Schedule::all_day(date(2025, 3, 10))
    };
    assert_eq!(schedule.validate(), Err(EventValidationError::EndBeforeStart));
}

#[test]
fn test_end_date_before_start_always_rejects() {
    let start = date(2025, 3, 10);
    for back in 1..40 {
        for is_all_day in [true, false] {
            let schedule = Schedule {
                end_date: Some(start - Duration::days(back)),
                is_all_day,
                ..Schedule::timed(start, time(9, 0), Some(time(10, 0)))
            };
            assert_eq!(schedule.validate(), Err(EventValidationError::EndBeforeStart));
        }
    }
}

#[test]
fn test_same_time_is_not_after() {
    let schedule = Schedule {
        end_date: Some(date(2025, 3, 10)),
        ..Schedule::timed(date(2025, 3, 10), time(14, 0), Some(time(14, 0)))
    };
    assert_eq!(schedule.validate(), Err(EventValidationError::EndTimeNotAfterStart));
}

#[test]
fn test_missing_end_date_counts_as_same_day() {
    let schedule = Schedule::timed(date(2025, 3, 10), time(14, 0), Some(time(13, 59)));
    assert_eq!(schedule.validate(), Err(EventValidationError::EndTimeNotAfterStart));
}

#[test]
fn test_same_day_times_compare_strictly() {
    let day = date(2025, 3, 10);
    for start_hour in 0..24 {
        for end_hour in 0..24 {
            let schedule = Schedule::timed(day, time(start_hour, 0), Some(time(end_hour, 0)));
            let expected = if end_hour > start_hour {
                Ok(())
            } else {
                Err(EventValidationError::EndTimeNotAfterStart)
            };
            assert_eq!(schedule.validate(), expected, "{}:00 - {}:00", start_hour, end_hour);
        }
    }
}

#[test]
fn test_start_time_alone_is_fine() {
    let schedule = Schedule::timed(date(2025, 3, 10), time(14, 0), None);
    assert_eq!(schedule.validate(), Ok(()));
}

#[test]
fn test_weekly_repeat_until_start_is_rejected() {
    let schedule = Schedule {
        repeat: Repeat::Weekly,
        repeat_until: Some(date(2025, 3, 10)),
        ..Schedule::all_day(date(2025, 3, 10))
    };
    assert_eq!(schedule.validate(), Err(EventValidationError::RepeatEndNotAfterStart));
}

#[test]
fn test_repeat_until_ignored_without_repeat() {
    let start = date(2025, 3, 10);
    for offset in -10..10 {
        let until = Some(start + Duration::days(offset));
        let none = Schedule {
            repeat: Repeat::None,
            repeat_until: until,
            ..Schedule::all_day(start)
        };
        assert_eq!(none.validate(), Ok(()));

        for repeat in [Repeat::Daily, Repeat::Weekly, Repeat::Monthly, Repeat::Yearly] {
            let recurring = Schedule {
                repeat,
                repeat_until: until,
                ..Schedule::all_day(start)
            };
            let expected = if offset > 0 {
                Ok(())
            } else {
                Err(EventValidationError::RepeatEndNotAfterStart)
            };
            assert_eq!(recurring.validate(), expected);
        }
    }
}

#[test]
fn test_first_failure_is_reported() {
    // Breaks the time rule and the repeat rule; only the time rule is reported
    let schedule = Schedule {
        repeat: Repeat::Daily,
        repeat_until: Some(date(2025, 3, 1)),
        ..Schedule::timed(date(2025, 3, 10), time(15, 0), Some(time(9, 0)))
    };
    assert_eq!(schedule.validate(), Err(EventValidationError::EndTimeNotAfterStart));
}

#[test]
fn test_draft_checks_reminder_range() {
    let mut draft = EventDraft::new("Dentist", Schedule::all_day(date(2025, 3, 10)));
    assert_eq!(draft.validate(), Ok(()));

    draft.reminder_minutes = 10_081;
    assert_eq!(
        draft.validate(),
        Err(EventInputError::Form(FormError::OutOfRange {
            field: "reminder minutes",
            min: 0,
            max: 10_080
        }))
    );

    draft.reminder_minutes = 10_080;
    draft.schedule.end_date = Some(date(2025, 3, 9));
    assert_eq!(
        draft.validate(),
        Err(EventInputError::Schedule(EventValidationError::EndBeforeStart))
    );
}
