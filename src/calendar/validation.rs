//! Checks run on a candidate event before it is saved
//!
//! Rules are applied in a fixed order and the first failure is the one
//! reported. Nothing here touches the database.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::choices::{Priority, Repeat};
use crate::constants::MAX_REMINDER_MINUTES;
use crate::forms::{self, FormError};

/// Why an event's dates, times or recurrence were rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    #[error("end date is before the start date")]
    EndBeforeStart,

    #[error("end time must be after the start time")]
    EndTimeNotAfterStart,

    #[error("repeat end date must be after the start date")]
    RepeatEndNotAfterStart,
}

/// Date, time and recurrence fields of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_all_day: bool,
    pub repeat: Repeat,
    pub repeat_until: Option<NaiveDate>,
}

impl Schedule {
    /// A single all-day occurrence on `start_date`
    pub fn all_day(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            start_time: None,
            end_time: None,
            is_all_day: true,
            repeat: Repeat::None,
            repeat_until: None,
        }
    }

    /// A timed occurrence on `start_date`
    pub fn timed(start_date: NaiveDate, start_time: NaiveTime, end_time: Option<NaiveTime>) -> Self {
        Self {
            start_date,
            end_date: None,
            start_time: Some(start_time),
            end_time,
            is_all_day: false,
            repeat: Repeat::None,
            repeat_until: None,
        }
    }

    /// Last day of the occurrence; a missing end date means the start date
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                return Err(EventValidationError::EndBeforeStart);
            }
        }

        if let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) {
            let same_day = self.effective_end_date() == self.start_date;
            if same_day && !self.is_all_day && end_time <= start_time {
                return Err(EventValidationError::EndTimeNotAfterStart);
            }
        }

        if self.repeat.is_recurring() {
            if let Some(until) = self.repeat_until {
                if until <= self.start_date {
                    return Err(EventValidationError::RepeatEndNotAfterStart);
                }
            }
        }

        Ok(())
    }
}

/// Any reason a submitted event is turned away
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventInputError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Schedule(#[from] EventValidationError),
}

/// Everything a user submits to create or replace an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub schedule: Schedule,
    pub category: Option<Uuid>,
    /// Empty means everyone takes part
    pub participants: Vec<Uuid>,
    pub priority: Priority,
    pub is_reminder_enabled: bool,
    pub reminder_minutes: i32,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            location: String::new(),
            schedule,
            category: None,
            participants: Vec::new(),
            priority: Priority::default(),
            is_reminder_enabled: true,
            reminder_minutes: 60,
        }
    }

    /// Field rules first, then the schedule rules
    pub fn validate(&self) -> Result<(), EventInputError> {
        forms::required("title", &self.title)?;
        forms::in_range(
            "reminder minutes",
            i64::from(self.reminder_minutes),
            0,
            i64::from(MAX_REMINDER_MINUTES),
        )?;
        self.schedule.validate()?;
        Ok(())
    }
}
