//! Display values derived from a stored event and the current date
//!
//! Nothing here is used to filter queries; the repositories express those
//! directly against stored columns.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::choices::Priority;
use crate::config::DisplayConfig;
use crate::constants::{
    ALL_DAY_SUFFIX, COLOR_PAST, COLOR_PRIORITY_HIGH, COLOR_PRIORITY_LOW, COLOR_PRIORITY_NORMAL,
    COLOR_PRIORITY_URGENT, COLOR_TODAY, EVERYONE, RANGE_SEPARATOR,
};
use crate::entities::{event, member};
use crate::icons::IconService;
use crate::utils::date::{self, ISO_DATE_FORMAT, TIME_FORMAT};

/// Where an event sits relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Past,
    Today,
    Upcoming(Priority),
}

impl EventStatus {
    pub fn of(event: &event::Model, today: NaiveDate) -> Self {
        if event.start_date < today {
            EventStatus::Past
        } else if event.start_date == today {
            EventStatus::Today
        } else {
            EventStatus::Upcoming(event.priority())
        }
    }

    /// Hex color for this status
    pub fn color(self) -> &'static str {
        match self {
            EventStatus::Past => COLOR_PAST,
            EventStatus::Today => COLOR_TODAY,
            EventStatus::Upcoming(priority) => priority_color(priority),
        }
    }
}

pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => COLOR_PRIORITY_LOW,
        Priority::Normal => COLOR_PRIORITY_NORMAL,
        Priority::High => COLOR_PRIORITY_HIGH,
        Priority::Urgent => COLOR_PRIORITY_URGENT,
    }
}

pub fn status_color(event: &event::Model, today: NaiveDate) -> &'static str {
    EventStatus::of(event, today).color()
}

pub fn is_today(event: &event::Model, today: NaiveDate) -> bool {
    event.start_date == today
}

/// Today counts as upcoming
pub fn is_upcoming(event: &event::Model, today: NaiveDate) -> bool {
    event.start_date >= today
}

/// An event flattened for printing or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    pub id: Uuid,
    pub title: String,
    pub start_date: NaiveDate,
    pub when: String,
    pub relative: String,
    pub priority: Priority,
    pub priority_glyph: &'static str,
    pub color: &'static str,
    pub participants: String,
    pub location: String,
    pub is_today: bool,
    pub is_upcoming: bool,
    pub is_recurring: bool,
}

/// Renders events for one day using the configured formats and icon theme
#[derive(Debug, Clone)]
pub struct EventPresenter {
    today: NaiveDate,
    icons: IconService,
    date_format: String,
    time_format: String,
}

impl EventPresenter {
    pub fn new(today: NaiveDate, display: &DisplayConfig) -> Self {
        Self {
            today,
            icons: IconService::new(display.icon_theme),
            date_format: display.date_format.clone(),
            time_format: display.time_format.clone(),
        }
    }

    /// ISO dates, 24h times and emoji icons
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            today,
            icons: IconService::default(),
            date_format: ISO_DATE_FORMAT.to_string(),
            time_format: TIME_FORMAT.to_string(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn status(&self, event: &event::Model) -> EventStatus {
        EventStatus::of(event, self.today)
    }

    pub fn status_color(&self, event: &event::Model) -> &'static str {
        status_color(event, self.today)
    }

    pub fn priority_glyph(&self, event: &event::Model) -> &'static str {
        self.icons.priority(event.priority())
    }

    pub fn is_today(&self, event: &event::Model) -> bool {
        is_today(event, self.today)
    }

    pub fn is_upcoming(&self, event: &event::Model) -> bool {
        is_upcoming(event, self.today)
    }

    pub fn format_date(&self, d: NaiveDate) -> String {
        d.format(&self.date_format).to_string()
    }

    /// "2025-03-10 – 2025-03-12 (all day)", "2025-03-10 (all day)" or
    /// "2025-03-10 14:00 – 15:30"
    pub fn duration(&self, event: &event::Model) -> String {
        let start = self.format_date(event.start_date);

        if event.is_all_day {
            return match event.end_date {
                Some(end) if end != event.start_date => {
                    format!("{start}{RANGE_SEPARATOR}{} {ALL_DAY_SUFFIX}", self.format_date(end))
                }
                _ => format!("{start} {ALL_DAY_SUFFIX}"),
            };
        }

        let mut out = start;
        if let Some(start_time) = event.start_time {
            out.push(' ');
            out.push_str(&start_time.format(&self.time_format).to_string());
        }
        if let Some(end_time) = event.end_time {
            out.push_str(RANGE_SEPARATOR);
            out.push_str(&end_time.format(&self.time_format).to_string());
        }
        out
    }

    /// Comma-separated names, or "everyone" when nobody is listed
    pub fn participants(&self, participants: &[member::Model]) -> String {
        if participants.is_empty() {
            return EVERYONE.to_string();
        }
        participants
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn relative_date(&self, event: &event::Model) -> String {
        date::relative_label(event.start_date, self.today)
    }

    pub fn present(&self, event: &event::Model, participants: &[member::Model]) -> EventView {
        EventView {
            id: event.uuid,
            title: event.title.clone(),
            start_date: event.start_date,
            when: self.duration(event),
            relative: self.relative_date(event),
            priority: event.priority(),
            priority_glyph: self.priority_glyph(event),
            color: self.status_color(event),
            participants: self.participants(participants),
            location: event.location.clone(),
            is_today: self.is_today(event),
            is_upcoming: self.is_upcoming(event),
            is_recurring: event.repeat().is_recurring(),
        }
    }
}
