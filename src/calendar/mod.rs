//! Shared family calendar
//!
//! Validation and presentation are pure functions of an event and "today";
//! [`CalendarService`] ties them to the repositories.

pub mod presenter;
pub mod service;
pub mod validation;

pub use presenter::{EventPresenter, EventStatus, EventView};
pub use service::{CalendarOverview, CalendarService, EventDetail, UpcomingItem};
pub use validation::{EventDraft, EventInputError, EventValidationError, Schedule};
