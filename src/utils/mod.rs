//! Utility modules for Family Hub.
//!
//! Small pure helpers shared across the calendar, gallery and family modules.
//!
//! - [`color`] - Hex color parsing and terminal color conversion
//! - [`date`] - Date formatting, relative labels, ages and week bounds
//! - [`text`] - Truncation and file name checks

pub mod color;
pub mod date;
pub mod text;
