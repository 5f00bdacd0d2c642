//! Constants used throughout the application
//!
//! This module centralizes magic strings, messages, and other constant values
//! to improve maintainability and consistency.

// Locations
pub const APP_DIR_NAME: &str = "family-hub";
pub const CONFIG_FILE_NAME: &str = "family-hub.toml";
pub const LOG_FILE_NAME: &str = "family-hub.log";

// Status colors
/// Events that already started
pub const COLOR_PAST: &str = "#95a5a6";
/// Events happening today
pub const COLOR_TODAY: &str = "#e74c3c";
pub const COLOR_PRIORITY_LOW: &str = "#3498db";
pub const COLOR_PRIORITY_NORMAL: &str = "#2ecc71";
pub const COLOR_PRIORITY_HIGH: &str = "#f39c12";
pub const COLOR_PRIORITY_URGENT: &str = "#e74c3c";

// Defaults for new records
pub const DEFAULT_TAG_COLOR: &str = "#3498db";
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";
pub const DEFAULT_CATEGORY_EMOJI: &str = "📅";

// Limits
/// Reminders can be set up to seven days ahead
pub const MAX_REMINDER_MINUTES: i32 = 10_080;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Widest window for the upcoming events feed
pub const MAX_UPCOMING_DAYS: i64 = 365;
pub const MAX_UPLOAD_MB: u64 = 1024;
pub const MIN_TITLE_CHARS: usize = 2;
pub const MIN_TAG_NAME_CHARS: usize = 2;
pub const MEMBER_RECENT_PHOTOS: u64 = 10;
pub const RELATED_ITEMS_LIMIT: u64 = 6;
pub const RELATED_EVENTS_LIMIT: u64 = 5;

// Display text
pub const EVERYONE: &str = "everyone";
pub const ALL_DAY_SUFFIX: &str = "(all day)";
pub const RANGE_SEPARATOR: &str = " – ";

// Success Messages
pub const SUCCESS_EVENT_CREATED: &str = "✅ Event created";
pub const SUCCESS_EVENT_UPDATED: &str = "✅ Event updated";
pub const SUCCESS_EVENT_DELETED: &str = "✅ Event deleted";
pub const SUCCESS_CATEGORY_CREATED: &str = "✅ Category created";
pub const SUCCESS_MEMBER_CREATED: &str = "✅ Member registered";
pub const SUCCESS_TAG_CREATED: &str = "✅ Tag created";
pub const SUCCESS_PHOTO_UPLOADED: &str = "✅ Photo added";
pub const SUCCESS_FAVORITE_ADDED: &str = "⭐ Added to favorites";
pub const SUCCESS_FAVORITE_REMOVED: &str = "☆ Removed from favorites";

// Error Messages
pub const ERROR_EVENT_REJECTED: &str = "❌ Event not saved, please check the input";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
