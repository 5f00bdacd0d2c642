//! Family Hub - a household organizer
//!
//! This library keeps a family's shared data in a local SQLite database:
//! the member directory, a tagged photo gallery with albums, and a shared
//! event calendar with reminders and recurrence.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Database connection and schema
//! * [`repositories`] - Queries over the stored entities
//! * [`calendar`] - Event validation, presentation and calendar operations
//! * [`gallery`] - Photo uploads, browsing and tags
//! * [`family`] - Member registration and profiles
//! * [`seed`] - Sample data
//! * [`utils`] - Date, color and text helpers

/// Calendar validation, presentation and operations
pub mod calendar;

/// Closed value sets: roles, priorities, repeat cadences
pub mod choices;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Home screen counts
pub mod dashboard;

/// SeaORM entity models for database tables
pub mod entities;

/// Family directory
pub mod family;

/// Field-level input rules
pub mod forms;

/// Photo gallery
pub mod gallery;

/// Glyphs for priorities, roles and calendar markers
pub mod icons;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Sample data for new installations
pub mod seed;

/// Local SQLite storage
pub mod storage;

/// Utility functions for dates, colors and text
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{account, event, event_category, member, photo, photo_album, photo_tag};
