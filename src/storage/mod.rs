//! Local storage module for managing household data persistence
//!
//! This module provides the SeaORM-backed SQLite database holding:
//! - Accounts
//! - Family members
//! - Photos, tags and albums
//! - Event categories, events and participants

pub mod db;

pub use db::LocalStorage;
