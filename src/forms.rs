//! Field-level input rules shared by members, tags, albums, photos and categories
//!
//! Each check returns the first problem it finds as a [`FormError`]. These
//! run before anything touches the database.

use crate::constants::{MIN_TAG_NAME_CHARS, MIN_TITLE_CHARS};
use crate::utils::{color, text};

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be {max_mb} MB or smaller")]
    FileTooLarge { field: &'static str, max_mb: u64 },

    #[error("{field} must be an image file (jpg, jpeg, png, gif, bmp, webp)")]
    NotAnImage { field: &'static str },

    #[error("{field} must be a color like #3498db")]
    InvalidColor { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: i64, max: i64 },
}

/// An uploaded file as seen by the form layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub size_bytes: u64,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// Trim and require a non-empty value
pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Trim and require at least `min` characters
pub fn min_chars(field: &'static str, value: &str, min: usize) -> Result<String, FormError> {
    let trimmed = required(field, value)?;
    if trimmed.chars().count() < min {
        return Err(FormError::TooShort { field, min });
    }
    Ok(trimmed)
}

/// Photo and album titles
pub fn title(value: &str) -> Result<String, FormError> {
    min_chars("title", value, MIN_TITLE_CHARS)
}

/// Tag names
pub fn tag_name(value: &str) -> Result<String, FormError> {
    min_chars("tag name", value, MIN_TAG_NAME_CHARS)
}

/// Size and type check for an uploaded image
pub fn image(field: &'static str, upload: &Upload, max_bytes: u64) -> Result<(), FormError> {
    if upload.size_bytes > max_bytes {
        return Err(FormError::FileTooLarge {
            field,
            max_mb: max_bytes / (1024 * 1024),
        });
    }
    if !text::is_image_file(&upload.file_name) {
        return Err(FormError::NotAnImage { field });
    }
    Ok(())
}

/// `#rrggbb` colors for tags and categories
pub fn hex_color(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if !color::is_hex_color(trimmed) {
        return Err(FormError::InvalidColor { field });
    }
    Ok(trimmed.to_lowercase())
}

pub fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), FormError> {
    if value < min || value > max {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(())
}
