//! Closed value sets stored as text columns
//!
//! Roles, event priorities and repeat cadences are persisted as their lowercase
//! names. Parsing from user input is strict (`FromStr`), while reading back a
//! stored value goes through `from_stored`, which falls back to a default
//! variant instead of failing on rows written by older versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a user-supplied choice is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Relationship of a member to the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Father,
    Mother,
    Son,
    Daughter,
    Grandfather,
    Grandmother,
    Other,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Father,
        Role::Mother,
        Role::Son,
        Role::Daughter,
        Role::Grandfather,
        Role::Grandmother,
        Role::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Father => "father",
            Role::Mother => "mother",
            Role::Son => "son",
            Role::Daughter => "daughter",
            Role::Grandfather => "grandfather",
            Role::Grandmother => "grandmother",
            Role::Other => "other",
        }
    }

    /// Read a stored role, treating anything unrecognized as `Other`.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(Role::Other)
    }
}

/// Importance of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Normal, Priority::High, Priority::Urgent];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Read a stored priority, treating anything unrecognized as `Normal`.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Recurrence cadence of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repeat {
    pub const ALL: [Repeat; 5] = [Repeat::None, Repeat::Daily, Repeat::Weekly, Repeat::Monthly, Repeat::Yearly];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
            Repeat::Monthly => "monthly",
            Repeat::Yearly => "yearly",
        }
    }

    /// Read a stored cadence, treating anything unrecognized as `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn is_recurring(self) -> bool {
        self != Repeat::None
    }
}

fn expected<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> String {
    all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", ")
}

impl FromStr for Role {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| UnknownChoice {
                kind: "role",
                value: s.to_string(),
                expected: expected(&Role::ALL, Role::as_str),
            })
    }
}

impl FromStr for Priority {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| UnknownChoice {
                kind: "priority",
                value: s.to_string(),
                expected: expected(&Priority::ALL, Priority::as_str),
            })
    }
}

impl FromStr for Repeat {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Repeat::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| UnknownChoice {
                kind: "repeat",
                value: s.to_string(),
                expected: expected(&Repeat::ALL, Repeat::as_str),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!(" weekly ".parse::<Repeat>(), Ok(Repeat::Weekly));
        assert_eq!("GRANDMOTHER".parse::<Role>(), Ok(Role::Grandmother));
    }

    #[test]
    fn unknown_input_is_rejected_with_expected_values() {
        let err = "critical".parse::<Priority>().unwrap_err();
        assert_eq!(err.kind, "priority");
        assert!(err.to_string().contains("low, normal, high, urgent"));
    }

    #[test]
    fn stored_values_fall_back() {
        assert_eq!(Priority::from_stored("bogus"), Priority::Normal);
        assert_eq!(Repeat::from_stored(""), Repeat::None);
        assert_eq!(Role::from_stored("uncle"), Role::Other);
    }
}
