//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to look up the glyphs used for event
//! priorities, family roles and calendar markers, with emoji, Unicode and
//! ASCII variants.

use serde::{Deserialize, Serialize};

use crate::choices::{Priority, Role};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    #[default]
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Priority indicators
///
/// Low to high repeat one symbol; urgent always gets its own alert glyph.
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub low: &'static str,
    pub normal: &'static str,
    pub high: &'static str,
    pub urgent: &'static str,
}

/// Family role glyphs
#[derive(Debug, Clone)]
pub struct RoleIcons {
    pub father: &'static str,
    pub mother: &'static str,
    pub son: &'static str,
    pub daughter: &'static str,
    pub grandfather: &'static str,
    pub grandmother: &'static str,
    pub other: &'static str,
}

/// Calendar and gallery markers
#[derive(Debug, Clone)]
pub struct MarkerIcons {
    pub today: &'static str,
    pub upcoming: &'static str,
    pub past: &'static str,
    pub recurring: &'static str,
    pub reminder: &'static str,
    pub location: &'static str,
    pub favorite: &'static str,
    pub tag: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub priority: PriorityIcons,
    pub role: RoleIcons,
    pub marker: MarkerIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            priority: PriorityIcons {
                low: "⭐",
                normal: "⭐⭐",
                high: "⭐⭐⭐",
                urgent: "🚨",
            },
            role: RoleIcons {
                father: "👨",
                mother: "👩",
                son: "👦",
                daughter: "👧",
                grandfather: "👴",
                grandmother: "👵",
                other: "👤",
            },
            marker: MarkerIcons {
                today: "📅",
                upcoming: "🗓️",
                past: "📁",
                recurring: "🔄",
                reminder: "🔔",
                location: "📍",
                favorite: "❤️",
                tag: "🏷️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            priority: PriorityIcons {
                low: "★",
                normal: "★★",
                high: "★★★",
                urgent: "‼",
            },
            role: RoleIcons {
                father: "♂",
                mother: "♀",
                son: "♂",
                daughter: "♀",
                grandfather: "♔",
                grandmother: "♕",
                other: "●",
            },
            marker: MarkerIcons {
                today: "◷",
                upcoming: "◶",
                past: "◌",
                recurring: "↻",
                reminder: "♪",
                location: "⌖",
                favorite: "♥",
                tag: "◉",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            priority: PriorityIcons {
                low: "*",
                normal: "**",
                high: "***",
                urgent: "!!",
            },
            role: RoleIcons {
                father: "F",
                mother: "M",
                son: "S",
                daughter: "D",
                grandfather: "GF",
                grandmother: "GM",
                other: "?",
            },
            marker: MarkerIcons {
                today: "@",
                upcoming: "+",
                past: "-",
                recurring: "~",
                reminder: "!",
                location: "#",
                favorite: "<3",
                tag: "%",
            },
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::Low => icons.low,
            Priority::Normal => icons.normal,
            Priority::High => icons.high,
            Priority::Urgent => icons.urgent,
        }
    }

    /// Glyph for a stored priority value; unknown values read as normal
    #[must_use]
    pub fn priority_for(&self, stored: &str) -> &'static str {
        self.priority(Priority::from_stored(stored))
    }

    #[must_use]
    pub fn role(&self, role: Role) -> &'static str {
        let icons = self.icons().role;
        match role {
            Role::Father => icons.father,
            Role::Mother => icons.mother,
            Role::Son => icons.son,
            Role::Daughter => icons.daughter,
            Role::Grandfather => icons.grandfather,
            Role::Grandmother => icons.grandmother,
            Role::Other => icons.other,
        }
    }

    /// Glyph for a stored role value; unknown values get the generic person glyph
    #[must_use]
    pub fn role_for(&self, stored: &str) -> &'static str {
        self.role(Role::from_stored(stored))
    }

    #[must_use]
    pub fn today(&self) -> &'static str {
        self.icons().marker.today
    }

    #[must_use]
    pub fn upcoming(&self) -> &'static str {
        self.icons().marker.upcoming
    }

    #[must_use]
    pub fn past(&self) -> &'static str {
        self.icons().marker.past
    }

    #[must_use]
    pub fn recurring(&self) -> &'static str {
        self.icons().marker.recurring
    }

    #[must_use]
    pub fn reminder(&self) -> &'static str {
        self.icons().marker.reminder
    }

    #[must_use]
    pub fn location(&self) -> &'static str {
        self.icons().marker.location
    }

    #[must_use]
    pub fn favorite(&self) -> &'static str {
        self.icons().marker.favorite
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.icons().marker.tag
    }
}
