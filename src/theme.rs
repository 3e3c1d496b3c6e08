//! Color themes for project cards.
//!
//! Every `ProjectColor` maps to exactly one `ThemeEntry`. The builtin table is
//! produced by an exhaustive `match`, so adding a color without a theme is a
//! compile error rather than a missing lookup at render time. Content files
//! may override individual entries; overrides are merged onto the builtin
//! table and never remove an entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Color category a project card is styled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectColor {
    Purple,
    Blue,
    Green,
    Pink,
}

impl ProjectColor {
    /// All colors, in table order
    pub const ALL: [ProjectColor; 4] = [
        ProjectColor::Purple,
        ProjectColor::Blue,
        ProjectColor::Green,
        ProjectColor::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectColor::Purple => "purple",
            ProjectColor::Blue => "blue",
            ProjectColor::Green => "green",
            ProjectColor::Pink => "pink",
        }
    }

    fn index(self) -> usize {
        match self {
            ProjectColor::Purple => 0,
            ProjectColor::Blue => 1,
            ProjectColor::Green => 2,
            ProjectColor::Pink => 3,
        }
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style classes applied to one project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEntry {
    /// Card border class
    pub border: String,
    /// Heading text class
    pub text: String,
    /// Hover background class for the card's action buttons
    pub hover_bg: String,
}

impl ThemeEntry {
    fn new(border: &str, text: &str, hover_bg: &str) -> Self {
        Self {
            border: border.to_string(),
            text: text.to_string(),
            hover_bg: hover_bg.to_string(),
        }
    }

    /// Builtin entry for `color`
    pub fn builtin(color: ProjectColor) -> Self {
        match color {
            ProjectColor::Purple => Self::new("border-purple-100", "text-purple-700", "hover:bg-purple-50"),
            ProjectColor::Blue => Self::new("border-blue-100", "text-blue-700", "hover:bg-blue-50"),
            ProjectColor::Green => Self::new("border-green-100", "text-green-700", "hover:bg-green-50"),
            ProjectColor::Pink => Self::new("border-pink-100", "text-pink-700", "hover:bg-pink-50"),
        }
    }

    /// Whether any class string is blank
    pub fn has_blank_class(&self) -> bool {
        [&self.border, &self.text, &self.hover_bg]
            .iter()
            .any(|c| c.trim().is_empty())
    }
}

/// Total mapping from `ProjectColor` to `ThemeEntry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTable {
    entries: [ThemeEntry; 4],
}

impl ThemeTable {
    pub fn builtin() -> Self {
        Self {
            entries: ProjectColor::ALL.map(ThemeEntry::builtin),
        }
    }

    /// Replace the entries named in `overrides`, keeping the rest
    pub fn with_overrides(mut self, overrides: &BTreeMap<ProjectColor, ThemeEntry>) -> Self {
        for (color, entry) in overrides {
            log::debug!("theme override for {}: {:?}", color, entry);
            self.entries[color.index()] = entry.clone();
        }
        self
    }

    pub fn get(&self, color: ProjectColor) -> &ThemeEntry {
        &self.entries[color.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectColor, &ThemeEntry)> {
        ProjectColor::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
