//! Theme type definitions
//!
//! The two-valued visual mode of the page and the names it travels under:
//! the preference-store key and the root-element attribute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference-store key the active theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Attribute on the page's root element that presentation rules consume.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// A named visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Wire form, as persisted and as written to the page attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button while this theme is active:
    /// a sun in dark mode, a moon in light mode.
    pub fn button_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted or page-attribute value that is neither "light" nor "dark".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme {0:?}")]
pub struct InvalidTheme(pub String);

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(InvalidTheme(other.to_string())),
        }
    }
}
