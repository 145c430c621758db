//! Theme operations
//!
//! The two entry points that keep the page attribute, the persisted
//! preference, and the toggle-button glyph in agreement: `toggle_theme`
//! (the button's click handler) and `apply_saved_theme` (the page-ready
//! hook). Both tolerate a missing toggle button; the glyph write is then
//! simply skipped while the attribute and store writes still happen.

use anyhow::Result;
use tracing::{debug, warn};

use crate::page::PageAccessor;
use crate::prefs::PreferenceStore;

use super::types::{Theme, THEME_KEY};

/// Flip the page between light and dark.
///
/// Reads the current theme attribute (absent or unrecognized values count
/// as light), writes the flipped value to the page attribute and the
/// preference store, and updates the toggle-button glyph. Returns the new
/// theme. Fails only if the store write fails; the page attribute has
/// already been updated by then and the next page load re-syncs from
/// whatever the store last held.
pub fn toggle_theme(
    page: &mut dyn PageAccessor,
    prefs: &mut dyn PreferenceStore,
) -> Result<Theme> {
    let current = match page.theme_attribute() {
        Some(value) => value.parse().unwrap_or(Theme::Light),
        None => Theme::Light,
    };
    let next = current.toggled();

    page.set_theme_attribute(next.as_str());
    prefs.set(THEME_KEY, next.as_str())?;
    page.set_toggle_label(next.button_glyph());

    debug!(from = %current, to = %next, "Toggled theme");
    Ok(next)
}

/// Apply the persisted theme to a freshly ready page.
///
/// Defaults to light when nothing is persisted. A persisted value outside
/// "light"/"dark" is ignored with a warning rather than applied raw, so the
/// page attribute only ever carries the two supported modes.
pub fn apply_saved_theme(page: &mut dyn PageAccessor, prefs: &dyn PreferenceStore) -> Theme {
    let theme = match prefs.get(THEME_KEY) {
        None => Theme::default(),
        Some(saved) => saved.parse().unwrap_or_else(|err| {
            warn!(error = %err, "Ignoring persisted theme, falling back to light");
            Theme::default()
        }),
    };

    page.set_theme_attribute(theme.as_str());
    page.set_toggle_label(theme.button_glyph());

    debug!(theme = %theme, "Applied saved theme");
    theme
}
