//! Theme module - Light/dark mode for the notes page
//!
//! This module provides functionality for:
//! - The `Theme` enum and its persisted wire form ("light" / "dark")
//! - Toggling the active theme and mirroring it to the page and store
//! - Applying the saved theme when a page becomes ready
//!
//! # Module Structure
//!
//! - `types` - Theme enum, parse error, key/attribute constants
//! - `service` - The toggle and page-ready operations

mod service;
mod types;

// Re-export types used externally
pub use types::{InvalidTheme, Theme, THEME_ATTRIBUTE, THEME_KEY};

// Re-export the theme operations
pub use service::{apply_saved_theme, toggle_theme};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
