//! Page accessor seam
//!
//! The page behaviors never touch a live document directly; they go through
//! `PageAccessor`, which exposes exactly what the theme and filter
//! operations need: the root theme attribute, the toggle button's label,
//! the search field's value, and the list of note cards. The collaborating
//! elements (`#themeBtn`, `#searchInput`, the `.note-card` collection with
//! optional `.note-title` / `.note-content` children) are owned by the page,
//! not by this crate, and any of them may be absent.
//!
//! `MemoryPage` is the concrete document used by the demo binary and the
//! tests: a root attribute map plus optional button/input and an ordered
//! card list.

use std::collections::HashMap;

use crate::theme::THEME_ATTRIBUTE;

/// One displayed note card: readable title/body text and a visibility flag.
///
/// Title and body come from optional child elements; `None` means the child
/// is missing, which callers treat as empty text.
pub trait NoteCardAccess {
    fn title(&self) -> Option<String>;
    fn body(&self) -> Option<String>;

    /// Show or hide the card. Showing must restore the element's normal
    /// layout (clear the inline override), not force a particular display
    /// mode.
    fn set_visible(&mut self, visible: bool);
}

/// Read/write access to the parts of the page the behaviors touch.
pub trait PageAccessor {
    /// Current value of the root theme attribute, if set.
    fn theme_attribute(&self) -> Option<String>;

    fn set_theme_attribute(&mut self, value: &str);

    /// Update the toggle button's label. A no-op when the button is absent.
    fn set_toggle_label(&mut self, label: &str);

    /// Current search field value, or `None` when the field is absent.
    fn search_query(&self) -> Option<String>;

    fn note_cards_mut(&mut self) -> Vec<&mut dyn NoteCardAccess>;
}

/// In-memory stand-in for one note card element.
#[derive(Debug, Clone, Default)]
pub struct MemoryCard {
    title: Option<String>,
    body: Option<String>,
    /// Inline display override. `None` means the stylesheet's layout
    /// applies (the card is shown); `Some("none")` hides it.
    display: Option<String>,
}

impl MemoryCard {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        MemoryCard {
            title: Some(title.into()),
            body: Some(body.into()),
            display: None,
        }
    }

    /// A card with one or both child elements missing.
    pub fn with_parts(title: Option<String>, body: Option<String>) -> Self {
        MemoryCard {
            title,
            body,
            display: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.display.as_deref() != Some("none")
    }

    /// The raw inline override, for asserting that showing a card restores
    /// the default layout instead of pinning a display mode.
    pub fn display_override(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

impl NoteCardAccess for MemoryCard {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn body(&self) -> Option<String> {
        self.body.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.display = if visible { None } else { Some("none".to_string()) };
    }
}

/// In-memory page document.
///
/// Starts with the toggle button and an empty search field present; the
/// `without_*` builders produce the degraded pages the operations must
/// tolerate.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    root_attributes: HashMap<String, String>,
    toggle_label: Option<String>,
    search_value: Option<String>,
    cards: Vec<MemoryCard>,
}

impl MemoryPage {
    pub fn new() -> Self {
        MemoryPage {
            root_attributes: HashMap::new(),
            toggle_label: Some(String::new()),
            search_value: Some(String::new()),
            cards: Vec::new(),
        }
    }

    /// A page with no `#themeBtn` element.
    pub fn without_toggle_button(mut self) -> Self {
        self.toggle_label = None;
        self
    }

    /// A page with no `#searchInput` element.
    pub fn without_search_input(mut self) -> Self {
        self.search_value = None;
        self
    }

    pub fn push_card(&mut self, card: MemoryCard) {
        self.cards.push(card);
    }

    /// Type a query into the search field. Ignored when the field is absent.
    pub fn set_search_value(&mut self, query: &str) {
        if let Some(value) = &mut self.search_value {
            *value = query.to_string();
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    pub fn toggle_label(&self) -> Option<&str> {
        self.toggle_label.as_deref()
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAccessor for MemoryPage {
    fn theme_attribute(&self) -> Option<String> {
        self.root_attributes.get(THEME_ATTRIBUTE).cloned()
    }

    fn set_theme_attribute(&mut self, value: &str) {
        self.root_attributes
            .insert(THEME_ATTRIBUTE.to_string(), value.to_string());
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(current) = &mut self.toggle_label {
            *current = label.to_string();
        }
    }

    fn search_query(&self) -> Option<String> {
        self.search_value.clone()
    }

    fn note_cards_mut(&mut self) -> Vec<&mut dyn NoteCardAccess> {
        self.cards
            .iter_mut()
            .map(|card| card as &mut dyn NoteCardAccess)
            .collect()
    }
}
