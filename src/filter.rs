//! Note card filtering
//!
//! Recomputes every card's visibility from the search field on each
//! invocation: a card stays shown iff the lowercased query is a substring
//! of its lowercased title or body. The empty query therefore shows
//! everything, and a card with no title/body children still matches it.

use tracing::debug;

use crate::page::{NoteCardAccess, PageAccessor};

/// Filter the page's note cards against its search field.
///
/// A no-op when the search field is absent. Missing title or body child
/// elements count as empty text, not as failures.
pub fn filter_notes(page: &mut dyn PageAccessor) {
    let Some(query) = page.search_query() else {
        return;
    };
    let query = query.to_lowercase();

    let mut shown = 0usize;
    let mut hidden = 0usize;
    for card in page.note_cards_mut() {
        let title = card.title().unwrap_or_default().to_lowercase();
        let body = card.body().unwrap_or_default().to_lowercase();

        let visible = title.contains(&query) || body.contains(&query);
        card.set_visible(visible);
        if visible {
            shown += 1;
        } else {
            hidden += 1;
        }
    }

    debug!(query = %query, shown, hidden, "Filtered note cards");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MemoryCard, MemoryPage};

    fn sample_page() -> MemoryPage {
        let mut page = MemoryPage::new();
        page.push_card(MemoryCard::new("Groceries", "milk, eggs"));
        page.push_card(MemoryCard::new("Work", "finish report"));
        page
    }

    fn visibility(page: &MemoryPage) -> Vec<bool> {
        page.cards().iter().map(|c| c.is_visible()).collect()
    }

    #[test]
    fn test_query_matches_body_of_one_card() {
        let mut page = sample_page();
        page.set_search_value("milk");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![true, false]);
    }

    #[test]
    fn test_query_matches_other_card_only() {
        let mut page = sample_page();
        page.set_search_value("report");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![false, true]);
    }

    #[test]
    fn test_empty_query_shows_all() {
        let mut page = sample_page();
        page.set_search_value("report");
        filter_notes(&mut page);

        page.set_search_value("");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![true, true]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let mut page = sample_page();
        page.set_search_value("GROCERIES");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![true, false]);
    }

    #[test]
    fn test_title_match_counts_too() {
        let mut page = sample_page();
        page.set_search_value("work");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![false, true]);
    }

    #[test]
    fn test_no_match_hides_everything() {
        let mut page = sample_page();
        page.set_search_value("zebra");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![false, false]);
    }

    #[test]
    fn test_missing_search_field_is_noop() {
        let mut page = sample_page().without_search_input();
        // Pre-hide one card so a buggy "default to all visible" would show
        page.note_cards_mut()[0].set_visible(false);

        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![false, true]);
    }

    #[test]
    fn test_missing_title_and_body_count_as_empty() {
        let mut page = MemoryPage::new();
        page.push_card(MemoryCard::with_parts(None, None));
        page.push_card(MemoryCard::with_parts(
            None,
            Some("only a body with milk".to_string()),
        ));

        page.set_search_value("milk");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![false, true]);

        // Empty query matches even the bare card
        page.set_search_value("");
        filter_notes(&mut page);
        assert_eq!(visibility(&page), vec![true, true]);
    }

    #[test]
    fn test_shown_cards_have_layout_restored() {
        let mut page = sample_page();
        page.set_search_value("zebra");
        filter_notes(&mut page);

        page.set_search_value("milk");
        filter_notes(&mut page);

        // The re-shown card must be back on the stylesheet default
        assert_eq!(page.cards()[0].display_override(), None);
        assert_eq!(page.cards()[1].display_override(), Some("none"));
    }
}
