use super::*;

use crate::page::{MemoryPage, PageAccessor};
use crate::prefs::{MemoryPreferenceStore, PreferenceStore};

#[test]
fn test_theme_wire_form() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

#[test]
fn test_theme_parse_rejects_unknown_values() {
    let err = "solarized".parse::<Theme>().unwrap_err();
    assert_eq!(err, InvalidTheme("solarized".to_string()));
    // Wire form is lowercase only
    assert!("Dark".parse::<Theme>().is_err());
}

#[test]
fn test_theme_serde_round_trip() {
    let json = serde_json::to_string(&Theme::Dark).unwrap();
    assert_eq!(json, "\"dark\"");
    let back: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Theme::Dark);
}

#[test]
fn test_glyph_mapping() {
    // Sun while dark, moon while light
    assert_eq!(Theme::Dark.button_glyph(), "☀️");
    assert_eq!(Theme::Light.button_glyph(), "🌙");
}

#[test]
fn test_first_toggle_goes_dark() {
    let mut page = MemoryPage::new();
    let mut prefs = MemoryPreferenceStore::new();

    let next = toggle_theme(&mut page, &mut prefs).unwrap();

    assert_eq!(next, Theme::Dark);
    assert_eq!(page.theme_attribute().as_deref(), Some("dark"));
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(page.toggle_label(), Some("☀️"));
}

#[test]
fn test_toggle_parity_over_sequences() {
    // n toggles from light leave "dark" persisted iff n is odd
    for n in 0..6 {
        let mut page = MemoryPage::new();
        let mut prefs = MemoryPreferenceStore::new();
        apply_saved_theme(&mut page, &prefs);

        for _ in 0..n {
            toggle_theme(&mut page, &mut prefs).unwrap();
        }

        let expected = if n % 2 == 1 { "dark" } else { "light" };
        if n == 0 {
            // Nothing toggled, nothing persisted yet
            assert_eq!(prefs.get(THEME_KEY), None);
        } else {
            assert_eq!(prefs.get(THEME_KEY).as_deref(), Some(expected));
        }
        assert_eq!(page.theme_attribute().as_deref(), Some(expected));
    }
}

#[test]
fn test_double_toggle_matches_default_state() {
    let mut page = MemoryPage::new();
    let mut prefs = MemoryPreferenceStore::new();
    apply_saved_theme(&mut page, &prefs);

    toggle_theme(&mut page, &mut prefs).unwrap();
    toggle_theme(&mut page, &mut prefs).unwrap();

    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
    assert_eq!(page.toggle_label(), Some("🌙"));
}

#[test]
fn test_toggle_tolerates_missing_button() {
    let mut page = MemoryPage::new().without_toggle_button();
    let mut prefs = MemoryPreferenceStore::new();

    let next = toggle_theme(&mut page, &mut prefs).unwrap();

    // Attribute and store still updated, label write skipped
    assert_eq!(next, Theme::Dark);
    assert_eq!(page.theme_attribute().as_deref(), Some("dark"));
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(page.toggle_label(), None);
}

#[test]
fn test_toggle_treats_unknown_attribute_as_light() {
    let mut page = MemoryPage::new();
    page.set_theme_attribute("sepia");
    let mut prefs = MemoryPreferenceStore::new();

    let next = toggle_theme(&mut page, &mut prefs).unwrap();
    assert_eq!(next, Theme::Dark);
}

#[test]
fn test_apply_saved_theme_dark() {
    let mut page = MemoryPage::new();
    let mut prefs = MemoryPreferenceStore::new();
    prefs.set(THEME_KEY, "dark").unwrap();

    let applied = apply_saved_theme(&mut page, &prefs);

    assert_eq!(applied, Theme::Dark);
    assert_eq!(page.theme_attribute().as_deref(), Some("dark"));
    assert_eq!(page.toggle_label(), Some("☀️"));
}

#[test]
fn test_apply_saved_theme_defaults_to_light() {
    let mut page = MemoryPage::new();
    let prefs = MemoryPreferenceStore::new();

    let applied = apply_saved_theme(&mut page, &prefs);

    assert_eq!(applied, Theme::Light);
    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
    assert_eq!(page.toggle_label(), Some("🌙"));
}

#[test]
fn test_apply_saved_theme_ignores_garbage_value() {
    let mut page = MemoryPage::new();
    let mut prefs = MemoryPreferenceStore::new();
    prefs.set(THEME_KEY, "mauve").unwrap();

    let applied = apply_saved_theme(&mut page, &prefs);

    // Falls back to light instead of writing the raw value to the page
    assert_eq!(applied, Theme::Light);
    assert_eq!(page.theme_attribute().as_deref(), Some("light"));
}

#[test]
fn test_apply_saved_theme_tolerates_missing_button() {
    let mut page = MemoryPage::new().without_toggle_button();
    let mut prefs = MemoryPreferenceStore::new();
    prefs.set(THEME_KEY, "dark").unwrap();

    let applied = apply_saved_theme(&mut page, &prefs);
    assert_eq!(applied, Theme::Dark);
    assert_eq!(page.theme_attribute().as_deref(), Some("dark"));
}

#[test]
fn test_store_and_attribute_agree_after_every_step() {
    let mut page = MemoryPage::new();
    let mut prefs = MemoryPreferenceStore::new();

    for _ in 0..5 {
        let next = toggle_theme(&mut page, &mut prefs).unwrap();
        assert_eq!(page.theme_attribute().as_deref(), Some(next.as_str()));
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some(next.as_str()));
    }

    // A fresh page load re-applies the same state
    let mut reloaded = MemoryPage::new();
    let applied = apply_saved_theme(&mut reloaded, &prefs);
    assert_eq!(
        reloaded.theme_attribute(),
        page.theme_attribute(),
        "reload must reproduce the toggled state"
    );
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some(applied.as_str()));
}
