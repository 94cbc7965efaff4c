use crate::configs::UiConfig;
use crate::controllers::{ StylesheetView, ThemeSelectController };
use crate::error::UiError;
use crate::tests::common::{ setup, FakeStylesheetView, FullStore, SharedStore };
use crate::utils::PreferenceStore;

fn load(store: &SharedStore) -> ThemeSelectController<SharedStore, FakeStylesheetView> {
    ThemeSelectController::new(
        Box::new(store.clone()),
        FakeStylesheetView::default(),
        UiConfig::default()
    )
}

#[test]
fn test_restore_defaults_without_saved_theme() {
    setup();
    let store = SharedStore::default();
    let page = load(&store);
    assert_eq!(page.restore().as_str(), "osowoso");
    assert_eq!(page.view().selected(), "osowoso");
    assert_eq!(page.view().href.borrow().as_deref(), Some("/css/theme-osowoso.css"));
    // Restoring does not write.
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn test_changed_theme_is_reapplied_on_next_load() {
    setup();
    let store = SharedStore::default();
    let first = load(&store);
    first.restore();
    first.view().choose("solarized");
    assert_eq!(first.change().unwrap().as_str(), "solarized");
    assert_eq!(first.view().href.borrow().as_deref(), Some("/css/theme-solarized.css"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("solarized"));

    let second = load(&store);
    assert_eq!(second.restore().as_str(), "solarized");
    assert_eq!(second.view().selected(), "solarized");
    assert_eq!(second.view().href.borrow().as_deref(), Some("/css/theme-solarized.css"));
}

#[test]
fn test_free_form_names_round_trip() {
    setup();
    for name in ["solarized.dark", "café"] {
        let store = SharedStore::default();
        let first = load(&store);
        first.restore();
        first.view().choose(name);
        assert_eq!(first.change().unwrap().as_str(), name);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some(name));

        let second = load(&store);
        assert_eq!(second.restore().as_str(), name);
        assert_eq!(second.view().selected(), name);
        assert_eq!(
            second.view().href.borrow().as_deref(),
            Some(format!("/css/theme-{}.css", name).as_str())
        );
    }
}

#[test]
fn test_invalid_selection_changes_nothing() {
    setup();
    let store = SharedStore::default();
    let page = load(&store);
    page.restore();
    page.view().choose("../../admin");
    assert!(matches!(page.change(), Err(UiError::InvalidTheme(_))));
    assert_eq!(page.view().href.borrow().as_deref(), Some("/css/theme-osowoso.css"));
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn test_tampered_storage_falls_back_to_default() {
    setup();
    let store = SharedStore::default();
    store.set("theme", "../../etc/passwd").unwrap();
    assert_eq!(load(&store).restore().as_str(), "osowoso");
}

#[test]
fn test_mode_values_select_matching_stylesheet() {
    setup();
    let store = SharedStore::default();
    store.set("theme", "light").unwrap();
    let page = load(&store);
    assert_eq!(page.restore().as_str(), "light");
    assert_eq!(page.view().href.borrow().as_deref(), Some("/css/theme-light.css"));
}

#[test]
fn test_configured_default_and_key() {
    setup();
    let store = SharedStore::default();
    store.set("theme", "solarized").unwrap();
    let config = UiConfig::from_json(r#"{ "storage_key": "site-theme", "default_theme": "paper" }"#)
        .unwrap();
    let page = ThemeSelectController::new(
        Box::new(store.clone()),
        FakeStylesheetView::default(),
        config
    );
    assert_eq!(page.restore().as_str(), "paper");
}

#[test]
fn test_stylesheet_applies_even_when_save_fails() {
    setup();
    let page = ThemeSelectController::new(
        Box::new(FullStore),
        FakeStylesheetView::default(),
        UiConfig::default()
    );
    page.view().choose("solarized");
    assert!(matches!(page.change(), Err(UiError::Storage(_))));
    assert_eq!(page.view().href.borrow().as_deref(), Some("/css/theme-solarized.css"));
}
