use wasm_bindgen::prelude::*;
use web_sys::{ Document, Event };

use crate::configs::UiConfig;
use crate::controllers::apply_saved_theme;
use crate::utils::{ init_logging, open_store };
use crate::views::{ bind_navbar, bind_theme_select, bind_theme_toggle, change_from_document, listen, DomRoot };

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Runs when the module is instantiated, which is after the wasm fetch and
/// usually after first paint. Pages that must not flash keep the inline
/// `<head>` one-liner (see `assets/index.html`); this re-applies the same
/// check for pages without it.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    let Some(document) = document() else {
        log::error!("No document; site UI not started");
        return;
    };
    let config = UiConfig::from_document(&document);
    apply_early(&document, &config);

    let ready = document.clone();
    if let Err(e) = when_ready(&document, move || bind_all(&ready, &config)) {
        log::error!("Failed to wait for DOMContentLoaded: {}", e);
    }
}

/// The early step on its own, for scripts that run after the module has
/// loaded.
#[wasm_bindgen(js_name = earlyApplyTheme)]
pub fn early_apply_theme() {
    init_logging();
    if let Some(document) = document() {
        let config = UiConfig::from_document(&document);
        apply_early(&document, &config);
    }
}

/// Inline `onchange` handler for the theme picker.
#[wasm_bindgen(js_name = changeTheme)]
pub fn change_theme() {
    let Some(document) = document() else {
        return;
    };
    let config = UiConfig::from_document(&document);
    if let Err(e) = change_from_document(&document, open_store(), &config) {
        log::warn!("Theme change ignored: {}", e);
    }
}

fn apply_early(document: &Document, config: &UiConfig) {
    if let Some(root) = DomRoot::find(document, config) {
        let theme = apply_saved_theme(&*open_store(), &root, config);
        log::debug!("Early theme: {}", theme.as_str());
    }
}

fn when_ready<F>(document: &Document, mut f: F) -> Result<(), crate::error::UiError>
    where F: FnMut() + 'static
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut pending = true;
    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if std::mem::take(&mut pending) {
            f();
        }
    });
    listen(document, "DOMContentLoaded", on_ready)
}

fn bind_all(document: &Document, config: &UiConfig) {
    if let Err(e) = bind_navbar(document, config) {
        log::error!("Navbar not bound: {}", e);
    }
    if let Err(e) = bind_theme_toggle(document, open_store(), config) {
        log::error!("Theme toggle not bound: {}", e);
    }
    if let Err(e) = bind_theme_select(document, open_store(), config) {
        log::error!("Theme select not bound: {}", e);
    }
}
