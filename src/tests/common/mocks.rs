use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use crate::controllers::{ MenuView, StylesheetView, ThemeRootView, ThemeToggleView };
use crate::error::UiError;
use crate::utils::{ IconState, MemoryStore, PreferenceStore };

#[derive(Default)]
pub struct FakeMenuView {
    pub open: Cell<bool>,
    pub aria_expanded: RefCell<Option<String>>,
    pub glyph: RefCell<Option<String>>,
}

impl FakeMenuView {
    /// Panel class, ARIA attribute and glyph all describe the same state.
    pub fn in_sync(&self) -> bool {
        let open = self.open.get();
        let aria = self.aria_expanded.borrow().clone();
        let glyph = self.glyph.borrow().clone();
        aria.as_deref() == Some(if open { "true" } else { "false" }) &&
            glyph.as_deref() == Some(if open { "✕" } else { "☰" })
    }
}

impl MenuView for FakeMenuView {
    fn is_panel_open(&self) -> bool {
        self.open.get()
    }

    fn set_panel_open(&self, open: bool) {
        self.open.set(open);
    }

    fn set_aria_expanded(&self, value: &str) {
        *self.aria_expanded.borrow_mut() = Some(value.to_string());
    }

    fn set_glyph(&self, glyph: &str) {
        *self.glyph.borrow_mut() = Some(glyph.to_string());
    }
}

#[derive(Default)]
pub struct FakeStylesheetView {
    pub selected: RefCell<String>,
    pub href: RefCell<Option<String>>,
}

impl FakeStylesheetView {
    pub fn choose(&self, value: &str) {
        *self.selected.borrow_mut() = value.to_string();
    }
}

impl StylesheetView for FakeStylesheetView {
    fn selected(&self) -> String {
        self.selected.borrow().clone()
    }

    fn set_selected(&self, value: &str) {
        self.choose(value);
    }

    fn set_href(&self, href: &str) {
        *self.href.borrow_mut() = Some(href.to_string());
    }
}

pub struct FakeToggleView {
    pub light: Cell<bool>,
    pub icons: Cell<Option<IconState>>,
    pub has_icons: bool,
}

impl FakeToggleView {
    pub fn new(light: bool) -> Self {
        Self { light: Cell::new(light), icons: Cell::new(None), has_icons: true }
    }

    pub fn without_icons() -> Self {
        Self { has_icons: false, ..Self::new(false) }
    }
}

impl ThemeRootView for FakeToggleView {
    fn is_light(&self) -> bool {
        self.light.get()
    }

    fn set_light(&self, light: bool) {
        self.light.set(light);
    }
}

impl ThemeToggleView for FakeToggleView {
    fn set_icons(&self, icons: IconState) -> bool {
        if !self.has_icons {
            return false;
        }
        self.icons.set(Some(icons));
        true
    }
}

/// One `localStorage` shared by several simulated page loads.
#[derive(Clone, Default)]
pub struct SharedStore(pub Rc<MemoryStore>);

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0.set(key, value)
    }
}

/// Refuses every write, like `localStorage` over quota.
pub struct FullStore;

impl PreferenceStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, UiError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), UiError> {
        Err(UiError::Storage("QuotaExceededError".to_string()))
    }
}
