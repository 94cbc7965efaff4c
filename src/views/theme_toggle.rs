use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::{ Document, Element, Event };

use crate::configs::UiConfig;
use crate::controllers::{ ThemeRootView, ThemeToggleController, ThemeToggleView };
use crate::error::UiError;
use crate::utils::{ IconState, PreferenceStore };
use crate::views::listen;

/// The `<html>` element carrying the light class.
pub struct DomRoot {
    root: Element,
    light_class: String,
}

impl DomRoot {
    pub fn find(document: &Document, config: &UiConfig) -> Option<Self> {
        let root = document.document_element()?;
        Some(Self { root, light_class: config.light_class.clone() })
    }
}

impl ThemeRootView for DomRoot {
    fn is_light(&self) -> bool {
        self.root.class_list().contains(&self.light_class)
    }

    fn set_light(&self, light: bool) {
        if let Err(e) = self.root.class_list().toggle_with_force(&self.light_class, light) {
            log::error!("Failed to update {}: {}", self.light_class, UiError::from(e));
        }
    }
}

pub struct DomThemeToggle {
    root: DomRoot,
    button: Element,
    light_icon: Option<Element>,
    dark_icon: Option<Element>,
    active_class: String,
}

impl DomThemeToggle {
    pub fn find(document: &Document, config: &UiConfig) -> Result<Option<Self>, UiError> {
        let Some(root) = DomRoot::find(document, config) else {
            return Ok(None);
        };
        let Some(button) = document.query_selector(&config.theme_toggle_selector)? else {
            return Ok(None);
        };
        let light_icon = button.query_selector(&config.light_icon_selector)?;
        let dark_icon = button.query_selector(&config.dark_icon_selector)?;
        Ok(Some(Self { root, button, light_icon, dark_icon, active_class: config.active_class.clone() }))
    }
}

impl ThemeRootView for DomThemeToggle {
    fn is_light(&self) -> bool {
        self.root.is_light()
    }

    fn set_light(&self, light: bool) {
        self.root.set_light(light);
    }
}

impl ThemeToggleView for DomThemeToggle {
    fn set_icons(&self, icons: IconState) -> bool {
        let (Some(light_icon), Some(dark_icon)) = (&self.light_icon, &self.dark_icon) else {
            return false;
        };
        for (icon, active) in [(light_icon, icons.light_active), (dark_icon, icons.dark_active)] {
            if let Err(e) = icon.class_list().toggle_with_force(&self.active_class, active) {
                log::error!("Failed to update icon: {}", UiError::from(e));
            }
        }
        true
    }
}

/// Wires the light/dark toggle button. `Ok(false)` when the page has none.
pub fn bind_theme_toggle(
    document: &Document,
    store: Box<dyn PreferenceStore>,
    config: &UiConfig
) -> Result<bool, UiError> {
    let Some(view) = DomThemeToggle::find(document, config)? else {
        log::debug!("No {}; theme toggle not bound", config.theme_toggle_selector);
        return Ok(false);
    };
    let button = view.button.clone();
    let controller = Rc::new(ThemeToggleController::new(store, view, config.clone()));
    controller.sync_icons();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = controller.toggle() {
            log::warn!("Theme toggled but not saved: {}", e);
        }
    });
    listen(&button, "click", on_click)?;
    log::info!("Theme toggle bound");
    Ok(true)
}
