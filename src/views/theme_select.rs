use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Event, HtmlLinkElement, HtmlSelectElement };

use crate::configs::UiConfig;
use crate::controllers::{ StylesheetView, ThemeSelectController };
use crate::error::UiError;
use crate::utils::{ PreferenceStore, ThemeName };
use crate::views::listen;

pub struct DomStylesheet {
    select: HtmlSelectElement,
    link: HtmlLinkElement,
}

impl DomStylesheet {
    pub fn find(document: &Document, config: &UiConfig) -> Option<Self> {
        let select = document
            .get_element_by_id(&config.theme_select_id)?
            .dyn_into::<HtmlSelectElement>()
            .ok()?;
        let link = document
            .get_element_by_id(&config.theme_style_id)?
            .dyn_into::<HtmlLinkElement>()
            .ok()?;
        Some(Self { select, link })
    }
}

impl StylesheetView for DomStylesheet {
    fn selected(&self) -> String {
        self.select.value()
    }

    fn set_selected(&self, value: &str) {
        self.select.set_value(value);
    }

    fn set_href(&self, href: &str) {
        self.link.set_href(href);
    }
}

/// Restores the saved stylesheet and follows the picker. `Ok(false)` when
/// the picker or the link is missing.
pub fn bind_theme_select(
    document: &Document,
    store: Box<dyn PreferenceStore>,
    config: &UiConfig
) -> Result<bool, UiError> {
    let Some(view) = DomStylesheet::find(document, config) else {
        log::debug!("No #{} / #{}; theme select not bound", config.theme_select_id, config.theme_style_id);
        return Ok(false);
    };
    let select = view.select.clone();
    let controller = Rc::new(ThemeSelectController::new(store, view, config.clone()));
    let restored = controller.restore();
    log::info!("Theme select bound, restored {}", restored);

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = controller.change() {
            log::warn!("Theme change ignored: {}", e);
        }
    });
    listen(&select, "change", on_change)?;
    Ok(true)
}

/// One-shot change for markup that calls the handler inline.
pub fn change_from_document(
    document: &Document,
    store: Box<dyn PreferenceStore>,
    config: &UiConfig
) -> Result<ThemeName, UiError> {
    let view = DomStylesheet::find(document, config).ok_or_else(||
        UiError::MissingElement(format!("#{} / #{}", config.theme_select_id, config.theme_style_id))
    )?;
    ThemeSelectController::new(store, view, config.clone()).change()
}
