use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Event, KeyboardEvent, Node };

use crate::configs::UiConfig;
use crate::controllers::{ Ancestor, ClickTarget, MenuController, MenuView };
use crate::error::UiError;
use crate::views::listen;

pub struct DomMenu {
    toggle: Element,
    panel: Element,
    icon: Option<Element>,
    open_class: String,
}

impl DomMenu {
    pub fn find(document: &Document, config: &UiConfig) -> Result<Option<Self>, UiError> {
        let toggle = document.query_selector(&config.hamburger_selector)?;
        let panel = document.query_selector(&config.nav_panel_selector)?;
        let (Some(toggle), Some(panel)) = (toggle, panel) else {
            return Ok(None);
        };
        let icon = toggle.query_selector(&config.hamburger_icon_selector)?;
        Ok(Some(Self { toggle, panel, icon, open_class: config.open_class.clone() }))
    }

    fn ancestry(&self, event: &Event) -> Vec<Ancestor> {
        let mut current = event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .and_then(|node| node.dyn_ref::<Element>().cloned().or_else(|| node.parent_element()));
        let mut path = Vec::new();
        while let Some(element) = current {
            path.push(if self.toggle.is_same_node(Some(element.as_ref())) {
                Ancestor::Toggle
            } else if self.panel.is_same_node(Some(element.as_ref())) {
                Ancestor::Panel
            } else if element.tag_name().eq_ignore_ascii_case("a") {
                Ancestor::Link
            } else {
                Ancestor::Other
            });
            current = element.parent_element();
        }
        path
    }

    fn click_target(&self, event: &Event) -> ClickTarget {
        ClickTarget::from_ancestry(&self.ancestry(event))
    }
}

impl MenuView for DomMenu {
    fn is_panel_open(&self) -> bool {
        self.panel.class_list().contains(&self.open_class)
    }

    fn set_panel_open(&self, open: bool) {
        if let Err(e) = self.panel.class_list().toggle_with_force(&self.open_class, open) {
            log::error!("Failed to update menu class: {}", UiError::from(e));
        }
    }

    fn set_aria_expanded(&self, value: &str) {
        if let Err(e) = self.toggle.set_attribute("aria-expanded", value) {
            log::error!("Failed to set aria-expanded: {}", UiError::from(e));
        }
    }

    fn set_glyph(&self, glyph: &str) {
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(glyph));
        }
    }
}

/// Wires the hamburger toggle. `Ok(false)` when the page has no menu.
pub fn bind_navbar(document: &Document, config: &UiConfig) -> Result<bool, UiError> {
    let Some(menu) = DomMenu::find(document, config)? else {
        log::debug!(
            "No {} / {} on this page; navbar not bound",
            config.hamburger_selector,
            config.nav_panel_selector
        );
        return Ok(false);
    };
    let toggle = menu.toggle.clone();
    let panel = menu.panel.clone();
    let controller = Rc::new(MenuController::new(menu, &config.open_glyph, &config.closed_glyph));
    controller.render(controller.state());

    let on_toggle = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.toggle();
        })
    };
    listen(&toggle, "click", on_toggle)?;

    let on_document = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = controller.view().click_target(&event);
            controller.on_document_click(target);
        })
    };
    listen(document, "click", on_document)?;

    let on_panel = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = controller.view().click_target(&event);
            controller.on_panel_click(target);
        })
    };
    listen(&panel, "click", on_panel)?;

    let on_keydown = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if event.dyn_ref::<KeyboardEvent>().map_or(false, |key| key.key() == "Escape") {
                controller.on_escape();
            }
        })
    };
    listen(document, "keydown", on_keydown)?;

    log::info!("Navbar bound");
    Ok(true)
}
