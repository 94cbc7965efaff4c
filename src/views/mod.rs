mod navbar;
mod theme_select;
mod theme_toggle;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Event, EventTarget };

use crate::error::UiError;

pub use navbar::{ bind_navbar, DomMenu };
pub use theme_select::{ bind_theme_select, change_from_document, DomStylesheet };
pub use theme_toggle::{ bind_theme_toggle, DomRoot, DomThemeToggle };

/// Attaches `callback` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    callback: Closure<dyn FnMut(Event)>
) -> Result<(), UiError> {
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
