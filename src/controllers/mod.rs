mod menu;
mod theme_select;
mod theme_toggle;

pub use menu::{ Ancestor, ClickTarget, MenuController, MenuState, MenuView };
pub use theme_select::{ StylesheetView, ThemeSelectController };
pub use theme_toggle::{ apply_saved_theme, ThemeRootView, ThemeToggleController, ThemeToggleView };
