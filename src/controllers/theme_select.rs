use crate::configs::UiConfig;
use crate::error::UiError;
use crate::utils::{ load_preference, save_preference, Preference, PreferenceStore, ThemeName };

/// A theme picker bound to a stylesheet `<link>`.
pub trait StylesheetView {
    fn selected(&self) -> String;
    fn set_selected(&self, value: &str);
    fn set_href(&self, href: &str);
}

pub struct ThemeSelectController<S: PreferenceStore + ?Sized, V: StylesheetView> {
    store: Box<S>,
    view: V,
    config: UiConfig,
}

impl<S: PreferenceStore + ?Sized, V: StylesheetView> ThemeSelectController<S, V> {
    pub fn new(store: Box<S>, view: V, config: UiConfig) -> Self {
        Self { store, view, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Applies the stored theme, or the configured default, to both the
    /// picker and the stylesheet link.
    pub fn restore(&self) -> ThemeName {
        let name = load_preference(&*self.store, &self.config.storage_key)
            .map(|preference| preference.theme_name())
            .unwrap_or_else(|| self.config.default_theme_name());
        self.view.set_selected(name.as_str());
        self.view.set_href(&self.config.stylesheet_href(&name));
        name
    }

    pub fn change(&self) -> Result<ThemeName, UiError> {
        let name = ThemeName::new(&self.view.selected())?;
        self.view.set_href(&self.config.stylesheet_href(&name));
        let preference = Preference::parse(name.as_str())?.unwrap_or(Preference::Named(name.clone()));
        save_preference(&*self.store, &self.config.storage_key, &preference)?;
        log::debug!("Theme changed to {}", name);
        Ok(name)
    }
}
