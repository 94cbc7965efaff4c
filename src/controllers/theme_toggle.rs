use crate::configs::UiConfig;
use crate::error::UiError;
use crate::utils::{ load_preference, save_preference, IconState, Preference, PreferenceStore, ThemeState };

/// The document root's light/dark class.
pub trait ThemeRootView {
    fn is_light(&self) -> bool;
    fn set_light(&self, light: bool);
}

/// The toggle button's two icons. `false` when either icon is missing.
pub trait ThemeToggleView: ThemeRootView {
    fn set_icons(&self, icons: IconState) -> bool;
}

/// Adds the light class when the stored preference asks for it. Meant to
/// run before the page is ready; never removes the class.
pub fn apply_saved_theme<S, R>(store: &S, root: &R, config: &UiConfig) -> ThemeState
where
    S: PreferenceStore + ?Sized,
    R: ThemeRootView,
{
    let stored = load_preference(store, &config.storage_key).and_then(|preference| preference.mode());
    if stored == Some(ThemeState::Light) {
        root.set_light(true);
    }
    ThemeState::from_is_light(root.is_light())
}

pub struct ThemeToggleController<S: PreferenceStore + ?Sized, V: ThemeToggleView> {
    store: Box<S>,
    view: V,
    config: UiConfig,
}

impl<S: PreferenceStore + ?Sized, V: ThemeToggleView> ThemeToggleController<S, V> {
    pub fn new(store: Box<S>, view: V, config: UiConfig) -> Self {
        Self { store, view, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> ThemeState {
        ThemeState::from_is_light(self.view.is_light())
    }

    pub fn sync_icons(&self) {
        if !self.view.set_icons(IconState::for_theme(self.state())) {
            log::debug!("Theme toggle icons missing; skipping sync");
        }
    }

    /// Flips the root class and persists the result. The class is flipped
    /// even when persisting fails.
    pub fn toggle(&self) -> Result<ThemeState, UiError> {
        let next = self.state().toggled();
        self.view.set_light(next.is_light());
        self.sync_icons();
        log::debug!("Theme toggled: {}", next.as_str());
        save_preference(&*self.store, &self.config.storage_key, &Preference::Mode(next))?;
        Ok(next)
    }
}
