use std::fmt::{Display, Formatter};

use crate::error::UiError;
use crate::utils::{PreferenceStore, ThemeState};

pub const DEFAULT_THEME: &str = "osowoso";

/// A free-form stylesheet theme name. Kept verbatim; only names that could
/// leave the stylesheet directory are refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn new(name: &str) -> Result<Self, UiError> {
        let valid = !name.trim().is_empty()
            && !name.contains(['/', '\\'])
            && !name.contains("..");
        if !valid {
            return Err(UiError::InvalidTheme(name.to_string()));
        }
        Ok(ThemeName(name.to_string()))
    }

    pub fn builtin_default() -> Self {
        ThemeName(DEFAULT_THEME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn stylesheet_href(&self, prefix: &str, suffix: &str) -> String {
        format!("{}{}{}", prefix, self.0, suffix)
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ThemeState> for ThemeName {
    fn from(theme: ThemeState) -> Self {
        ThemeName(theme.as_str().to_string())
    }
}

/// Everything that can live under the theme storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preference {
    Mode(ThemeState),
    Named(ThemeName),
}

impl Preference {
    /// `Ok(None)` for an empty value. Modes match exactly, so `" light "` is
    /// a theme name, not light mode.
    pub fn parse(raw: &str) -> Result<Option<Self>, UiError> {
        if raw.is_empty() {
            return Ok(None);
        }
        if let Some(mode) = ThemeState::parse(raw) {
            return Ok(Some(Preference::Mode(mode)));
        }
        ThemeName::new(raw).map(|name| Some(Preference::Named(name)))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Preference::Mode(mode) => mode.as_str(),
            Preference::Named(name) => name.as_str(),
        }
    }

    pub fn mode(&self) -> Option<ThemeState> {
        match self {
            Preference::Mode(mode) => Some(*mode),
            Preference::Named(_) => None,
        }
    }

    /// The stylesheet name this preference selects. Modes double as names.
    pub fn theme_name(&self) -> ThemeName {
        match self {
            Preference::Mode(mode) => ThemeName::from(*mode),
            Preference::Named(name) => name.clone(),
        }
    }
}

/// Reads and parses the stored preference. Storage failures and values that
/// do not parse are logged and read as no preference.
pub fn load_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<Preference> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("Failed to read preference {:?}: {}", key, e);
            return None;
        }
    };
    match Preference::parse(&raw) {
        Ok(preference) => preference,
        Err(e) => {
            log::warn!("Ignoring stored preference {:?}: {}", key, e);
            None
        }
    }
}

pub fn save_preference<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    preference: &Preference
) -> Result<(), UiError> {
    store.set(key, preference.as_str())
}
