use serde::Deserialize;

use crate::error::UiError;
use crate::utils::{ ThemeName, DEFAULT_THEME };

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-ui-config";

/// Selectors, class names and storage settings the page markup is expected
/// to follow. Every field can be overridden from the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage_key: String,

    pub hamburger_selector: String,
    pub nav_panel_selector: String,
    pub hamburger_icon_selector: String,
    pub open_class: String,
    pub open_glyph: String,
    pub closed_glyph: String,

    pub theme_select_id: String,
    pub theme_style_id: String,
    pub default_theme: String,
    pub stylesheet_prefix: String,
    pub stylesheet_suffix: String,

    pub theme_toggle_selector: String,
    pub light_icon_selector: String,
    pub dark_icon_selector: String,
    pub light_class: String,
    pub active_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),

            hamburger_selector: ".nav-hamburger".to_string(),
            nav_panel_selector: ".nav-left".to_string(),
            hamburger_icon_selector: ".hamburger-icon".to_string(),
            open_class: "open".to_string(),
            open_glyph: "✕".to_string(),
            closed_glyph: "☰".to_string(),

            theme_select_id: "theme-select".to_string(),
            theme_style_id: "theme-style".to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            stylesheet_prefix: "/css/theme-".to_string(),
            stylesheet_suffix: ".css".to_string(),

            theme_toggle_selector: "button.theme-toggle".to_string(),
            light_icon_selector: ".light-icon".to_string(),
            dark_icon_selector: ".dark-icon".to_string(),
            light_class: "light-theme".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        let config: UiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// element is absent or unusable.
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => {
                log::debug!("Loaded UI config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::error!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), UiError> {
        if self.storage_key.trim().is_empty() {
            return Err(UiError::Config("storage_key must not be empty".to_string()));
        }
        for (field, class) in [
            ("open_class", &self.open_class),
            ("light_class", &self.light_class),
            ("active_class", &self.active_class),
        ] {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(UiError::Config(format!("{} must be a single class name", field)));
            }
        }
        ThemeName::new(&self.default_theme).map_err(|e| UiError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn default_theme_name(&self) -> ThemeName {
        ThemeName::new(&self.default_theme).unwrap_or_else(|e| {
            log::warn!("{}; using {:?}", e, DEFAULT_THEME);
            ThemeName::builtin_default()
        })
    }

    pub fn stylesheet_href(&self, name: &ThemeName) -> String {
        name.stylesheet_href(&self.stylesheet_prefix, &self.stylesheet_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.hamburger_selector, ".nav-hamburger");
        assert_eq!(config.nav_panel_selector, ".nav-left");
        assert_eq!(config.light_class, "light-theme");
        assert_eq!(config.default_theme_name().as_str(), "osowoso");
    }

    #[test]
    fn test_json_overrides_only_named_fields() {
        let config = UiConfig::from_json(r#"{ "default_theme": "paper", "open_class": "is-open" }"#)
            .unwrap();
        assert_eq!(config.default_theme, "paper");
        assert_eq!(config.open_class, "is-open");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.theme_select_id, "theme-select");
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        assert!(matches!(UiConfig::from_json("{"), Err(UiError::Config(_))));
        assert!(matches!(
            UiConfig::from_json(r#"{ "storage_key": " " }"#),
            Err(UiError::Config(_))
        ));
        assert!(matches!(
            UiConfig::from_json(r#"{ "default_theme": "../x" }"#),
            Err(UiError::Config(_))
        ));
        assert!(matches!(
            UiConfig::from_json(r#"{ "light_class": "a b" }"#),
            Err(UiError::Config(_))
        ));
    }

    #[test]
    fn test_stylesheet_href_uses_configured_path() {
        let config = UiConfig::from_json(r#"{ "stylesheet_prefix": "/static/", "stylesheet_suffix": ".min.css" }"#)
            .unwrap();
        assert_eq!(config.stylesheet_href(&config.default_theme_name()), "/static/osowoso.min.css");
    }
}
