/// Light/dark mode of the document root. Dark unless the root carries the
/// light class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeState {
    Light,
    #[default]
    Dark,
}

impl ThemeState {
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light { ThemeState::Light } else { ThemeState::Dark }
    }

    pub fn is_light(self) -> bool {
        self == ThemeState::Light
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeState::Light),
            "dark" => Some(ThemeState::Dark),
            _ => None,
        }
    }
}

/// Active flags of the two toggle icons. The icon for the *other* theme is
/// the active one, since it is what a click switches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconState {
    pub light_active: bool,
    pub dark_active: bool,
}

impl IconState {
    pub fn for_theme(theme: ThemeState) -> Self {
        let is_light = theme.is_light();
        Self {
            light_active: !is_light,
            dark_active: is_light,
        }
    }
}
