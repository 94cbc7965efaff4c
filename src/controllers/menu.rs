#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn from_is_open(is_open: bool) -> Self {
        if is_open { MenuState::Open } else { MenuState::Closed }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// One element on the path from a click target up to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ancestor {
    Toggle,
    Panel,
    Link,
    Other,
}

/// Where a click landed relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub in_toggle: bool,
    pub in_panel: bool,
    pub on_link: bool,
}

impl ClickTarget {
    /// Classifies a click from its ancestry, target first. A link only
    /// counts when it sits inside the panel.
    pub fn from_ancestry(path: &[Ancestor]) -> Self {
        let mut target = Self::default();
        let mut link_seen = false;
        for ancestor in path {
            match ancestor {
                Ancestor::Toggle => target.in_toggle = true,
                Ancestor::Link => link_seen = true,
                Ancestor::Panel => {
                    target.in_panel = true;
                    target.on_link |= link_seen;
                }
                Ancestor::Other => {}
            }
        }
        target
    }

    pub fn outside() -> Self {
        Self::default()
    }

    pub fn toggle() -> Self {
        Self { in_toggle: true, ..Self::default() }
    }

    pub fn panel() -> Self {
        Self { in_panel: true, ..Self::default() }
    }

    pub fn link() -> Self {
        Self { in_panel: true, on_link: true, ..Self::default() }
    }
}

/// The three places menu state is reflected: panel class, ARIA attribute on
/// the toggle, and the toggle's icon glyph.
pub trait MenuView {
    fn is_panel_open(&self) -> bool;
    fn set_panel_open(&self, open: bool);
    fn set_aria_expanded(&self, value: &str);
    fn set_glyph(&self, glyph: &str);
}

pub struct MenuController<V: MenuView> {
    view: V,
    open_glyph: String,
    closed_glyph: String,
}

impl<V: MenuView> MenuController<V> {
    pub fn new(view: V, open_glyph: impl Into<String>, closed_glyph: impl Into<String>) -> Self {
        Self {
            view,
            open_glyph: open_glyph.into(),
            closed_glyph: closed_glyph.into(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_is_open(self.view.is_panel_open())
    }

    pub fn render(&self, state: MenuState) {
        self.view.set_panel_open(state.is_open());
        self.view.set_aria_expanded(state.aria_expanded());
        self.view.set_glyph(if state.is_open() { self.open_glyph.as_str() } else { self.closed_glyph.as_str() });
    }

    pub fn toggle(&self) -> MenuState {
        let next = self.state().toggled();
        self.render(next);
        log::debug!("Menu toggled: {:?}", next);
        next
    }

    pub fn close(&self) {
        self.render(MenuState::Closed);
    }

    /// Document-level clicks close the menu unless they hit the toggle or
    /// the panel.
    pub fn on_document_click(&self, target: ClickTarget) {
        if !target.in_toggle && !target.in_panel {
            self.close();
        }
    }

    pub fn on_panel_click(&self, target: ClickTarget) {
        if target.on_link {
            self.close();
        }
    }

    pub fn on_escape(&self) {
        if self.state().is_open() {
            self.close();
        }
    }
}
