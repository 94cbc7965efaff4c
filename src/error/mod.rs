mod ui;

pub use ui::UiError;
