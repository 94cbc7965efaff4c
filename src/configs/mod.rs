mod ui_config;

pub use ui_config::UiConfig;
