mod app;
pub mod configs;
pub mod controllers;
pub mod error;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::app::{ change_theme, early_apply_theme, start };
pub use crate::configs::UiConfig;
pub use crate::error::UiError;
pub use crate::utils::*;
