mod logging;
mod preference;
mod storage;
mod theme_state;

pub use logging::init_logging;
pub use preference::{ load_preference, save_preference, Preference, ThemeName, DEFAULT_THEME };
pub use storage::{ open_store, LocalStore, MemoryStore, PreferenceStore };
pub use theme_state::{ IconState, ThemeState };
