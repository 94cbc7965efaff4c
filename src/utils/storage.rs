use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiError;

/// String key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Browser `localStorage` of the current origin.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or_else(|| UiError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| UiError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage.get_item(key).map_err(|e| UiError::Storage(UiError::from(e).to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage.set_item(key, value).map_err(|e| UiError::Storage(UiError::from(e).to_string()))
    }
}

/// Session-only store. Stands in for `localStorage` when the browser refuses
/// access, and backs the tests.
#[derive(Default, Debug)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `localStorage` when it can be opened, otherwise a [`MemoryStore`].
pub fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}; preferences will not survive a reload", e);
            Box::new(MemoryStore::default())
        }
    }
}
