use web_sys::{ Element, Storage };

use crate::error::ThemeError;
use crate::utils::{ PreferenceStore, PresentationMarker };

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_string()))?;
        // Throws when storage is disabled, e.g. some private browsing modes.
        let storage = window
            .local_storage()?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage is null".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.storage.get_item(key)?)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

pub struct DocumentRoot {
    root: Element,
}

impl DocumentRoot {
    pub fn open() -> Result<Self, ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::DocumentUnavailable("no document element".to_string()))?;
        Ok(Self { root })
    }
}

impl PresentationMarker for DocumentRoot {
    fn mark(&self, attribute: &str, value: &str) -> Result<(), ThemeError> {
        self.root
            .set_attribute(attribute, value)
            .map_err(|e| ThemeError::DocumentUnavailable(format!("{:?}", e)))
    }
}
