use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::utils::{ PreferenceStore, PresentationMarker };

/// Shared, ordered record of every collaborator call.
pub type CallLog = Rc<RefCell<Vec<String>>>;

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    calls: CallLog,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn logging_to(mut self, calls: &CallLog) -> Self {
        self.calls = calls.clone();
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.calls.borrow_mut().push(format!("load {}", key));
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.calls.borrow_mut().push(format!("save {}={}", key, value));
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that throws on every access, like a browser with storage blocked.
#[derive(Clone, Default)]
pub struct FailingStore {
    pub attempts: Rc<RefCell<usize>>,
}

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        *self.attempts.borrow_mut() += 1;
        Err(ThemeError::StorageUnavailable("SecurityError: access denied".to_string()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        *self.attempts.borrow_mut() += 1;
        Err(ThemeError::StorageUnavailable("QuotaExceededError".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingMarker {
    attributes: Rc<RefCell<HashMap<String, String>>>,
    calls: CallLog,
}

impl RecordingMarker {
    pub fn logging_to(mut self, calls: &CallLog) -> Self {
        self.calls = calls.clone();
        self
    }

    pub fn get(&self, attribute: &str) -> Option<String> {
        self.attributes.borrow().get(attribute).cloned()
    }
}

impl PresentationMarker for RecordingMarker {
    fn mark(&self, attribute: &str, value: &str) -> Result<(), ThemeError> {
        self.calls.borrow_mut().push(format!("mark {}={}", attribute, value));
        self.attributes.borrow_mut().insert(attribute.to_string(), value.to_string());
        Ok(())
    }
}
