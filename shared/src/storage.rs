use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::types::ADMIN_TOKEN_KEY;

/// Slot holding the admin token between page loads.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Process-local key/value store. Clones share the same slots.
#[derive(Debug, Clone)]
pub struct MemoryTokenStore {
    key: &'static str,
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::with_key(ADMIN_TOKEN_KEY)
    }

    pub fn with_key(key: &'static str) -> Self {
        Self {
            key,
            entries: Rc::default(),
            writes: Rc::default(),
        }
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Raw lookup of any key, for inspecting what was written where.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.raw(self.key)
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(self.key.to_string(), token.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&self) {
        self.entries.borrow_mut().remove(self.key);
    }
}
