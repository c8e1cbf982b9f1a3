use gloo_storage::{LocalStorage, Storage};
use shared::{StorageError, TokenStore, ADMIN_TOKEN_KEY};

/// Token slot in the browser's `localStorage`.
///
/// Values are stored as plain strings rather than JSON so other pages can
/// read the key directly.
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn admin() -> Self {
        Self {
            key: ADMIN_TOKEN_KEY,
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::raw().get_item(self.key).ok().flatten()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(self.key, token)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn clear(&self) {
        LocalStorage::delete(self.key);
    }
}
