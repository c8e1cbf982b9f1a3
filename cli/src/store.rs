use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use shared::{StorageError, TokenStore, ADMIN_TOKEN_KEY};

/// Token slot backed by a JSON object on disk, keyed like browser storage.
///
/// Writing the admin token leaves any other keys in the file untouched.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: &'static str,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: ADMIN_TOKEN_KEY,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Map::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                StorageError(format!("{} is not a JSON object: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(StorageError(format!(
                "cannot read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| StorageError(format!("cannot write {}: {}", self.path.display(), e)))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => entries
                .get(self.key)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear(&self) {
        let result = self.read_entries().and_then(|mut entries| {
            if entries.remove(self.key).is_some() {
                self.write_entries(&entries)
            } else {
                Ok(())
            }
        });
        if let Err(e) = result {
            tracing::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("admin-token-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileTokenStore::new(temp_path());
        assert_eq!(store.get(), None);
        store.clear();
        assert!(!store.path().exists());
    }

    #[test]
    fn set_get_clear_round_trip() {
        let path = temp_path();
        let store = FileTokenStore::new(&path);

        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "authTokenAdmin": "abc" }));

        store.clear();
        assert_eq!(store.get(), None);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn set_preserves_unrelated_keys() {
        let path = temp_path();
        fs::write(&path, r#"{"theme":"dark","authTokenAdmin":"old"}"#).unwrap();
        let store = FileTokenStore::new(&path);

        store.set("new").unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            on_disk,
            serde_json::json!({ "theme": "dark", "authTokenAdmin": "new" })
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn corrupt_file_refuses_write() {
        let path = temp_path();
        fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(&path);

        assert!(store.set("abc").is_err());
        assert_eq!(store.get(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");

        fs::remove_file(path).unwrap();
    }
}
