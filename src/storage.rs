//! Browser Storage
//!
//! `localStorage` as the widget's key-value store.

use todo_core::{KeyValueStore, TodoError, TodoResult};

pub struct BrowserStorage {
    /// None when the browser denies storage (private mode, disabled cookies)
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; changes last for this session only");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| TodoError::StorageRead {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> TodoResult<()> {
        let Some(storage) = &self.storage else {
            return Err(TodoError::StorageWrite {
                key: key.to_string(),
                reason: "localStorage unavailable".to_string(),
            });
        };
        storage.set_item(key, value).map_err(|e| TodoError::StorageWrite {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
