//! Token persistence in `window.localStorage`

use activity_signup::{StoreError, TokenStore};
use web_sys::Storage;

/// Session token under a single localStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let store = LocalStorageTokenStore::new("authToken-test");
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        // Same key, second handle
        assert_eq!(
            LocalStorageTokenStore::new("authToken-test").load().unwrap().as_deref(),
            Some("abc")
        );

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
