//! Browser-backed session state for the landing page.
//!
//! The only thing persisted is the splash flag, kept in `sessionStorage` so it
//! lives exactly as long as the tab.

use landing_core::{SessionStore, StoreError};
use tracing::warn;

/// [`SessionStore`] over the browser's `sessionStorage`.
///
/// Values are stored raw rather than JSON-encoded so the flag reads `"true"`
/// in the browser's storage inspector. When the storage is blocked the store
/// reads nothing and refuses writes, so the splash simply plays again.
#[derive(Debug, Clone, Default)]
pub struct SessionFlagStore {
    storage: Option<web_sys::Storage>,
}

impl SessionFlagStore {
    /// Looks up the tab's `sessionStorage`.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| match window.session_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!("session storage is blocked: {e:?}");
                None
            }
        });
        SessionFlagStore { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl SessionStore for SessionFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::session::SPLASH_FLAG_KEY;

    #[test]
    fn missing_storage_reads_nothing_and_refuses_writes() {
        let mut store = SessionFlagStore::default();

        assert!(!store.is_available());
        assert_eq!(store.get(SPLASH_FLAG_KEY), None);
        assert_eq!(
            store.set(SPLASH_FLAG_KEY, "true"),
            Err(StoreError::Unavailable)
        );
    }
}
