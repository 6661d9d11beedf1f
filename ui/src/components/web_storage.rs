//! `localStorage` as a [`KvBackend`].
//!
//! Off the web (desktop/mobile builds, native tests) the dashboard falls back to
//! an in-memory store, so nothing is kept across restarts there.

use kgtrack_common::store::Store;

#[cfg(target_family = "wasm")]
pub use wasm_impl::WebStorage as AppBackend;

#[cfg(not(target_family = "wasm"))]
pub use kgtrack_common::store::MemoryBackend as AppBackend;

#[cfg(target_family = "wasm")]
mod wasm_impl {
    use kgtrack_common::store::{KvBackend, StoreError};
    use wasm_bindgen::{JsCast, JsValue};

    #[derive(Clone)]
    pub struct WebStorage {
        storage: Option<web_sys::Storage>,
    }

    impl WebStorage {
        pub fn local() -> Self {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                tracing::warn!("localStorage unavailable; changes will not be saved");
            }
            Self { storage }
        }

        fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
            self.storage
                .as_ref()
                .ok_or_else(|| StoreError::Backend("localStorage unavailable".into()))
        }
    }

    fn js_error(key: &str, err: JsValue) -> StoreError {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(e) if e.name() == "QuotaExceededError" => {
                StoreError::QuotaExceeded { key: key.into() }
            }
            Some(e) => StoreError::Backend(e.message()),
            None => StoreError::Backend(format!("{err:?}")),
        }
    }

    impl KvBackend for WebStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage()?.get_item(key).map_err(|e| js_error(key, e))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| js_error(key, e))
        }

        fn remove_item(&self, key: &str) -> Result<(), StoreError> {
            self.storage()?.remove_item(key).map_err(|e| js_error(key, e))
        }
    }
}

/// The store the dashboard persists into.
pub fn app_store() -> Store<AppBackend> {
    #[cfg(target_family = "wasm")]
    {
        Store::new(AppBackend::local())
    }
    #[cfg(not(target_family = "wasm"))]
    {
        Store::new(AppBackend::new())
    }
}
