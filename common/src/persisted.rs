use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{KvBackend, Store};

/// A value bound to one storage key.
///
/// Initialized from the store (or a default) and written back after every
/// change. The in-memory value stays authoritative when a write fails.
#[derive(Debug, Clone)]
pub struct Persisted<T, B> {
    key: String,
    value: T,
    store: Store<B>,
}

impl<T, B> Persisted<T, B>
where
    T: Serialize + DeserializeOwned,
    B: KvBackend,
{
    /// Load `key`, falling back to `default` when absent or unreadable.
    pub fn open(store: Store<B>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = store.load(&key).unwrap_or(default);
        Self { key, value, store }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and persist it. Returns whether the write succeeded.
    pub fn set(&mut self, value: T) -> bool {
        self.value = value;
        self.store.save(&self.key, &self.value)
    }

    /// Derive the next value from the current one and persist it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// Remove the stored entry and reset the in-memory value to `default`.
    pub fn reset(&mut self, default: T) {
        self.store.clear(&self.key);
        self.value = default;
    }
}

impl<T, B> Persisted<Vec<T>, B>
where
    T: Serialize + DeserializeOwned,
    B: KvBackend,
{
    /// Load a list under `key`; anything other than a JSON array counts as absent.
    pub fn open_list(store: Store<B>, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = store.load_list(&key).unwrap_or_default();
        Self { key, value, store }
    }
}
