//! Persisted client-side stores
//!
//! A [`PersistedStore`] keeps one serializable value under one storage key and
//! notifies subscribers after every write. Values are stored inside a
//! versioned envelope (`{"state": ..., "version": 0}`); an envelope written by
//! a different version reads back as absent.
//!
//! Storage backends implement [`KeyValueStorage`]: [`MemoryStorage`] for tests
//! and server rendering, [`BrowserStorage`] for `localStorage` in the browser.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Envelope version written by this build
pub const STORE_VERSION: u32 = 0;

/// Errors raised by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage rejected write to '{0}'")]
    WriteRejected(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Errors raised by a persisted store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Stored value under '{key}' is malformed: {reason}")]
    Decode { key: String, reason: String },

    #[error("Failed to encode value for '{key}': {reason}")]
    Encode { key: String, reason: String },
}

/// Synchronous string key-value storage
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing any envelope
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call so the handle stays `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StorageError::WriteRejected(key.to_string()))
    }
}

// There is no localStorage outside the browser.
#[cfg(not(feature = "hydrate"))]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: T,
    version: u32,
}

/// Handle returned by [`PersistedStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// One value of type `T` persisted under a fixed key.
///
/// Cloning yields another handle onto the same storage and subscriber list.
pub struct PersistedStore<T> {
    key: &'static str,
    storage: Arc<dyn KeyValueStorage>,
    listeners: Arc<RwLock<Vec<(SubscriptionId, Listener<T>)>>>,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for PersistedStore<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            storage: Arc::clone(&self.storage),
            listeners: Arc::clone(&self.listeners),
            _value: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for PersistedStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<T> PersistedStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(key: &'static str, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            key,
            storage,
            listeners: Arc::new(RwLock::new(Vec::new())),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read the current value.
    pub fn get(&self) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.storage.get_item(self.key)? else {
            return Ok(None);
        };

        let envelope: Envelope<Option<T>> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Decode {
                key: self.key.to_string(),
                reason: e.to_string(),
            })?;

        if envelope.version != STORE_VERSION {
            return Ok(None);
        }
        Ok(envelope.state)
    }

    /// Replace the whole value (or clear it with `None`) and notify subscribers.
    pub fn set(&self, value: Option<T>) -> Result<(), StoreError> {
        match &value {
            Some(state) => {
                let json = serde_json::to_string(&EnvelopeRef {
                    state,
                    version: STORE_VERSION,
                })
                .map_err(|e| StoreError::Encode {
                    key: self.key.to_string(),
                    reason: e.to_string(),
                })?;
                self.storage.set_item(self.key, &json)?;
            }
            None => self.storage.remove_item(self.key)?,
        }

        self.notify(value.as_ref());
        Ok(())
    }

    /// Read, transform and write back. A missing value stays missing.
    pub fn update(&self, f: impl FnOnce(T) -> T) -> Result<(), StoreError> {
        match self.get()? {
            Some(current) => self.set(Some(f(current))),
            None => Ok(()),
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.set(None)
    }

    /// Register a listener called after every successful write.
    pub fn subscribe(&self, listener: impl Fn(Option<&T>) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push((id, Arc::new(listener)));
        }
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.retain(|(existing, _)| *existing != id);
        }
    }

    fn notify(&self, value: Option<&T>) {
        // Snapshot first: listeners may subscribe or write to the store.
        let listeners: Vec<Listener<T>> = match self.listeners.read() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    fn store() -> (MemoryStorage, PersistedStore<Counter>) {
        let storage = MemoryStorage::new();
        let store = PersistedStore::new("counter", Arc::new(storage.clone()));
        (storage, store)
    }

    /// Backend that fails every call
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected(key.to_string()))
        }
        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected(key.to_string()))
        }
    }

    #[test]
    fn test_empty_store_reads_none() {
        let (_, store) = store();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_set_writes_versioned_envelope() {
        let (storage, store) = store();
        store.set(Some(Counter { value: 3 })).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&storage.raw("counter").unwrap()).unwrap();
        assert_eq!(raw["version"], 0);
        assert_eq!(raw["state"]["value"], 3);
        assert_eq!(store.get().unwrap(), Some(Counter { value: 3 }));
    }

    #[test]
    fn test_value_survives_new_handle_on_same_storage() {
        let (storage, store) = store();
        store.set(Some(Counter { value: 9 })).unwrap();

        let reopened: PersistedStore<Counter> = PersistedStore::new("counter", Arc::new(storage));
        assert_eq!(reopened.get().unwrap(), Some(Counter { value: 9 }));
    }

    #[test]
    fn test_clear_removes_key() {
        let (storage, store) = store();
        store.set(Some(Counter { value: 1 })).unwrap();
        store.clear().unwrap();

        assert!(storage.raw("counter").is_none());
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_decode_error() {
        let (storage, store) = store();
        storage.set_item("counter", "{not json").unwrap();
        assert!(matches!(store.get(), Err(StoreError::Decode { .. })));

        storage
            .set_item("counter", r#"{"state":{"unexpected":true},"version":0}"#)
            .unwrap();
        assert!(matches!(store.get(), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn test_other_version_reads_as_absent() {
        let (storage, store) = store();
        storage
            .set_item("counter", r#"{"state":{"value":5},"version":7}"#)
            .unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_subscribers_see_every_write() {
        let (_, store) = store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |value| {
            sink.lock().unwrap().push(value.map(|c| c.value));
        });

        store.set(Some(Counter { value: 1 })).unwrap();
        store.update(|c| Counter { value: c.value + 1 }).unwrap();
        store.clear().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![Some(1), Some(2), None]);
    }

    #[test]
    fn test_update_on_missing_value_is_noop() {
        let (_, store) = store();
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.update(|c| Counter { value: c.value + 1 }).unwrap();

        assert_eq!(store.get().unwrap(), None);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let (_, store) = store();
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.set(Some(Counter { value: 1 })).unwrap();
        store.unsubscribe(id);
        store.set(Some(Counter { value: 2 })).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_failed_write_does_not_notify() {
        let store: PersistedStore<Counter> = PersistedStore::new("counter", Arc::new(BrokenStorage));
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        assert!(store.set(Some(Counter { value: 1 })).is_err());
        assert!(matches!(store.get(), Err(StoreError::Storage(StorageError::Unavailable))));
        assert_eq!(*calls.lock().unwrap(), 0);
    }
}
