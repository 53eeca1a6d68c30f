//! Signals mirrored into `window.localStorage`.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::StorageError;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

/// Decodes a stored value, treating anything unreadable as absent.
pub fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
}

pub fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// String storage behind [`use_persistent_state`].
///
/// [`LocalStorage`] is used unless an `Rc<dyn KeyValueStore>` is found in context.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and decodes the value stored under `key`.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    decode(store.get(key).as_deref())
}

pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    store.set(key, &encode(key, value)?)
}

/// A signal that starts from the value stored under `key` and writes every change back.
///
/// # Arguments
/// - `key` - Local storage key
/// - `init` - Value used when nothing (or nothing decodable) is stored yet
pub fn use_persistent_state<T>(key: &'static str, init: impl FnOnce() -> T) -> Signal<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let store = use_hook(|| {
        try_consume_context::<Rc<dyn KeyValueStore>>()
            .unwrap_or_else(|| Rc::new(LocalStorage) as Rc<dyn KeyValueStore>)
    });
    let state = use_signal(|| load(store.as_ref(), key).unwrap_or_else(init));

    use_effect(move || {
        let value = state.read().clone();

        if let Err(e) = save(store.as_ref(), key, &value) {
            tracing::warn!("Failed to persist state: {}", e);
        }
    });

    state
}
