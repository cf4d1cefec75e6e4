use crate::persistence::kv_store::{KeyValueStore, StoreError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON (de)serialization on top of a [`KeyValueStore`].
///
/// Only structural checks happen here; the meaning of the values is the
/// caller's business.
#[derive(Debug)]
pub struct StoreAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StoreAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read and deserialize `key`. Missing or unparsable values are `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("event=store_load status=corrupt key={} error={}", key, e);
                None
            }
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = encode(key, value)?;
        self.store.set_item(key, json)
    }

    /// Serialize both values first, then write them together
    pub fn save_pair<A, B>(
        &mut self,
        (key_a, value_a): (&str, &A),
        (key_b, value_b): (&str, &B),
    ) -> Result<(), StoreError>
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let json_a = encode(key_a, value_a)?;
        let json_b = encode(key_b, value_b)?;
        self.store.set_items(&[(key_a, json_a), (key_b, json_b)])
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })
}
