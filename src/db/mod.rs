// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable storage layer.
//!
//! The site persists everything as strings under a handful of keys, the same
//! model as browser local storage. [`DurableStore`] is that key-value surface;
//! [`UserRepository`] layers typed user records on top of it.

pub mod file;
pub mod memory;
pub mod users;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use users::UserRepository;

use crate::error::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// A string key-value store that survives restarts.
///
/// Every `set` replaces the whole value in one step; there are no partial
/// writes.
pub trait DurableStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: DurableStore + ?Sized> DurableStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value. A present but undecodable value is
/// [`StorageError::Malformed`].
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: DurableStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Malformed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Encode a value as JSON and store it under `key`.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: DurableStore + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}
