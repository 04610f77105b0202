// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use rising_helixx::config::Config;
use rising_helixx::db::{DurableStore, MemoryStore};
use rising_helixx::error::StorageError;
use rising_helixx::services::{CookieMirror, SessionAccessor};
use rising_helixx::time_utils::ManualClock;
use std::sync::Arc;

/// 2026-02-01 09:00:00 UTC
#[allow(dead_code)]
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start_time()))
}

/// A browser profile: one durable store and one cookie jar, shared by every
/// session opened on it.
#[allow(dead_code)]
pub struct Browser {
    pub config: Config,
    pub store: MemoryStore,
    pub cookies: CookieMirror,
    pub clock: Arc<ManualClock>,
}

#[allow(dead_code)]
impl Browser {
    pub fn new() -> Self {
        let config = Config::default();
        let clock = test_clock();
        let cookies = CookieMirror::new(&config, clock.clone());
        Self {
            config,
            store: MemoryStore::new(),
            cookies,
            clock,
        }
    }

    /// Open a page: a fresh accessor over the shared backends, resolved.
    pub fn open(&self) -> SessionAccessor<MemoryStore> {
        let mut session = self.open_unresolved();
        session.resolve_at_startup();
        session
    }

    /// Open a page without running startup resolution.
    pub fn open_unresolved(&self) -> SessionAccessor<MemoryStore> {
        SessionAccessor::new(
            &self.config,
            self.store.clone(),
            self.cookies.clone(),
            self.clock.clone(),
        )
    }

    /// Open a page whose cookie jar was rebuilt from the `Cookie:` header
    /// this browser would send.
    pub fn open_with_sent_cookies(&self) -> SessionAccessor<MemoryStore> {
        let cookies = CookieMirror::from_cookie_header(
            &self.config,
            self.clock.clone(),
            &self.cookies.cookie_header(),
        );
        let mut session =
            SessionAccessor::new(&self.config, self.store.clone(), cookies, self.clock.clone());
        session.resolve_at_startup();
        session
    }
}

/// Reads find nothing and every write fails.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct UnavailableStore;

impl DurableStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}
