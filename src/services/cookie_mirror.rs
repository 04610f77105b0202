// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cookie mirror of the session pointer.
//!
//! The current-user snapshot is copied into a `Path=/` cookie that expires a
//! fixed number of days after each write. The jar models what the browser
//! holds: an expired cookie reads as absent.

use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

use crate::config::{Config, MAX_COOKIE_MAX_AGE_DAYS, MIN_COOKIE_MAX_AGE_DAYS};
use crate::error::StorageError;
use crate::models::UserRecord;
use crate::time_utils::{to_offset_datetime, Clock};

/// Shared handle to the session cookie. Clones see the same jar.
#[derive(Clone)]
pub struct CookieMirror {
    name: String,
    max_age: chrono::Duration,
    clock: Arc<dyn Clock>,
    jar: Arc<Mutex<CookieJar>>,
}

impl CookieMirror {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: config.cookie_name(),
            max_age: chrono::Duration::days(
                config
                    .cookie_max_age_days
                    .clamp(MIN_COOKIE_MAX_AGE_DAYS, MAX_COOKIE_MAX_AGE_DAYS),
            ),
            clock,
            jar: Arc::new(Mutex::new(CookieJar::new())),
        }
    }

    /// Seed the jar from a `Cookie:` header string such as `document.cookie`.
    pub fn from_cookie_header(config: &Config, clock: Arc<dyn Clock>, header: &str) -> Self {
        let mirror = Self::new(config, clock);
        mirror.ingest(header);
        mirror
    }

    /// Seed the jar from the `Cookie` headers of an HTTP request.
    pub fn from_request_headers(
        config: &Config,
        clock: Arc<dyn Clock>,
        headers: &HeaderMap,
    ) -> Self {
        let mirror = Self::new(config, clock);
        for value in headers.get_all(header::COOKIE) {
            match value.to_str() {
                Ok(raw) => mirror.ingest(raw),
                Err(_) => tracing::warn!("Ignoring non-ASCII Cookie header"),
            }
        }
        mirror
    }

    // Values are kept exactly as sent; decoding happens in `read`.
    fn ingest(&self, raw: &str) {
        for pair in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            match Cookie::parse(pair.to_owned()) {
                Ok(cookie) => self.put(cookie),
                Err(e) => tracing::debug!(error = %e, "Skipping unparseable cookie pair"),
            }
        }
    }

    fn put(&self, cookie: Cookie<'static>) {
        let mut guard = self.jar.lock().unwrap_or_else(|e| e.into_inner());
        let jar = std::mem::replace(&mut *guard, CookieJar::new());
        *guard = jar.add(cookie);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store `user` with a fresh expiry of now + max age.
    pub fn write(&self, user: &UserRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        let expires = self
            .clock
            .now()
            .checked_add_signed(self.max_age)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let expires = to_offset_datetime(expires)?;

        let cookie = Cookie::build((self.name.clone(), urlencoding::encode(&json).into_owned()))
            .path("/")
            .expires(expires)
            .build();

        self.put(cookie);
        tracing::debug!(cookie = %self.name, email = %user.email, "Session cookie written");
        Ok(())
    }

    /// Overwrite the cookie with an empty value that expired at the epoch.
    pub fn clear(&self) {
        let cookie = Cookie::build((self.name.clone(), String::new()))
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .build();

        self.put(cookie);
        tracing::debug!(cookie = %self.name, "Session cookie cleared");
    }

    /// Decode the mirrored user, if a live cookie holds one.
    ///
    /// A live cookie with an undecodable value is [`StorageError::Malformed`].
    pub fn read(&self) -> Result<Option<UserRecord>, StorageError> {
        let Some(value) = self.live_value() else {
            return Ok(None);
        };

        let malformed = |reason: String| StorageError::Malformed {
            key: self.name.clone(),
            reason,
        };

        let decoded = urlencoding::decode(&value).map_err(|e| malformed(e.to_string()))?;
        serde_json::from_str(&decoded)
            .map(Some)
            .map_err(|e| malformed(e.to_string()))
    }

    fn live_value(&self) -> Option<String> {
        let jar = self.jar.lock().unwrap_or_else(|e| e.into_inner());
        let cookie = jar.get(&self.name)?;

        if let Some(expires) = cookie.expires_datetime() {
            // A clock past the representable range has outlived every expiry.
            let expired = to_offset_datetime(self.clock.now()).map_or(true, |now| expires <= now);
            if expired {
                return None;
            }
        }

        Some(cookie.value().to_string()).filter(|v| !v.is_empty())
    }

    /// `Set-Cookie` value for the most recent write or clear.
    pub fn set_cookie_header(&self) -> Option<String> {
        let jar = self.jar.lock().unwrap_or_else(|e| e.into_inner());
        jar.get(&self.name).map(|c| c.to_string())
    }

    /// `Cookie:` header a browser would send on the next page load.
    pub fn cookie_header(&self) -> String {
        self.live_value()
            .map(|value| format!("{}={}", self.name, value))
            .unwrap_or_default()
    }
}
