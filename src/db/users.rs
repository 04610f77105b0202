// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User record repository.
//!
//! All known users are stored as one JSON array under a single durable key.
//! The list is small (one browser's worth of demo accounts), so lookups are a
//! linear scan and every mutation rewrites the whole array.
//!
//! Decoding is per entry. One bad element hides only itself, and it is kept
//! verbatim when the array is rewritten.

use super::{read_json, write_json, DurableStore};
use crate::error::StorageError;
use crate::models::user::default_avatar_url;
use crate::models::{Purchase, UserDraft, UserRecord};
use crate::time_utils::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

pub struct UserRepository<S> {
    store: S,
    key: String,
    clock: Arc<dyn Clock>,
}

impl<S: DurableStore> UserRepository<S> {
    pub fn new(store: S, users_key: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            key: users_key.into(),
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every stored user, in insertion order.
    ///
    /// An unreadable list reads as empty. Entries that fail to decode are
    /// skipped.
    pub fn all(&self) -> Vec<UserRecord> {
        self.load()
            .into_iter()
            .filter_map(|entry| match entry {
                StoredUser::Known(user) => Some(user),
                StoredUser::Opaque(_) => None,
            })
            .collect()
    }

    /// Exact, case-sensitive match on email.
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.all().into_iter().find(|u| u.email == email)
    }

    /// Insert a new record or merge into the one with the same email.
    ///
    /// Merging keeps the stored `id` and `created_at`, refreshes `last_login`
    /// and only replaces purchases when the draft carries them. An overwrite
    /// draft also replaces the id and avatar. Entries that could not be
    /// decoded are written back untouched.
    pub fn upsert(&self, draft: UserDraft) -> Result<UserRecord, StorageError> {
        let mut entries = self.load();
        let now = self.clock.now();
        let record = merge_into(&mut entries, draft, now);

        write_json(&self.store, &self.key, &entries)?;

        tracing::debug!(
            email = %record.email,
            total_users = entries.len(),
            "User record stored"
        );
        Ok(record)
    }

    /// The record `upsert` would store, without writing anything.
    pub fn preview(&self, draft: UserDraft) -> UserRecord {
        let mut entries = self.load();
        merge_into(&mut entries, draft, self.clock.now())
    }

    fn load(&self) -> Vec<StoredUser> {
        let raw = match read_json::<Vec<Value>, _>(&self.store, &self.key) {
            Ok(raw) => raw.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Treating user list as empty");
                return Vec::new();
            }
        };

        raw.into_iter()
            .enumerate()
            .map(|(index, value)| match UserRecord::deserialize(&value) {
                Ok(user) => StoredUser::Known(user),
                Err(e) => {
                    tracing::warn!(
                        key = %self.key,
                        index,
                        error = %e,
                        "Skipping undecodable user entry"
                    );
                    StoredUser::Opaque(value)
                }
            })
            .collect()
    }
}

/// One element of the stored array. Undecodable elements are carried as raw
/// JSON so a rewrite does not drop them.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum StoredUser {
    Known(UserRecord),
    Opaque(Value),
}

impl StoredUser {
    fn opaque_email(&self) -> Option<&str> {
        match self {
            StoredUser::Opaque(value) => value.get("email").and_then(Value::as_str),
            StoredUser::Known(_) => None,
        }
    }
}

fn merge_into(entries: &mut Vec<StoredUser>, draft: UserDraft, now: DateTime<Utc>) -> UserRecord {
    let existing = entries.iter_mut().find_map(|entry| match entry {
        StoredUser::Known(user) if user.email == draft.email => Some(user),
        _ => None,
    });

    match existing {
        Some(existing) => {
            existing.name = draft.name;
            existing.auth_method = draft.auth_method;
            if let Some(purchases) = draft.purchases {
                existing.purchases = dedup_purchases(purchases);
            }
            if draft.overwrite {
                existing.id = draft.id;
                existing.profile_image = draft
                    .profile_image
                    .unwrap_or_else(|| default_avatar_url(&existing.name));
            } else {
                existing.profile_image = draft
                    .profile_image
                    .or_else(|| Some(existing.profile_image.clone()).filter(|p| !p.is_empty()))
                    .unwrap_or_else(|| default_avatar_url(&existing.name));
            }
            existing.last_login = now;
            existing.clone()
        }
        None => {
            // A fresh record supersedes an undecodable entry for the same email.
            entries.retain(|entry| entry.opaque_email() != Some(draft.email.as_str()));

            let profile_image = draft
                .profile_image
                .unwrap_or_else(|| default_avatar_url(&draft.name));
            let record = UserRecord {
                id: draft.id,
                name: draft.name,
                email: draft.email,
                auth_method: draft.auth_method,
                created_at: now,
                last_login: now,
                purchases: dedup_purchases(draft.purchases.unwrap_or_default()),
                profile_image,
            };
            entries.push(StoredUser::Known(record.clone()));
            record
        }
    }
}

/// Keep the first entry for each course id.
fn dedup_purchases(purchases: Vec<Purchase>) -> Vec<Purchase> {
    let mut seen = HashSet::new();
    purchases
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
