// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client session accessor.
//!
//! Resolves the current user at startup and owns every operation that changes
//! it. The session pointer is written to the durable store and to the cookie
//! mirror on each change; the durable copy wins when both are present.
//!
//! Emails are trimmed of surrounding whitespace, then matched exactly and
//! case-sensitively. Mutations made before startup resolution run it first.
//!
//! Passwords are accepted and ignored. This is demo behavior: there is no
//! credential store to check them against, so login always succeeds.

use std::sync::Arc;
use validator::Validate;

use crate::config::Config;
use crate::db::{read_json, write_json, DurableStore, UserRepository};
use crate::error::{AppError, Result};
use crate::models::user::local_part;
use crate::models::{AuthMethod, CourseOffering, Purchase, UserDraft, UserPatch, UserRecord};
use crate::services::cookie_mirror::CookieMirror;
use crate::services::google::{GoogleIdentity, SimulatedGoogleSignIn};
use crate::time_utils::Clock;

/// Where the accessor is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup resolution has not run yet
    Unresolved,
    /// Resolved, nobody signed in
    Anonymous,
    /// Resolved, with the current user snapshot
    Authenticated(UserRecord),
}

pub struct SessionAccessor<S> {
    users: UserRepository<S>,
    current_user_key: String,
    cookies: CookieMirror,
    google: Box<dyn GoogleIdentity>,
    clock: Arc<dyn Clock>,
    state: SessionState,
}

impl<S: DurableStore> SessionAccessor<S> {
    pub fn new(config: &Config, store: S, cookies: CookieMirror, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: UserRepository::new(store, config.users_key(), clock.clone()),
            current_user_key: config.current_user_key(),
            cookies,
            google: Box::new(SimulatedGoogleSignIn::new(clock.clone())),
            clock,
            state: SessionState::Unresolved,
        }
    }

    /// Replace the Google sign-in collaborator.
    pub fn with_google(mut self, google: Box<dyn GoogleIdentity>) -> Self {
        self.google = google;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// True until startup resolution has run.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unresolved
    }

    pub fn users(&self) -> &UserRepository<S> {
        &self.users
    }

    pub fn cookies(&self) -> &CookieMirror {
        &self.cookies
    }

    /// Resolve the current user: durable store first, then the cookie.
    ///
    /// Runs once; later calls return the state unchanged. Never fails, a
    /// backend that cannot be read counts as holding no user.
    pub fn resolve_at_startup(&mut self) -> &SessionState {
        if self.state != SessionState::Unresolved {
            return &self.state;
        }

        let user = self
            .read_durable_pointer()
            .or_else(|| self.read_cookie_pointer());

        self.state = match user {
            Some(user) => {
                tracing::info!(email = %user.email, "Session resolved");
                SessionState::Authenticated(user)
            }
            None => {
                tracing::debug!("No stored session, starting anonymous");
                SessionState::Anonymous
            }
        };
        &self.state
    }

    fn read_durable_pointer(&self) -> Option<UserRecord> {
        match read_json(self.users.store(), &self.current_user_key) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(
                    key = %self.current_user_key,
                    error = %e,
                    "Ignoring unreadable session pointer"
                );
                None
            }
        }
    }

    fn read_cookie_pointer(&self) -> Option<UserRecord> {
        match self.cookies.read() {
            Ok(user) => {
                if user.is_some() {
                    tracing::info!("Session restored from cookie mirror");
                }
                user
            }
            Err(e) => {
                tracing::warn!(
                    cookie = %self.cookies.name(),
                    error = %e,
                    "Ignoring unreadable session cookie"
                );
                None
            }
        }
    }

    /// Sign in with an email. The password is not checked.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<UserRecord> {
        self.resolve_at_startup();
        let email = require_email(email)?;

        let draft = match self.users.find_by_email(email) {
            Some(existing) => existing.into(),
            None => UserDraft::email_account(
                self.time_token("user"),
                local_part(email).to_string(),
                email.to_string(),
            ),
        };

        let user = self.persist(draft);
        tracing::info!(email = %user.email, "User logged in");
        Ok(user)
    }

    /// Create an account. An existing record with the same email is
    /// overwritten in place rather than rejected, keeping only `created_at`.
    /// The password is not checked.
    pub fn register(&mut self, name: &str, email: &str, _password: &str) -> Result<UserRecord> {
        self.resolve_at_startup();
        let email = require_email(email)?;
        let name = match name.trim() {
            "" => local_part(email),
            trimmed => trimmed,
        };

        let draft =
            UserDraft::registration(self.time_token("user"), name.to_string(), email.to_string());

        let user = self.persist(draft);
        tracing::info!(email = %user.email, "User registered");
        Ok(user)
    }

    /// Sign in through the Google collaborator.
    pub fn login_with_google(&mut self) -> Result<UserRecord> {
        self.resolve_at_startup();
        let profile = self.google.sign_in()?;

        let draft = UserDraft {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            auth_method: AuthMethod::Google,
            purchases: None,
            profile_image: profile.picture,
            overwrite: false,
        };

        let user = self.persist(draft);
        tracing::info!(email = %user.email, "User logged in with Google");
        Ok(user)
    }

    /// Clear the session pointer from both backends. The user record stays.
    pub fn logout(&mut self) {
        if let Err(e) = self.users.store().remove(&self.current_user_key) {
            tracing::error!(error = %e, "Failed to clear stored session pointer");
        }
        self.cookies.clear();

        if let SessionState::Authenticated(user) = &self.state {
            tracing::info!(email = %user.email, "User logged out");
        }
        self.state = SessionState::Anonymous;
    }

    /// Apply a profile patch to the signed-in user.
    ///
    /// Returns `Ok(None)` when nobody is signed in.
    pub fn update_user(&mut self, patch: UserPatch) -> Result<Option<UserRecord>> {
        self.resolve_at_startup();
        let Some(current) = self.current_user() else {
            return Ok(None);
        };
        let mut updated = current.clone();

        let patch = patch.normalized();
        patch.validate()?;
        patch.apply(&mut updated);

        Ok(Some(self.persist(updated.into())))
    }

    /// Record a purchase for the signed-in user.
    ///
    /// Buying a course twice is a no-op that keeps the original `purchased_at`.
    /// Returns `None` when nobody is signed in.
    pub fn add_purchase(&mut self, course: &CourseOffering) -> Option<UserRecord> {
        self.resolve_at_startup();
        let current = self.current_user()?;
        if current.has_purchased(course.id) {
            tracing::debug!(course = course.id, "Course already purchased");
            return Some(current.clone());
        }

        let mut updated = current.clone();
        updated
            .purchases
            .push(Purchase::from_course(course, self.clock.now()));

        let user = self.persist(updated.into());
        tracing::info!(email = %user.email, course = course.id, "Purchase recorded");
        Some(user)
    }

    /// Upsert, then refresh the pointer in both backends. Writes are
    /// best-effort: failures are logged and the session still advances.
    fn persist(&mut self, draft: UserDraft) -> UserRecord {
        let user = match self.users.upsert(draft.clone()) {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(email = %draft.email, error = %e, "Failed to store user record");
                self.users.preview(draft)
            }
        };

        if let Err(e) = write_json(self.users.store(), &self.current_user_key, &user) {
            tracing::error!(error = %e, "Failed to store session pointer");
        }
        if let Err(e) = self.cookies.write(&user) {
            tracing::error!(error = %e, "Failed to write session cookie");
        }

        self.state = SessionState::Authenticated(user.clone());
        user
    }

    fn time_token(&self, prefix: &str) -> String {
        format!("{prefix}_{}", self.clock.now().timestamp_millis())
    }
}

/// Strip surrounding whitespace; nothing else about the address changes.
fn require_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }
    Ok(email)
}
