// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Rising Helixx: client-side state for the Rising Helixx course site
//!
//! This crate holds the session and purchase state of a visitor, the static
//! course catalog, and the outbound contact channels (mail, WhatsApp and the
//! form relay). Storage is pluggable through [`db::DurableStore`], with the
//! session pointer mirrored into a cookie.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::DurableStore;
use services::{AuthFlow, CatalogService, CheckoutFlow, CookieMirror, SessionAccessor};
use time_utils::{Clock, SystemClock};

/// Everything a page needs, built once at startup.
pub struct SiteContext<S> {
    pub config: Config,
    pub catalog: CatalogService,
    pub session: SessionAccessor<S>,
}

impl<S: DurableStore> SiteContext<S> {
    /// Build the context and resolve the current user.
    pub fn init(config: Config, store: S, cookies: CookieMirror) -> Self {
        Self::init_with_clock(config, store, cookies, Arc::new(SystemClock))
    }

    pub fn init_with_clock(
        config: Config,
        store: S,
        cookies: CookieMirror,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut session = SessionAccessor::new(&config, store, cookies, clock);
        session.resolve_at_startup();

        tracing::info!(
            namespace = %config.storage_namespace,
            authenticated = session.is_authenticated(),
            demo_mode = config.demo_mode,
            "Site context initialized"
        );

        Self {
            config,
            catalog: CatalogService,
            session,
        }
    }

    pub fn auth_flow(&self) -> AuthFlow {
        AuthFlow::from_config(&self.config)
    }

    pub fn checkout_flow(&self) -> CheckoutFlow {
        CheckoutFlow::default()
    }
}
