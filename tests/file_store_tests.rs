// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sessions backed by the on-disk store.

use rising_helixx::config::Config;
use rising_helixx::db::FileStore;
use rising_helixx::services::{CatalogService, CookieMirror, SessionAccessor, SessionState};
use rising_helixx::SiteContext;
use std::fs;
use std::sync::Arc;

mod common;
use common::test_clock;

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let config = Config::default();
    let clock = test_clock();
    let course = CatalogService.find("robotics-advanced").unwrap();

    {
        let cookies = CookieMirror::new(&config, clock.clone());
        let mut session =
            SessionAccessor::new(&config, FileStore::open(&path), cookies, clock.clone());
        session.resolve_at_startup();
        session.login("disk@example.com", "secret").unwrap();
        session.add_purchase(course).unwrap();
    }

    // New process, no cookies at all.
    let cookies = CookieMirror::new(&config, clock.clone());
    let site = SiteContext::init_with_clock(config, FileStore::open(&path), cookies, clock);

    let user = site.session.current_user().expect("session should be restored");
    assert_eq!(user.email, "disk@example.com");
    assert!(user.has_purchased("robotics-advanced"));
}

#[test]
fn test_store_file_uses_namespaced_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let config = Config {
        storage_namespace: "staging".to_string(),
        ..Config::default()
    };
    let clock = test_clock();

    let cookies = CookieMirror::new(&config, clock.clone());
    let mut session = SessionAccessor::new(&config, FileStore::open(&path), cookies, clock);
    session.login("ns@example.com", "secret").unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("staging_users").is_some());
    assert!(raw.get("staging_current_user").is_some());
    assert_eq!(session.cookies().name(), "staging_user");
}

#[test]
fn test_corrupt_file_falls_back_to_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let config = Config::default();
    let clock = test_clock();
    let cookies = CookieMirror::new(&config, clock.clone());

    let mut session =
        SessionAccessor::new(&config, FileStore::open(&path), cookies.clone(), clock.clone());
    session.login("crash@example.com", "secret").unwrap();

    fs::write(&path, "\u{0}\u{0}garbage").unwrap();

    let mut reloaded = SessionAccessor::new(&config, FileStore::open(&path), cookies, clock);
    let state = reloaded.resolve_at_startup().clone();
    assert!(matches!(state, SessionState::Authenticated(u) if u.email == "crash@example.com"));

    // The next write replaces the corrupt file with a readable one.
    reloaded.login("crash@example.com", "secret").unwrap();
    assert_eq!(reloaded.users().all().len(), 1);
}

#[test]
fn test_site_context_shares_store_handle() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("storage.json")));
    let config = Config::default();
    let clock = test_clock();

    let mut site = SiteContext::init_with_clock(
        config.clone(),
        store.clone(),
        CookieMirror::new(&config, clock.clone()),
        clock.clone(),
    );
    assert_eq!(site.session.state(), &SessionState::Anonymous);
    site.session.login("arc@example.com", "secret").unwrap();

    let other = SiteContext::init_with_clock(
        config.clone(),
        store,
        CookieMirror::new(&config, clock.clone()),
        clock,
    );
    assert!(other.session.is_authenticated());
}
