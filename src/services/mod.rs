// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod cookie_mirror;
pub mod flow;
pub mod google;
pub mod outbound;
pub mod relay;
pub mod session;

pub use catalog::CatalogService;
pub use cookie_mirror::CookieMirror;
pub use flow::{
    AuthFlow, CheckoutFlow, CheckoutQuote, LoginForm, MountGuard, RegisterForm, SimulatedLatency,
};
pub use google::{GoogleIdentity, GoogleProfile, SimulatedGoogleSignIn};
pub use relay::FormRelayClient;
pub use session::{SessionAccessor, SessionState};
