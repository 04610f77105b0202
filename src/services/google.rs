// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google sign-in collaborator.
//!
//! The site has no OAuth client. [`SimulatedGoogleSignIn`] fabricates a
//! profile so the rest of the flow can be exercised; a real deployment swaps
//! in an implementation of [`GoogleIdentity`] backed by an OAuth handshake.

use ring::rand::{generate, SystemRandom};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::time_utils::Clock;

/// Identity returned by a Google sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Something that can sign a visitor in with Google.
pub trait GoogleIdentity: Send + Sync {
    fn sign_in(&self) -> Result<GoogleProfile>;
}

/// Demo sign-in: `google_<millis>`, "Google User", `user<0..999>@gmail.com`.
pub struct SimulatedGoogleSignIn {
    clock: Arc<dyn Clock>,
    rng: SystemRandom,
}

impl SimulatedGoogleSignIn {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rng: SystemRandom::new(),
        }
    }

    fn random_suffix(&self) -> Result<u32> {
        let bytes: [u8; 4] = generate(&self.rng)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("random source unavailable")))?
            .expose();
        Ok(u32::from_le_bytes(bytes) % 1000)
    }
}

impl GoogleIdentity for SimulatedGoogleSignIn {
    fn sign_in(&self) -> Result<GoogleProfile> {
        let millis = self.clock.now().timestamp_millis();
        let profile = GoogleProfile {
            id: format!("google_{millis}"),
            name: "Google User".to_string(),
            email: format!("user{}@gmail.com", self.random_suffix()?),
            picture: None,
        };

        tracing::info!(email = %profile.email, "Simulated Google sign-in");
        Ok(profile)
    }
}
