// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form flows with simulated request latency.
//!
//! The auth modal and the checkout calculator both pretend to talk to a
//! backend by waiting a fixed delay. Every delay is tied to a [`MountGuard`]
//! owned by the component that started it; once the guard is dropped the
//! pending work is abandoned and reports [`AppError::Cancelled`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::config::{Config, CHECKOUT_LATENCY_MS, GOOGLE_SIGN_IN_LATENCY_MS};
use crate::db::DurableStore;
use crate::error::{AppError, Result};
use crate::models::{CourseOffering, Currency, UserRecord};
use crate::services::catalog::{format_amount, CatalogService};
use crate::services::session::SessionAccessor;

/// Lifetime of a mounted UI component.
///
/// Dropping the guard cancels every delayed callback started with its token.
#[derive(Debug, Default)]
pub struct MountGuard {
    token: CancellationToken,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to hand to delayed work. Cancelled when the guard goes away.
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Unmount without dropping.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A fixed delay standing in for a network round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay, then run `f` if `token` is still live.
    pub async fn run<T, F>(&self, token: &CancellationToken, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.wait(token).await?;
        f()
    }

    async fn wait(&self, token: &CancellationToken) -> Result<()> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!("Simulated request abandoned after unmount");
                Err(AppError::Cancelled)
            }
            _ = tokio::time::sleep(self.delay) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl LoginForm {
    fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }
}

impl RegisterForm {
    fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

/// Auth modal logic: validate, wait, then call the session accessor.
#[derive(Debug, Clone, Copy)]
pub struct AuthFlow {
    email_latency: SimulatedLatency,
    google_latency: SimulatedLatency,
}

impl AuthFlow {
    pub fn new(email_latency: SimulatedLatency, google_latency: SimulatedLatency) -> Self {
        Self {
            email_latency,
            google_latency,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SimulatedLatency::from_millis(config.simulated_latency_ms),
            SimulatedLatency::from_millis(GOOGLE_SIGN_IN_LATENCY_MS),
        )
    }

    pub async fn submit_login<S: DurableStore>(
        &self,
        session: &mut SessionAccessor<S>,
        form: LoginForm,
        token: &CancellationToken,
    ) -> Result<UserRecord> {
        let form = form.normalized();
        form.validate()?;

        let result = self
            .email_latency
            .run(token, || session.login(&form.email, &form.password))
            .await;
        generic_failure(result, AppError::GENERIC_FAILURE)
    }

    pub async fn submit_register<S: DurableStore>(
        &self,
        session: &mut SessionAccessor<S>,
        form: RegisterForm,
        token: &CancellationToken,
    ) -> Result<UserRecord> {
        let form = form.normalized();
        form.validate()?;

        let result = self
            .email_latency
            .run(token, || {
                session.register(&form.name, &form.email, &form.password)
            })
            .await;
        generic_failure(result, AppError::GENERIC_FAILURE)
    }

    pub async fn submit_google<S: DurableStore>(
        &self,
        session: &mut SessionAccessor<S>,
        token: &CancellationToken,
    ) -> Result<UserRecord> {
        let result = self
            .google_latency
            .run(token, || session.login_with_google())
            .await;
        generic_failure(result, AppError::GOOGLE_FAILURE)
    }
}

// Validation and cancellation pass through; anything else becomes `message`.
fn generic_failure<T>(result: Result<T>, message: &str) -> Result<T> {
    result.map_err(|e| match e {
        AppError::Validation(_) | AppError::Cancelled => e,
        other => {
            tracing::warn!(error = %other, "Sign-in failed");
            AppError::AuthFailed(message.to_string())
        }
    })
}

/// Price shown by the checkout calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub course_id: &'static str,
    pub course_name: &'static str,
    pub currency: &'static str,
    pub amount: u32,
    pub display: String,
}

/// Demo Stripe checkout. Nothing is charged and no purchase is recorded.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutFlow {
    latency: SimulatedLatency,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new(SimulatedLatency::from_millis(CHECKOUT_LATENCY_MS))
    }
}

impl CheckoutFlow {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    pub fn quote(&self, course: &'static CourseOffering, currency: Currency) -> CheckoutQuote {
        let amount = CatalogService.price(course, currency);

        CheckoutQuote {
            course_id: course.id,
            course_name: course.name,
            currency: currency.code(),
            amount,
            display: format_amount(amount, currency),
        }
    }

    /// Wait the checkout delay and return the demo redirect notice.
    pub async fn checkout(
        &self,
        course: &'static CourseOffering,
        currency: Currency,
        token: &CancellationToken,
    ) -> Result<String> {
        let quote = self.quote(course, currency);
        self.latency
            .run(token, || {
                tracing::info!(course = quote.course_id, amount = quote.amount, "Demo checkout");
                Ok(format!(
                    "Demo: Would redirect to Stripe checkout for {} - {}",
                    quote.course_name, quote.display
                ))
            })
            .await
    }
}
