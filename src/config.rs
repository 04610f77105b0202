// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Site configuration loaded from environment variables.
//!
//! Everything here is a compile-time default that can be overridden through
//! the environment (or a `.env` file) when the site is built.

use std::collections::HashMap;
use std::env;
use std::ops::RangeInclusive;

/// Default storage namespace, shared by every key the site writes.
pub const DEFAULT_NAMESPACE: &str = "risinghelixx";

/// Default lifetime of the session cookie mirror.
pub const DEFAULT_COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Accepted range for `COOKIE_MAX_AGE_DAYS`.
pub const MIN_COOKIE_MAX_AGE_DAYS: i64 = 1;
pub const MAX_COOKIE_MAX_AGE_DAYS: i64 = 3650;

/// Default simulated network latency for form submissions.
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;

/// Simulated latency of the Google sign-in popup.
pub const GOOGLE_SIGN_IN_LATENCY_MS: u64 = 1000;

/// Simulated latency of the demo Stripe checkout.
pub const CHECKOUT_LATENCY_MS: u64 = 2000;

/// Site configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Storage ---
    /// Prefix for durable keys and the cookie name
    pub storage_namespace: String,
    /// Cookie mirror lifetime in days, within
    /// `MIN_COOKIE_MAX_AGE_DAYS..=MAX_COOKIE_MAX_AGE_DAYS`
    pub cookie_max_age_days: i64,

    // --- Contact ---
    /// Recipient of the contact form mailto
    pub contact_email: String,
    /// CC of the contact form mailto
    pub contact_cc_email: Option<String>,
    /// Recipient of the school partnership mailto
    pub school_email: String,
    /// WhatsApp number used by the floating button and school page
    pub whatsapp_number: String,
    /// WhatsApp number used by the contact page
    pub contact_whatsapp_number: String,
    /// Third-party form relay endpoint for school inquiries
    pub form_relay_url: Option<String>,

    // --- Demo behavior ---
    /// Artificial delay applied to login and registration
    pub simulated_latency_ms: u64,
    /// Stripe demo mode (never charges)
    pub demo_mode: bool,
    /// Stripe publishable key (never the secret key)
    pub stripe_publishable_key: String,

    /// Backend API settings for a future migration off local storage
    pub api: ApiConfig,
}

impl Default for Config {
    /// Default config, matching the values hard-coded in the site.
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            cookie_max_age_days: DEFAULT_COOKIE_MAX_AGE_DAYS,
            contact_email: "pratikpshetti45@gmail.com".to_string(),
            contact_cc_email: Some("yashvardhan.117.shirgave@gmail.com".to_string()),
            school_email: "director@risinghelixx.com".to_string(),
            whatsapp_number: "917972711924".to_string(),
            contact_whatsapp_number: "919270211791".to_string(),
            form_relay_url: None,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            demo_mode: true,
            stripe_publishable_key: "pk_test_demo".to_string(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset variables fall back to
    /// [`Config::default`]. Malformed numbers and booleans are rejected, as is
    /// a cookie lifetime outside the accepted range.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            storage_namespace: env::var("STORAGE_NAMESPACE")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_namespace),
            cookie_max_age_days: parse_in_range(
                "COOKIE_MAX_AGE_DAYS",
                MIN_COOKIE_MAX_AGE_DAYS..=MAX_COOKIE_MAX_AGE_DAYS,
            )?
            .unwrap_or(defaults.cookie_max_age_days),
            contact_email: env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            contact_cc_email: env::var("CONTACT_CC_EMAIL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or(defaults.contact_cc_email),
            school_email: env::var("SCHOOL_EMAIL").unwrap_or(defaults.school_email),
            whatsapp_number: env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            contact_whatsapp_number: env::var("CONTACT_WHATSAPP_NUMBER")
                .unwrap_or(defaults.contact_whatsapp_number),
            form_relay_url: env::var("FORM_RELAY_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            simulated_latency_ms: parse_var("SIMULATED_LATENCY_MS")?
                .unwrap_or(defaults.simulated_latency_ms),
            demo_mode: parse_flag("DEMO_MODE")?.unwrap_or(defaults.demo_mode),
            stripe_publishable_key: env::var("STRIPE_PUBLISHABLE_KEY")
                .unwrap_or(defaults.stripe_publishable_key),
            api: ApiConfig::from_env()?,
        })
    }

    /// Durable key holding the list of every known user.
    pub fn users_key(&self) -> String {
        format!("{}_users", self.storage_namespace)
    }

    /// Durable key holding the current-user session pointer.
    pub fn current_user_key(&self) -> String {
        format!("{}_current_user", self.storage_namespace)
    }

    /// Name of the cookie mirroring the session pointer.
    pub fn cookie_name(&self) -> String {
        format!("{}_user", self.storage_namespace)
    }
}

/// Backend API endpoints and rollout flags.
///
/// The site currently runs entirely on local storage; these values only matter
/// once a real backend is deployed behind `API_URL`.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Base URL, empty when no backend exists
    pub base_url: String,
    pub features: FeatureFlags,
}

/// Feature flags for gradual backend rollout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFlags {
    pub use_backend_auth: bool,
    pub use_stripe_payments: bool,
    pub use_firebase: bool,
}

/// Endpoint paths, with `:name` placeholders for path parameters.
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_REGISTER: &str = "/auth/register";
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    pub const AUTH_PROFILE: &str = "/auth/profile";
    pub const AUTH_GOOGLE: &str = "/auth/google";
    pub const COURSES_LIST: &str = "/courses";
    pub const COURSES_BY_KEY_STAGE: &str = "/courses/key-stage/:stage";
    pub const COURSES_ENROLL: &str = "/courses/:id/enroll";
    pub const SUBSCRIPTIONS_CREATE: &str = "/subscriptions/create";
    pub const SUBSCRIPTIONS_CANCEL: &str = "/subscriptions/cancel";
    pub const SUBSCRIPTIONS_STATUS: &str = "/subscriptions/status";
    pub const SCHOOLS_INQUIRY: &str = "/schools/inquiry";
    pub const SCHOOLS_BULK_ENROLL: &str = "/schools/bulk-enroll";
    pub const CONTACT_SEND: &str = "/contact/send";
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("API_URL").unwrap_or_default(),
            features: FeatureFlags {
                use_backend_auth: parse_flag("USE_BACKEND_AUTH")?.unwrap_or(false),
                use_stripe_payments: parse_flag("USE_STRIPE")?.unwrap_or(false),
                use_firebase: parse_flag("USE_FIREBASE")?.unwrap_or(false),
            },
        })
    }

    /// Build a full URL, replacing `:name` placeholders from `params`.
    pub fn build_url(&self, endpoint: &str, params: &HashMap<&str, String>) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        for (key, value) in params {
            url = url.replace(&format!(":{key}"), value);
        }
        url
    }

    /// Whether auth should go to a real backend instead of local storage.
    pub fn is_backend_enabled(&self) -> bool {
        !self.base_url.is_empty() && self.features.use_backend_auth
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

fn parse_in_range(
    name: &'static str,
    range: RangeInclusive<i64>,
) -> Result<Option<i64>, ConfigError> {
    match parse_var::<i64>(name)? {
        Some(value) if !range.contains(&value) => Err(ConfigError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        }),
        value => Ok(value),
    }
}

fn parse_flag(name: &'static str) -> Result<Option<bool>, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" | "" => Ok(Some(false)),
            _ => Err(ConfigError::Invalid(name, raw)),
        },
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),

    #[error("Environment variable {name}={value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("STORAGE_NAMESPACE", "helixx_test");
        env::set_var("COOKIE_MAX_AGE_DAYS", "7");
        env::set_var("USE_BACKEND_AUTH", "true");
        env::set_var("API_URL", "https://api.risinghelixx.com");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.storage_namespace, "helixx_test");
        assert_eq!(config.cookie_max_age_days, 7);
        assert_eq!(config.users_key(), "helixx_test_users");
        assert_eq!(config.current_user_key(), "helixx_test_current_user");
        assert_eq!(config.cookie_name(), "helixx_test_user");
        assert!(config.api.is_backend_enabled());

        env::set_var("COOKIE_MAX_AGE_DAYS", "thirty");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("COOKIE_MAX_AGE_DAYS", _))
        ));

        for out_of_range in ["0", "-5", "100000"] {
            env::set_var("COOKIE_MAX_AGE_DAYS", out_of_range);
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::OutOfRange {
                    name: "COOKIE_MAX_AGE_DAYS",
                    ..
                })
            ));
        }

        env::set_var("COOKIE_MAX_AGE_DAYS", "3650");
        assert_eq!(Config::from_env().unwrap().cookie_max_age_days, 3650);

        for name in [
            "STORAGE_NAMESPACE",
            "COOKIE_MAX_AGE_DAYS",
            "USE_BACKEND_AUTH",
            "API_URL",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_default_keys_match_site() {
        let config = Config::default();
        assert_eq!(config.users_key(), "risinghelixx_users");
        assert_eq!(config.current_user_key(), "risinghelixx_current_user");
        assert_eq!(config.cookie_name(), "risinghelixx_user");
        assert_eq!(config.cookie_max_age_days, 30);
        assert!(!config.api.is_backend_enabled());
    }

    #[test]
    fn test_build_url_substitutes_params() {
        let api = ApiConfig {
            base_url: "https://api.example.com".to_string(),
            features: FeatureFlags::default(),
        };
        let params = HashMap::from([("id", "python-ks2".to_string())]);

        assert_eq!(
            api.build_url(endpoints::COURSES_ENROLL, &params),
            "https://api.example.com/courses/python-ks2/enroll"
        );
        assert_eq!(
            api.build_url(endpoints::COURSES_LIST, &HashMap::new()),
            "https://api.example.com/courses"
        );
    }

    #[test]
    fn test_backend_requires_base_url() {
        let api = ApiConfig {
            base_url: String::new(),
            features: FeatureFlags {
                use_backend_auth: true,
                ..FeatureFlags::default()
            },
        };
        assert!(!api.is_backend_enabled());
    }
}
