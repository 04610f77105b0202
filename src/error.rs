// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

/// Errors from a durable storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored data under {key}: {reason}")]
    Malformed { key: String, reason: String },

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Timestamp out of range: {0}")]
    TimeRange(#[from] time::error::ComponentRange),
}

/// Application error type for site operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Sign-in failed; carries the text shown to the visitor
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Form relay returned status {status}: {message}")]
    Relay { status: u16, message: String },

    #[error("Operation cancelled: component unmounted")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Generic message shown when a simulated request fails.
    pub const GENERIC_FAILURE: &'static str = "Something went wrong. Please try again.";
    /// Message shown when the Google sign-in popup fails.
    pub const GOOGLE_FAILURE: &'static str = "Google sign-in failed. Please try again.";
    /// Blocking alert shown when the form relay rejects a submission.
    pub const RELAY_FAILURE: &'static str =
        "We couldn't send your inquiry. Please email or WhatsApp us instead.";

    /// Text safe to show the visitor. Internal details are logged, never shown.
    pub fn user_message(&self) -> String {
        match self {
            AppError::AuthFailed(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Validation(errors) => first_validation_message(errors),
            AppError::Relay { status, message } => {
                tracing::warn!(status, error = %message, "Form relay rejected submission");
                Self::RELAY_FAILURE.to_string()
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                Self::GENERIC_FAILURE.to_string()
            }
            AppError::Cancelled => String::new(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                Self::GENERIC_FAILURE.to_string()
            }
        }
    }

    /// Whether the failure should block the page with an alert.
    pub fn is_blocking(&self) -> bool {
        matches!(self, AppError::Relay { .. })
    }
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"))
            })
        })
        .unwrap_or_else(|| AppError::GENERIC_FAILURE.to_string())
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, AppError>;
