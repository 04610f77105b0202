// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use rising_helixx::error::{AppError, StorageError};

#[test]
fn test_internal_details_are_not_shown() {
    let err = AppError::Internal(anyhow::anyhow!("connection pool exhausted"));
    assert_eq!(err.user_message(), AppError::GENERIC_FAILURE);

    let err = AppError::Storage(StorageError::Unavailable("disk full".to_string()));
    assert_eq!(err.user_message(), AppError::GENERIC_FAILURE);
    assert!(!err.is_blocking());
}

#[test]
fn test_auth_failure_shows_its_message() {
    let err = AppError::AuthFailed(AppError::GOOGLE_FAILURE.to_string());
    assert_eq!(err.user_message(), "Google sign-in failed. Please try again.");
}

#[test]
fn test_bad_request_message_passes_through() {
    let err = AppError::BadRequest("Email is required".to_string());
    assert_eq!(err.user_message(), "Email is required");
}

#[test]
fn test_only_relay_errors_block() {
    let relay = AppError::Relay {
        status: 500,
        message: "upstream down".to_string(),
    };
    assert!(relay.is_blocking());
    assert!(!AppError::Cancelled.is_blocking());
    assert!(!AppError::BadRequest("x".to_string()).is_blocking());
}

#[test]
fn test_storage_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err: AppError = StorageError::from(io).into();
    assert!(matches!(err, AppError::Storage(StorageError::Io(_))));
    assert!(err.to_string().contains("read-only"));
}
