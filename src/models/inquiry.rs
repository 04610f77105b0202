// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lead-capture form submissions.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact page form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactInquiry {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter a subject"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Please enter a message"))]
    pub message: String,
}

/// For Schools partnership form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchoolInquiry {
    #[validate(length(min = 1, message = "Please enter the school name"))]
    pub school_name: String,
    #[validate(length(min = 1, message = "Please enter a contact name"))]
    pub principal_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter a phone number"))]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    /// Free text as typed, e.g. `120` or `50-100`
    #[serde(default)]
    pub student_count: String,
    #[serde(default)]
    pub message: String,
}

impl SchoolInquiry {
    /// Leading number of the estimated student count, if any.
    pub fn estimated_students(&self) -> Option<u32> {
        let digits: String = self
            .student_count
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}
