// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for local storage and the session pointer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::course::CourseOffering;
use crate::time_utils::iso_millis;

/// How an account was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Email,
    Google,
}

/// One fabricated account, keyed by email.
///
/// Field names are camelCase on the wire so records written by earlier
/// versions of the site still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Time-based token (`user_<millis>` or `google_<millis>`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Natural key
    pub email: String,
    pub auth_method: AuthMethod,
    /// Set once, when the record is first stored
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every login
    #[serde(with = "iso_millis")]
    pub last_login: DateTime<Utc>,
    /// Ordered, at most one entry per course id
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    /// Avatar URL
    #[serde(default)]
    pub profile_image: String,
}

impl UserRecord {
    /// Whether the user already owns `course_id`.
    pub fn has_purchased(&self, course_id: &str) -> bool {
        self.purchases.iter().any(|p| p.id == course_id)
    }
}

/// A course snapshot recorded at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Course identifier
    pub id: String,
    pub name: String,
    #[serde(rename = "priceGBP")]
    pub price_gbp: u32,
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
    #[serde(with = "iso_millis")]
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    pub fn from_course(course: &CourseOffering, purchased_at: DateTime<Utc>) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.to_string(),
            price_gbp: course.price_gbp,
            price_inr: course.price_inr,
            purchased_at,
        }
    }
}

/// Candidate fields for an upsert, before timestamps are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub auth_method: AuthMethod,
    /// `None` keeps whatever the stored record has
    pub purchases: Option<Vec<Purchase>>,
    /// `None` keeps the stored avatar or generates one
    pub profile_image: Option<String>,
    /// Replace the stored id and avatar instead of keeping them
    pub overwrite: bool,
}

impl UserDraft {
    /// Draft for a brand-new email account.
    pub fn email_account(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            auth_method: AuthMethod::Email,
            purchases: None,
            profile_image: None,
            overwrite: false,
        }
    }

    /// Draft for a registration. Registering over an existing email replaces
    /// the stored record; only `created_at` survives.
    pub fn registration(id: String, name: String, email: String) -> Self {
        Self {
            purchases: Some(Vec::new()),
            overwrite: true,
            ..Self::email_account(id, name, email)
        }
    }
}

impl From<UserRecord> for UserDraft {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            auth_method: record.auth_method,
            purchases: Some(record.purchases),
            profile_image: Some(record.profile_image).filter(|p| !p.is_empty()),
            overwrite: false,
        }
    }
}

/// Profile fields a signed-in user may change.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UserPatch {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(url(message = "Profile image must be a valid URL"))]
    pub profile_image: Option<String>,
}

impl UserPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Trim free-text fields before validation.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|n| n.trim().to_string()),
            profile_image: self.profile_image.map(|p| p.trim().to_string()),
        }
    }

    /// Apply the patch to a record.
    pub fn apply(self, record: &mut UserRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(image) = self.profile_image {
            record.profile_image = image;
        }
    }
}

/// Generated avatar for users who never set a profile image.
pub fn default_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=6366f1&color=fff",
        urlencoding::encode(name)
    )
}

/// Local part of an email address, used as the default display name.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_record_without_purchases() {
        let json = r#"{
            "id": "user_1735689600000",
            "name": "jane",
            "email": "jane@example.com",
            "authMethod": "email",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "lastLogin": "2026-01-02T00:00:00.000Z"
        }"#;

        let record: UserRecord = serde_json::from_str(json).expect("record should decode");
        assert_eq!(record.auth_method, AuthMethod::Email);
        assert!(record.purchases.is_empty());
        assert!(record.profile_image.is_empty());
    }

    #[test]
    fn test_rejects_record_without_timestamps() {
        let json = r#"{"id":"user_1","name":"a","email":"a@x.com","authMethod":"email"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }

    #[test]
    fn test_purchase_wire_names() {
        let json = r#"{"id":"python-ks2","name":"Python Pioneers","priceGBP":79,"priceINR":7999,"purchasedAt":"2026-01-01T00:00:00Z"}"#;
        let purchase: Purchase = serde_json::from_str(json).expect("purchase should decode");
        assert_eq!(purchase.price_inr, 7999);

        let value = serde_json::to_value(&purchase).unwrap();
        assert!(value.get("priceGBP").is_some());
        assert_eq!(value["purchasedAt"], "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_patch_validation() {
        assert!(UserPatch::name("  ").normalized().validate().is_err());
        assert!(UserPatch::name(" Jane ").normalized().validate().is_ok());

        let bad_image = UserPatch {
            profile_image: Some("not a url".to_string()),
            ..UserPatch::default()
        };
        assert!(bad_image.validate().is_err());
    }

    #[test]
    fn test_default_avatar_encodes_name() {
        assert_eq!(
            default_avatar_url("Jane Doe"),
            "https://ui-avatars.com/api/?name=Jane%20Doe&background=6366f1&color=fff"
        );
    }

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("a@example.com"), "a");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
    }
}
