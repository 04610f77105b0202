// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the site.

pub mod course;
pub mod inquiry;
pub mod user;

pub use course::{CourseOffering, Currency, DiscountTier, KeyStage, Subject};
pub use inquiry::{ContactInquiry, SchoolInquiry};
pub use user::{AuthMethod, Purchase, UserDraft, UserPatch, UserRecord};
