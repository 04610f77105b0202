// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Course catalog model. All values are compile-time constants.

use serde::{Deserialize, Serialize};

/// Course track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Python,
    Math,
    Robotics,
}

/// A school key stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStage {
    pub id: &'static str,
    pub name: &'static str,
    pub grades: &'static str,
    pub age_range: &'static str,
}

/// One course offering with dual-currency pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub subject: Subject,
    /// Key stage id, or a range such as `ks3-ks4`
    pub key_stage: &'static str,
    pub description: &'static str,
    pub level: &'static str,
    pub duration: Option<&'static str>,
    pub age_range: &'static str,
    #[serde(rename = "priceGBP")]
    pub price_gbp: u32,
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
    pub features: &'static [&'static str],
    pub badge: &'static str,
    pub is_project_based: bool,
    pub is_subscription: bool,
    pub billing_cycle: Option<&'static str>,
    pub popular: bool,
}

/// Display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Gbp,
    Inr,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Inr => "₹",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GBP" => Ok(Currency::Gbp),
            "INR" => Ok(Currency::Inr),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

/// One row of the school bulk-discount table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountTier {
    /// Label shown on the For Schools page, e.g. `26-50`
    pub label: &'static str,
    pub min_students: u32,
    /// Inclusive upper bound, `None` for the open-ended tier
    pub max_students: Option<u32>,
    pub percent: u8,
}

impl DiscountTier {
    pub fn contains(&self, students: u32) -> bool {
        students >= self.min_students && self.max_students.map_or(true, |max| students <= max)
    }
}
