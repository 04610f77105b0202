// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use rising_helixx::models::{Currency, Subject};
use rising_helixx::services::catalog::{format_price, ALL_KEY_STAGES};
use rising_helixx::services::CatalogService;
use std::collections::HashSet;

#[test]
fn test_course_ids_are_unique() {
    let ids: HashSet<_> = CatalogService.courses().iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), CatalogService.courses().len());
    assert_eq!(ids.len(), 8);
}

#[test]
fn test_subject_split() {
    assert_eq!(CatalogService.python_courses().len(), 4);
    assert_eq!(CatalogService.math_courses().len(), 1);
    assert_eq!(CatalogService.robotics_courses().len(), 3);
}

#[test]
fn test_key_stage_filter() {
    let ks3 = CatalogService.filter_by_key_stage(Subject::Python, "ks3");
    assert_eq!(ks3.len(), 1);
    assert_eq!(ks3[0].id, "python-ks3");

    let all = CatalogService.filter_by_key_stage(Subject::Robotics, ALL_KEY_STAGES);
    assert_eq!(all.len(), 3);

    assert!(CatalogService
        .filter_by_key_stage(Subject::Robotics, "ks1")
        .is_empty());
}

#[test]
fn test_sat_prep_is_monthly_subscription() {
    let sat = CatalogService.find("math-sat-prep").unwrap();
    assert!(sat.is_subscription);
    assert_eq!(sat.billing_cycle, Some("monthly"));
    assert!(sat.popular);
    assert_eq!(CatalogService.price(sat, Currency::Gbp), 49);
    assert_eq!(CatalogService.price(sat, Currency::Inr), 3999);
}

#[test]
fn test_search_is_case_insensitive() {
    let hits: Vec<_> = CatalogService.search("ARDUINO").iter().map(|c| c.id).collect();
    assert_eq!(hits, vec!["robotics-intermediate"]);
    assert_eq!(CatalogService.search("  ").len(), CatalogService.courses().len());
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(149, 14999, Currency::Gbp), "£149");
    assert_eq!(format_price(149, 14999, Currency::Inr), "₹14,999");
}

#[test]
fn test_bulk_discount_tiers() {
    assert_eq!(CatalogService.bulk_discount_percent(9), 0);
    assert_eq!(CatalogService.bulk_discount_percent(10), 10);
    assert_eq!(CatalogService.bulk_discount_percent(25), 10);
    assert_eq!(CatalogService.bulk_discount_percent(26), 15);
    assert_eq!(CatalogService.bulk_discount_percent(100), 20);
    assert_eq!(CatalogService.bulk_discount_percent(101), 25);
    assert_eq!(CatalogService.bulk_discount_percent(5000), 25);
}

#[test]
fn test_currency_parse_and_rate() {
    assert_eq!("inr".parse::<Currency>(), Ok(Currency::Inr));
    assert!("usd".parse::<Currency>().is_err());
    assert_eq!(CatalogService.currency_rate(Currency::Gbp), 1.0);
    assert!(CatalogService.currency_rate(Currency::Inr) > 100.0);
}

#[test]
fn test_catalog_serializes_with_site_field_names() {
    let course = CatalogService.find("python-ks1").unwrap();
    let json = serde_json::to_value(course).unwrap();
    assert_eq!(json["priceGBP"], 49);
    assert_eq!(json["priceINR"], 4999);
    assert_eq!(json["isProjectBased"], true);
}
