// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contact and school inquiry deep links.

use rising_helixx::config::Config;
use rising_helixx::error::AppError;
use rising_helixx::models::{ContactInquiry, SchoolInquiry};
use rising_helixx::services::outbound::{
    contact_mailto, contact_whatsapp, school_inquiry_body, school_mailto, school_whatsapp,
    whatsapp_link, DEFAULT_WHATSAPP_MESSAGE,
};

fn contact() -> ContactInquiry {
    ContactInquiry {
        name: "Priya".to_string(),
        email: "priya@example.com".to_string(),
        subject: "Trial class".to_string(),
        message: "Is there a free trial?".to_string(),
    }
}

fn school() -> SchoolInquiry {
    SchoolInquiry {
        school_name: "Sunrise School".to_string(),
        principal_name: "Mrs. Iyer".to_string(),
        email: "office@sunrise.edu".to_string(),
        phone: "02012345678".to_string(),
        city: "Mumbai".to_string(),
        student_count: "50-100".to_string(),
        message: "Python for KS3".to_string(),
    }
}

#[test]
fn test_contact_mailto_has_cc_subject_and_body() {
    let link = contact_mailto(&Config::default(), &contact()).unwrap();

    assert!(link.starts_with(
        "mailto:pratikpshetti45@gmail.com?cc=yashvardhan.117.shirgave@gmail.com&subject=Trial%20class&body="
    ));

    let body = urlencoding::decode(link.split("&body=").nth(1).unwrap()).unwrap();
    assert_eq!(
        body,
        "Name: Priya\nEmail: priya@example.com\n\nMessage:\nIs there a free trial?\n\n---\nSent from Rising Helixx Contact Form"
    );
}

#[test]
fn test_contact_mailto_without_cc() {
    let config = Config {
        contact_cc_email: None,
        ..Config::default()
    };
    let link = contact_mailto(&config, &contact()).unwrap();
    assert!(link.starts_with("mailto:pratikpshetti45@gmail.com?subject="));
}

#[test]
fn test_contact_whatsapp_message() {
    let link = contact_whatsapp(&Config::default(), &contact()).unwrap();
    let (base, text) = link.split_once("?text=").unwrap();

    assert_eq!(base, "https://wa.me/919270211791");
    assert_eq!(
        urlencoding::decode(text).unwrap(),
        "New Contact Form Submission:\n\nName: Priya\nEmail: priya@example.com\nSubject: Trial class\nMessage: Is there a free trial?"
    );
}

#[test]
fn test_school_mailto_subject_names_school() {
    let link = school_mailto(&Config::default(), &school()).unwrap();

    assert!(link.starts_with(
        "mailto:director@risinghelixx.com?subject=School%20Partnership%20Inquiry%20-%20Sunrise%20School&body="
    ));
    let body = school_inquiry_body(&school());
    assert!(body.contains("Estimated Students: 50-100\n"));
    assert!(body.ends_with("Sent from Rising Helixx For Schools page"));
}

#[test]
fn test_school_whatsapp_summary() {
    let link = school_whatsapp(&Config::default(), &school()).unwrap();
    let (base, text) = link.split_once("?text=").unwrap();

    assert_eq!(base, "https://wa.me/917972711924");
    assert_eq!(
        urlencoding::decode(text).unwrap(),
        "New School Inquiry:\n\nSchool: Sunrise School\nContact: Mrs. Iyer\nPhone: 02012345678\nStudents: 50-100"
    );
}

#[test]
fn test_invalid_contact_is_rejected_with_field_message() {
    let inquiry = ContactInquiry {
        email: "priya".to_string(),
        ..contact()
    };
    let err = contact_mailto(&Config::default(), &inquiry).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.user_message(), "Please enter a valid email address");
}

#[test]
fn test_default_whatsapp_greeting() {
    let link = whatsapp_link(&Config::default().whatsapp_number, DEFAULT_WHATSAPP_MESSAGE);
    assert_eq!(
        link,
        "https://wa.me/917972711924?text=Hi%21%20I%27m%20interested%20in%20learning%20more%20about%20Rising%20Helixx%20courses."
    );
}
