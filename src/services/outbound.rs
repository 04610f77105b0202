// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outbound contact links: `mailto:` and WhatsApp deep links.
//!
//! Lead-capture forms open the visitor's mail client with a pre-filled message
//! and, as a fallback, a WhatsApp chat carrying a shorter summary.

use validator::Validate;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ContactInquiry, SchoolInquiry};

/// Greeting used by the floating WhatsApp button.
pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi! I'm interested in learning more about Rising Helixx courses.";

/// Greeting used on the home page.
pub const HOME_WHATSAPP_MESSAGE: &str =
    "Hi! I'm interested in Rising Helixx courses for my school/child.";

/// Greeting used on the contact page.
pub const CONTACT_WHATSAPP_MESSAGE: &str = "Hi! I'd love to hear more about Rising Helixx courses.";

/// Greeting used on the placeholder pages.
pub const COMING_SOON_WHATSAPP_MESSAGE: &str = "Hi! I have a question about Rising Helixx.";

pub const SCHOOL_INQUIRY_SUBJECT: &str = "School Partnership Inquiry";

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number.trim_start_matches('+'),
        urlencoding::encode(message)
    )
}

/// `mailto:` URI with optional CC, subject and body.
pub fn mailto_link(to: &str, cc: Option<&str>, subject: Option<&str>, body: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(cc) = cc {
        params.push(format!("cc={cc}"));
    }
    if let Some(subject) = subject {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if let Some(body) = body {
        params.push(format!("body={}", urlencoding::encode(body)));
    }

    if params.is_empty() {
        format!("mailto:{to}")
    } else {
        format!("mailto:{to}?{}", params.join("&"))
    }
}

/// Mail client link for the contact form.
pub fn contact_mailto(config: &Config, inquiry: &ContactInquiry) -> Result<String> {
    inquiry.validate()?;

    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from Rising Helixx Contact Form",
        inquiry.name, inquiry.email, inquiry.message
    );

    Ok(mailto_link(
        &config.contact_email,
        config.contact_cc_email.as_deref(),
        Some(&inquiry.subject),
        Some(&body),
    ))
}

/// WhatsApp fallback for the contact form.
pub fn contact_whatsapp(config: &Config, inquiry: &ContactInquiry) -> Result<String> {
    inquiry.validate()?;

    let message = format!(
        "New Contact Form Submission:\n\nName: {}\nEmail: {}\nSubject: {}\nMessage: {}",
        inquiry.name, inquiry.email, inquiry.subject, inquiry.message
    );
    Ok(whatsapp_link(&config.contact_whatsapp_number, &message))
}

/// Plain-text body of a school partnership inquiry.
pub fn school_inquiry_body(inquiry: &SchoolInquiry) -> String {
    format!(
        "School Partnership Inquiry\n\n\
         School Name: {}\n\
         Principal/Contact: {}\n\
         Email: {}\n\
         Phone: {}\n\
         City: {}\n\
         Estimated Students: {}\n\n\
         Message:\n{}\n\n\
         ---\n\
         Sent from Rising Helixx For Schools page",
        inquiry.school_name,
        inquiry.principal_name,
        inquiry.email,
        inquiry.phone,
        inquiry.city,
        inquiry.student_count,
        inquiry.message
    )
}

/// Mail client link for the For Schools form.
pub fn school_mailto(config: &Config, inquiry: &SchoolInquiry) -> Result<String> {
    inquiry.validate()?;

    let subject = format!("{SCHOOL_INQUIRY_SUBJECT} - {}", inquiry.school_name);
    Ok(mailto_link(
        &config.school_email,
        None,
        Some(&subject),
        Some(&school_inquiry_body(inquiry)),
    ))
}

/// WhatsApp fallback for the For Schools form.
pub fn school_whatsapp(config: &Config, inquiry: &SchoolInquiry) -> Result<String> {
    inquiry.validate()?;

    let message = format!(
        "New School Inquiry:\n\nSchool: {}\nContact: {}\nPhone: {}\nStudents: {}",
        inquiry.school_name, inquiry.principal_name, inquiry.phone, inquiry.student_count
    );
    Ok(whatsapp_link(&config.whatsapp_number, &message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("917972711924", "Hi! I have a question"),
            "https://wa.me/917972711924?text=Hi%21%20I%20have%20a%20question"
        );
        assert!(whatsapp_link("+917972711924", "x").starts_with("https://wa.me/917972711924?"));
    }

    #[test]
    fn test_mailto_without_params() {
        assert_eq!(
            mailto_link("director@risinghelixx.com", None, None, None),
            "mailto:director@risinghelixx.com"
        );
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let link = mailto_link(
            "a@example.com",
            Some("b@example.com"),
            Some("Hello there"),
            Some("Line 1\nLine 2"),
        );
        assert_eq!(
            link,
            "mailto:a@example.com?cc=b@example.com&subject=Hello%20there&body=Line%201%0ALine%202"
        );
    }
}
