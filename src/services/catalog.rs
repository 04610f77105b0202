// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static course catalog, pricing and school discounts.

use crate::models::{CourseOffering, Currency, DiscountTier, KeyStage, Subject};

/// Filter value that selects every key stage.
pub const ALL_KEY_STAGES: &str = "all";

/// Approximate exchange rate used for the "£1 ≈ ₹" hint.
pub const GBP_TO_INR: f64 = 105.5;

pub const KEY_STAGES: &[KeyStage] = &[
    KeyStage {
        id: "ks1",
        name: "Key Stage 1",
        grades: "Grades 1-2",
        age_range: "5-7 years",
    },
    KeyStage {
        id: "ks2",
        name: "Key Stage 2",
        grades: "Grades 3-6",
        age_range: "7-11 years",
    },
    KeyStage {
        id: "ks3",
        name: "Key Stage 3",
        grades: "Grades 7-9",
        age_range: "11-14 years",
    },
    KeyStage {
        id: "ks4",
        name: "Key Stage 4",
        grades: "Grades 10-11",
        age_range: "14-16 years",
    },
];

#[allow(clippy::too_many_arguments)]
const fn project_course(
    id: &'static str,
    name: &'static str,
    subtitle: &'static str,
    subject: Subject,
    key_stage: &'static str,
    description: &'static str,
    level: &'static str,
    duration: &'static str,
    age_range: &'static str,
    price_gbp: u32,
    price_inr: u32,
    features: &'static [&'static str],
) -> CourseOffering {
    CourseOffering {
        id,
        name,
        subtitle,
        subject,
        key_stage,
        description,
        level,
        duration: Some(duration),
        age_range,
        price_gbp,
        price_inr,
        features,
        badge: "Project-Based",
        is_project_based: true,
        is_subscription: false,
        billing_cycle: None,
        popular: false,
    }
}

pub const COURSES: &[CourseOffering] = &[
    project_course(
        "python-ks1",
        "Python Explorers",
        "Visual Coding for Young Minds",
        Subject::Python,
        "ks1",
        "Introduction to coding through fun visual blocks and Scratch. Perfect for young learners taking their first steps into programming.",
        "Beginner",
        "3 months",
        "5-7 years",
        49,
        4999,
        &[
            "Project-Based Learning",
            "Visual block-based coding",
            "Scratch Jr projects",
            "Fun animations & stories",
            "Parent dashboard",
            "Certificate on completion",
        ],
    ),
    project_course(
        "python-ks2",
        "Python Pioneers",
        "From Blocks to Code",
        Subject::Python,
        "ks2",
        "Transition from visual coding to real Python! Create games, animations, and fun projects with turtle graphics.",
        "Beginner-Intermediate",
        "6 months",
        "7-11 years",
        79,
        7999,
        &[
            "Project-Based Learning",
            "Python basics & syntax",
            "Turtle graphics projects",
            "Simple game development",
            "Interactive quizzes",
            "Progress tracking",
            "Certificate on completion",
        ],
    ),
    project_course(
        "python-ks3",
        "Python Programmers",
        "Real-World Python Skills",
        Subject::Python,
        "ks3",
        "Master Python fundamentals with data structures, algorithms, and real projects. Prepare for advanced programming.",
        "Intermediate",
        "6 months",
        "11-14 years",
        99,
        9999,
        &[
            "Project-Based Learning",
            "Python fundamentals",
            "Data structures & loops",
            "Functions & modules",
            "Mini projects & games",
            "Problem-solving skills",
            "Industry-aligned curriculum",
        ],
    ),
    project_course(
        "python-ks4",
        "Python Pro",
        "Advanced Programming & Projects",
        Subject::Python,
        "ks4",
        "Advanced Python with algorithms, OOP, web development basics, and portfolio projects for college applications.",
        "Advanced",
        "9 months",
        "14-16 years",
        149,
        14999,
        &[
            "Project-Based Learning",
            "Advanced algorithms",
            "Object-Oriented Programming",
            "Web development basics",
            "Data analysis intro",
            "Portfolio projects",
            "College application ready",
        ],
    ),
    CourseOffering {
        id: "math-sat-prep",
        name: "SAT Math Champion",
        subtitle: "Complete SAT Preparation",
        subject: Subject::Math,
        key_stage: "ks3-ks4",
        description: "Intensive SAT Math preparation with 50+ mock tests, strategy sessions, and guaranteed score improvement.",
        level: "Advanced",
        duration: None,
        age_range: "13-16 years",
        price_gbp: 49,
        price_inr: 3999,
        features: &[
            "50+ SAT mock tests",
            "Section-wise practice",
            "Time management training",
            "Score analytics",
            "Strategy sessions",
            "500+ practice problems",
            "Guaranteed improvement",
        ],
        badge: "SAT Prep",
        is_project_based: false,
        is_subscription: true,
        billing_cycle: Some("monthly"),
        popular: true,
    },
    project_course(
        "robotics-beginner",
        "Robotics Explorers",
        "Build Your First Robot",
        Subject::Robotics,
        "ks2",
        "Hands-on introduction to robotics! Build, program, and control your own robots while learning fundamental engineering concepts.",
        "Beginner",
        "4 months",
        "7-11 years",
        89,
        8999,
        &[
            "Project-Based Learning",
            "Build real robots",
            "Block-based programming",
            "Sensors & motors basics",
            "Team challenges",
            "Take-home projects",
            "Certificate on completion",
        ],
    ),
    project_course(
        "robotics-intermediate",
        "Robotics Engineers",
        "Advanced Robot Building",
        Subject::Robotics,
        "ks3",
        "Take robotics to the next level with advanced sensors, automation, and Arduino programming.",
        "Intermediate",
        "6 months",
        "11-14 years",
        129,
        12999,
        &[
            "Project-Based Learning",
            "Arduino programming",
            "Advanced sensors",
            "Automation concepts",
            "Competition prep",
            "Real-world applications",
            "Industry mentorship",
        ],
    ),
    project_course(
        "robotics-advanced",
        "Robotics Innovators",
        "AI & Advanced Robotics",
        Subject::Robotics,
        "ks4",
        "Cutting-edge robotics with AI integration, machine learning basics, and advanced automation for future engineers.",
        "Advanced",
        "9 months",
        "14-16 years",
        179,
        17999,
        &[
            "Project-Based Learning",
            "AI-powered robots",
            "Machine learning basics",
            "Computer vision intro",
            "IoT integration",
            "Capstone project",
            "College portfolio ready",
        ],
    ),
];

pub const DISCOUNT_TIERS: &[DiscountTier] = &[
    DiscountTier {
        label: "10-25",
        min_students: 10,
        max_students: Some(25),
        percent: 10,
    },
    DiscountTier {
        label: "26-50",
        min_students: 26,
        max_students: Some(50),
        percent: 15,
    },
    DiscountTier {
        label: "51-100",
        min_students: 51,
        max_students: Some(100),
        percent: 20,
    },
    DiscountTier {
        label: "100+",
        min_students: 101,
        max_students: None,
        percent: 25,
    },
];

pub const SCHOOL_FEATURES: &[&str] = &[
    "Dedicated school dashboard",
    "Teacher admin access",
    "Progress reports by class",
    "Custom curriculum mapping",
    "Priority support",
    "Bulk enrollment portal",
];

/// Read-only view over the static catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    pub fn courses(&self) -> &'static [CourseOffering] {
        COURSES
    }

    pub fn key_stages(&self) -> &'static [KeyStage] {
        KEY_STAGES
    }

    pub fn find(&self, id: &str) -> Option<&'static CourseOffering> {
        COURSES.iter().find(|c| c.id == id)
    }

    pub fn by_subject(&self, subject: Subject) -> Vec<&'static CourseOffering> {
        COURSES.iter().filter(|c| c.subject == subject).collect()
    }

    pub fn python_courses(&self) -> Vec<&'static CourseOffering> {
        self.by_subject(Subject::Python)
    }

    pub fn math_courses(&self) -> Vec<&'static CourseOffering> {
        self.by_subject(Subject::Math)
    }

    pub fn robotics_courses(&self) -> Vec<&'static CourseOffering> {
        self.by_subject(Subject::Robotics)
    }

    /// Courses of `subject` in `key_stage`, or all of them for [`ALL_KEY_STAGES`].
    pub fn filter_by_key_stage(
        &self,
        subject: Subject,
        key_stage: &str,
    ) -> Vec<&'static CourseOffering> {
        self.by_subject(subject)
            .into_iter()
            .filter(|c| key_stage == ALL_KEY_STAGES || c.key_stage == key_stage)
            .collect()
    }

    /// Case-insensitive match on name or description.
    pub fn search(&self, query: &str) -> Vec<&'static CourseOffering> {
        let needle = query.trim().to_lowercase();
        COURSES
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn price(&self, course: &CourseOffering, currency: Currency) -> u32 {
        match currency {
            Currency::Gbp => course.price_gbp,
            Currency::Inr => course.price_inr,
        }
    }

    /// Rate relative to GBP.
    pub fn currency_rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Gbp => 1.0,
            Currency::Inr => GBP_TO_INR,
        }
    }

    pub fn discount_tiers(&self) -> &'static [DiscountTier] {
        DISCOUNT_TIERS
    }

    /// Bulk discount for a school enrolling `students`; 0 below the first tier.
    pub fn bulk_discount_percent(&self, students: u32) -> u8 {
        DISCOUNT_TIERS
            .iter()
            .find(|tier| tier.contains(students))
            .map_or(0, |tier| tier.percent)
    }

    pub fn school_features(&self) -> &'static [&'static str] {
        SCHOOL_FEATURES
    }
}

/// `£49` or `₹14,999`.
pub fn format_price(price_gbp: u32, price_inr: u32, currency: Currency) -> String {
    match currency {
        Currency::Gbp => format!("{}{}", currency.symbol(), price_gbp),
        Currency::Inr => format!("{}{}", currency.symbol(), group_indian(price_inr)),
    }
}

/// Amount with the symbol and en-US thousands separators, as the checkout
/// calculator shows it. Catalog cards use [`format_price`], which groups
/// rupees the Indian way.
pub fn format_amount(amount: u32, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), group_thousands(amount))
}

// 1234567 -> "1,234,567"
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Last three digits, then groups of two: 1234567 -> "12,34,567"
fn group_indian(n: u32) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
