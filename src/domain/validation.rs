//! Field rules for contact payloads.
//!
//! Every rule is evaluated; callers get the full list of violations rather than the first one.

use super::contact::NewContact;
use once_cell::sync::Lazy;
use regex::Regex;

// Dot-atom local part, then dot-separated DNS labels. A top-level dot is not required.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// One failed field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    BlankName,
    BlankPhoneNumber,
    InvalidEmail,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::BlankName => "Name must not be blank",
            Violation::BlankPhoneNumber => "Phone number must not be blank",
            Violation::InvalidEmail => "Invalid email format",
        }
    }
}

/// Checks `contact` against all field rules. An empty result means the contact is valid.
pub fn validate(contact: &NewContact) -> Vec<Violation> {
    let mut violations = Vec::new();
    if contact.name.trim().is_empty() {
        violations.push(Violation::BlankName);
    }
    if contact.phone_number.trim().is_empty() {
        violations.push(Violation::BlankPhoneNumber);
    }
    if !is_valid_email(&contact.email) {
        violations.push(Violation::InvalidEmail);
    }
    violations
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Joins violations into the single message carried by an invalid-input error.
pub fn describe(violations: &[Violation]) -> String {
    let mut message = String::from("Validation failed for Contact: ");
    for v in violations {
        message.push_str(v.message());
        message.push_str("; ");
    }
    message
}
