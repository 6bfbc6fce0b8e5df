// SPDX-License-Identifier: MPL-2.0
//! Field-level validation for the contact and newsletter forms.
//!
//! Every function here is pure: it takes input values and returns which
//! fields failed with a human-readable message. Lengths are measured on the
//! trimmed value, in characters.

use crate::config::defaults::{
    COMPANY_MIN_CHARS, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

static PHONE_SEPARATORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));

/// A named form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
    Phone,
}

impl Field {
    /// Key used for the field in error maps.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
            Field::Phone => "phone",
        }
    }

    /// Placeholder shown in an empty input.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Message => "Tell us about your automation needs",
            Field::Phone => "Phone Number",
        }
    }

    /// Subject used at the start of error messages.
    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email address",
            Field::Company => "Company name",
            Field::Message => "Message",
            Field::Phone => "Phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    TooShort { field: Field, min: usize },
    TooLong { field: Field, max: usize },
    Malformed(Field),
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> Field {
        match *self {
            FieldError::Required(field)
            | FieldError::TooShort { field, .. }
            | FieldError::TooLong { field, .. }
            | FieldError::Malformed(field) => field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::TooShort { field, min } => {
                write!(f, "{} must be at least {min} characters long", field.label())
            }
            FieldError::TooLong { field, max } => {
                write!(f, "{} must be less than {max} characters", field.label())
            }
            FieldError::Malformed(field) => {
                write!(f, "Please enter a valid {}", field.label().to_lowercase())
            }
        }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Message per rejected field.
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    fn from_checks(checks: impl IntoIterator<Item = Result<(), FieldError>>) -> Self {
        let errors: BTreeMap<Field, String> = checks
            .into_iter()
            .filter_map(Result::err)
            .map(|err| (err.field(), err.to_string()))
            .collect();

        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Inline styling state for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Default,
    Error,
    Success,
}

/// Contact form input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

fn check_length(
    field: Field,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field));
    }
    let len = trimmed.chars().count();
    if len < min {
        return Err(FieldError::TooShort { field, min });
    }
    match max {
        Some(max) if len > max => Err(FieldError::TooLong { field, max }),
        _ => Ok(()),
    }
}

/// Requires a non-blank value matching `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::Required(Field::Email));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::Malformed(Field::Email));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    check_length(Field::Name, name, NAME_MIN_CHARS, Some(NAME_MAX_CHARS))
}

pub fn validate_company(company: &str) -> Result<(), FieldError> {
    check_length(Field::Company, company, COMPANY_MIN_CHARS, None)
}

pub fn validate_message(message: &str) -> Result<(), FieldError> {
    check_length(
        Field::Message,
        message,
        MESSAGE_MIN_CHARS,
        Some(MESSAGE_MAX_CHARS),
    )
}

/// Requires up to 16 digits with an optional leading `+`, ignoring spaces,
/// dashes and parentheses.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if phone.trim().is_empty() {
        return Err(FieldError::Required(Field::Phone));
    }
    let cleaned = PHONE_SEPARATORS_RE.replace_all(phone, "");
    if !PHONE_RE.is_match(&cleaned) {
        return Err(FieldError::Malformed(Field::Phone));
    }
    Ok(())
}

/// Validates name, email, company and message.
#[must_use]
pub fn validate_contact_form(fields: &ContactFields) -> ValidationResult {
    ValidationResult::from_checks([
        validate_name(&fields.name),
        validate_email(&fields.email),
        validate_company(&fields.company),
        validate_message(&fields.message),
    ])
}

/// Validates the newsletter signup, which only has an email.
#[must_use]
pub fn validate_newsletter_form(email: &str) -> ValidationResult {
    ValidationResult::from_checks([validate_email(email)])
}

/// Styling state for an input: a reported error wins, then any non-blank
/// value counts as success.
#[must_use]
pub fn field_state(field: Field, value: &str, errors: &BTreeMap<Field, String>) -> FieldState {
    if errors.get(&field).is_some_and(|message| !message.is_empty()) {
        FieldState::Error
    } else if !value.trim().is_empty() {
        FieldState::Success
    } else {
        FieldState::Default
    }
}

/// Summary shown when a form is rejected.
#[must_use]
pub fn validation_failed_message(error_count: usize) -> String {
    let plural = if error_count > 1 { "s" } else { "" };
    format!("Please fix {error_count} error{plural} before submitting.")
}
