// SPDX-License-Identifier: MPL-2.0
//! Form state for the contact and newsletter forms.
//!
//! The structs here hold what the user typed plus the inline errors from the
//! last validation. Editing a field clears its inline error until the next
//! submit.

pub mod validation;

pub use validation::{
    field_state, validate_contact_form, validate_newsletter_form, validation_failed_message,
    ContactFields, Field, FieldError, FieldState, ValidationResult,
};

use std::collections::BTreeMap;

/// Contact / demo request form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: BTreeMap<Field, String>,
    is_submitting: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new value and clears the inline error for that field.
    ///
    /// Fields outside the contact form are ignored.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Company => &mut self.fields.company,
            Field::Message => &mut self.fields.message,
            Field::Phone => return,
        };
        *slot = value;
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Company => &self.fields.company,
            Field::Message => &self.fields.message,
            Field::Phone => "",
        }
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Validates all fields and keeps the errors for inline display.
    pub fn validate(&mut self) -> ValidationResult {
        let result = validate_contact_form(&self.fields);
        self.errors = result.errors.clone();
        result
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn field_state(&self, field: Field) -> FieldState {
        field_state(field, self.value(field), &self.errors)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Marks the form as submitting. Returns `false` if a submission is
    /// already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Ends the submission and clears every field.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

/// Footer newsletter signup.
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    email: String,
    error: Option<String>,
}

impl NewsletterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validate(&mut self) -> ValidationResult {
        let result = validate_newsletter_form(&self.email);
        self.error = result.error(Field::Email).map(str::to_owned);
        result
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Grace Hopper".into());
        form.set(Field::Email, "grace@navy.mil".into());
        form.set(Field::Company, "US Navy".into());
        form.set(Field::Message, "Interested in the Enterprise plan.".into());
        form
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut form = ContactForm::new();
        let result = form.validate();
        assert_eq!(result.error_count(), 4);

        form.set(Field::Name, "G".into());
        assert!(form.error(Field::Name).is_none());
        assert_eq!(form.error(Field::Email), Some("Email address is required"));
    }

    #[test]
    fn valid_form_has_no_inline_errors() {
        let mut form = filled();
        assert!(form.validate().is_valid);
        assert_eq!(form.field_state(Field::Company), FieldState::Success);
    }

    #[test]
    fn field_state_reflects_last_validation() {
        let mut form = filled();
        form.set(Field::Email, "nope".into());
        form.validate();
        assert_eq!(form.field_state(Field::Email), FieldState::Error);
    }

    #[test]
    fn submission_resets_fields() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());

        form.finish_submit();
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn phone_is_not_a_contact_field() {
        let mut form = ContactForm::new();
        form.set(Field::Phone, "+1 555".into());
        assert_eq!(form.value(Field::Phone), "");
    }

    #[test]
    fn newsletter_keeps_inline_error_until_edit() {
        let mut form = NewsletterForm::new();
        form.set_email("not-an-email".into());
        assert!(!form.validate().is_valid);
        assert_eq!(form.error(), Some("Please enter a valid email address"));

        form.set_email("reader@example.com".into());
        assert!(form.error().is_none());
        assert!(form.validate().is_valid);

        form.reset();
        assert_eq!(form.email(), "");
    }
}
