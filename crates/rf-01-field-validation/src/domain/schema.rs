//! Form schemas: which rule applies to which field, with which message.

use super::rules;
use serde::{Deserialize, Serialize};
use shared_types::{contact_fields, order_fields, FormKind, ValidationResult};

/// Validation rule attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    NameLike,
    Email,
    OptionalPhone,
    Selection,
    FreeText,
    Required,
    /// Required, and structurally an email address.
    RequiredEmail,
    /// Empty (falls back to the default method) or a known method id.
    PaymentChoice,
}

impl FieldRule {
    /// Apply the rule to a raw value.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldRule::NameLike => rules::is_valid_name(value),
            FieldRule::Email => rules::is_valid_email(value),
            FieldRule::OptionalPhone => rules::is_valid_optional_phone(value),
            FieldRule::Selection => rules::is_selected(value),
            FieldRule::FreeText => rules::is_valid_message(value),
            FieldRule::Required => rules::is_present(value),
            FieldRule::RequiredEmail => rules::is_present(value) && rules::is_valid_email(value),
            FieldRule::PaymentChoice => rules::is_known_payment_method(value),
        }
    }
}

/// One validated field of a form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub rule: FieldRule,
    pub message: String,
}

impl FieldSpec {
    pub fn new(name: &str, rule: FieldRule, message: &str) -> Self {
        Self {
            name: name.to_string(),
            rule,
            message: message.to_string(),
        }
    }

    pub fn check(&self, value: &str) -> ValidationResult {
        if self.rule.accepts(value) {
            ValidationResult::valid(&self.name)
        } else {
            ValidationResult::invalid(&self.name, &self.message)
        }
    }
}

/// Ordered set of field specs for one form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Contact form: names, email, optional phone, subject, message.
    pub fn contact() -> Self {
        use contact_fields::*;
        Self {
            kind: FormKind::Contact,
            fields: vec![
                FieldSpec::new(
                    FIRST_NAME,
                    FieldRule::NameLike,
                    "First name must contain at least 2 characters",
                ),
                FieldSpec::new(
                    LAST_NAME,
                    FieldRule::NameLike,
                    "Last name must contain at least 2 characters",
                ),
                FieldSpec::new(EMAIL, FieldRule::Email, "Please enter a valid email address"),
                FieldSpec::new(PHONE, FieldRule::OptionalPhone, "Invalid phone number format"),
                FieldSpec::new(SUBJECT, FieldRule::Selection, "Please select a subject"),
                FieldSpec::new(
                    MESSAGE,
                    FieldRule::FreeText,
                    "Message must contain at least 10 characters",
                ),
            ],
        }
    }

    /// Checkout form: customer identity and phone are mandatory.
    pub fn order() -> Self {
        use order_fields::*;
        Self {
            kind: FormKind::Order,
            fields: vec![
                FieldSpec::new(CUSTOMER_NAME, FieldRule::Required, "This field is required."),
                FieldSpec::new(
                    CUSTOMER_EMAIL,
                    FieldRule::RequiredEmail,
                    "A valid email address is required.",
                ),
                FieldSpec::new(CUSTOMER_PHONE, FieldRule::Required, "This field is required."),
                FieldSpec::new(
                    PAYMENT_METHOD,
                    FieldRule::PaymentChoice,
                    "Please choose a supported payment method.",
                ),
            ],
        }
    }

    pub fn for_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::Contact => Self::contact(),
            FormKind::Order => Self::order(),
        }
    }

    pub fn spec(&self, field_name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
