//! Per-field validation results.

use serde::{Deserialize, Serialize};

/// Outcome of validating one field.
///
/// `message` is present only when the field is invalid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field_name: String,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// All per-field results of one validation pass.
///
/// Overall validity is the conjunction of the per-field results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }

    /// Results for invalid fields only, in schema order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}
