//! Inbound Ports (Driving Ports / API)

use shared_types::{FormSnapshot, ValidationReport, ValidationResult};

/// Primary Field Validation API
///
/// Both operations are pure: same input, same result, no side effects.
pub trait FieldValidationApi: Send + Sync {
    /// Validate one field's raw value (used for on-blur checks).
    ///
    /// Fields without a rule are always valid.
    fn validate(&self, field_name: &str, raw_value: &str) -> ValidationResult;

    /// Validate every ruled field of a snapshot.
    ///
    /// Produces exactly one result per ruled field, in schema order.
    /// Absent fields are checked as empty strings.
    fn validate_snapshot(&self, snapshot: &FormSnapshot) -> ValidationReport;
}
