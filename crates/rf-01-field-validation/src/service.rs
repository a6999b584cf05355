//! Field Validator Service
//!
//! Implements `FieldValidationApi` over a fixed `FormSchema`.

use crate::domain::schema::FormSchema;
use crate::ports::inbound::FieldValidationApi;
use shared_types::{FormKind, FormSnapshot, ValidationReport, ValidationResult};
use tracing::debug;

/// Validator bound to one form's schema.
#[derive(Clone, Debug)]
pub struct FieldValidator {
    schema: FormSchema,
}

impl FieldValidator {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }

    pub fn for_kind(kind: FormKind) -> Self {
        Self::new(FormSchema::for_kind(kind))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }
}

impl FieldValidationApi for FieldValidator {
    fn validate(&self, field_name: &str, raw_value: &str) -> ValidationResult {
        match self.schema.spec(field_name) {
            Some(spec) => spec.check(raw_value),
            None => ValidationResult::valid(field_name),
        }
    }

    fn validate_snapshot(&self, snapshot: &FormSnapshot) -> ValidationReport {
        let results: Vec<_> = self
            .schema
            .fields
            .iter()
            .map(|spec| spec.check(snapshot.field_or_empty(&spec.name)))
            .collect();

        let report = ValidationReport::new(results);
        debug!(
            form = %self.schema.kind,
            fields = report.results.len(),
            errors = report.error_count(),
            "Validated snapshot"
        );
        report
    }
}
