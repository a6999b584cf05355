//! # RF-01: Field Validation Subsystem
//!
//! Pure, fixed validation rules mapping a named field's raw value to a
//! `ValidationResult`. Nothing here performs I/O or raises errors: invalid
//! input is reported as data.
//!
//! ## Architecture
//!
//! - **Domain**: Rule predicates (`rules`) and per-form schemas (`schema`)
//! - **Ports**: Inbound `FieldValidationApi`
//! - **Service**: `FieldValidator`, bound to one `FormSchema`
//!
//! ## Rules
//!
//! | Rule | Invalid when |
//! |------|--------------|
//! | Name-like | trimmed length < 2 |
//! | Email | no `local@domain.tld` structure |
//! | Phone (optional) | non-empty and not 8-20 of `[0-9+ ()-]` after whitespace removal |
//! | Selection | empty / unselected |
//! | Free text | trimmed length < 10 |
//! | Required | empty after trim |
//! | Payment choice | non-empty and not a known payment method id |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::rules;
pub use domain::schema::{FieldRule, FieldSpec, FormSchema};
pub use ports::inbound::FieldValidationApi;
pub use service::FieldValidator;
