//! Cross-subsystem integration tests.

#[cfg(test)]
pub mod fixtures;
pub mod flows;
pub mod persistence;
