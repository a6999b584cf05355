//! # Reveil-Forms Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (validation, ledger, export)
//! └── src/integration/  # Cross-subsystem flows
//!     ├── flows.rs        # Contact and checkout end to end
//!     └── persistence.rs  # File-backed store, bounds, exports
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rf-tests
//! cargo test -p rf-tests integration::flows::
//! cargo bench -p rf-tests
//! ```

pub mod integration;
