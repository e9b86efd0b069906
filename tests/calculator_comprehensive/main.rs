//! Calculator Comprehensive Test Suite
//!
//! End-to-end verification of the public API surface through the root
//! crate: the add operation, the history ledger contract, and the
//! reserved placeholders.
//!
//! ## Test Modules
//!
//! - **operations**: arithmetic scenarios and the unsupported surface
//! - **history_contract**: ordering, copy isolation, clear semantics
//! - **serialization**: JSON shape of records and numbers
//! - **properties**: universal properties checked with proptest
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test calculator_comprehensive
//! ```

// Test modules
mod history_contract;
