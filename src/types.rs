//! Public types for the tally unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core value types
pub use tally_core::Number;

// Operator tags and structured records
pub use tally_core::{Op, Record};

// Error taxonomy
pub use tally_core::{TallyError, TallyResult};

// Stateful engine types
pub use tally_engine::{Calculator, History};
