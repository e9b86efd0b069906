//! Core types for tally
//!
//! This crate defines the shared vocabulary of the workspace:
//! - Number: the fixed numeric domain (Int/Float)
//! - Op / Record: operator tags and structured operation records
//! - TallyError / TallyResult: error taxonomy and result alias
//!
//! Stateful machinery (the history ledger and the calculator facade)
//! lives in tally-engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod number;
pub mod record;

// Re-exports
pub use error::{TallyError, TallyResult};
pub use number::Number;
pub use record::{Op, Record};
