//! Engine layer for tally
//!
//! Stateful machinery of the workspace:
//! - History: append-only, insertion-ordered ledger of operation records
//! - Calculator: the facade callers hold; arithmetic plus history tracking
//!
//! Both are single-owner values. Mutators take `&mut self`; callers that
//! share an instance across threads add their own synchronization around
//! the whole value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calculator;
pub mod history;

// Re-exports
pub use calculator::Calculator;
pub use history::History;
