//! tally: embedded arithmetic utility with an append-only operation ledger.
//!
//! One component: a [`Calculator`] value holder exposing `add` plus an
//! in-memory, copy-on-read [`History`] of operation records. Every
//! completed operation appends one record; `get_history` renders an
//! independent copy of the ledger on every call.
//!
//! Subtraction, multiplication, division, and the memory registers are
//! reserved placeholders: they surface as [`TallyError::Unsupported`]
//! rather than guessed-at semantics.
//!
//! # Example
//!
//! ```
//! use tally::{Calculator, Number};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), Number::Int(5));
//! assert_eq!(calc.add(4, 5), Number::Int(9));
//! assert_eq!(calc.get_history(), vec!["2 + 3 = 5", "4 + 5 = 9"]);
//!
//! calc.clear_history();
//! assert!(calc.get_history().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::*;
