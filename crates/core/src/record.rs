//! Operator tags and structured operation records.
//!
//! The history ledger stores structured records rather than pre-rendered
//! text: operands, operator tag, and result are kept as typed values and
//! the contractual text form is rendered on demand. Equivalent inputs
//! therefore always produce identical text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::Number;

/// Arithmetic operator tag.
///
/// Only `Add` has semantics today. The remaining operators are reserved
/// placeholders: they exist for dispatch and for naming unsupported
/// operations, and are never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`). Reserved, not yet supported.
    Subtract,
    /// Multiplication (`*`). Reserved, not yet supported.
    Multiply,
    /// Division (`/`). Reserved, not yet supported.
    Divide,
}

impl Op {
    /// Symbol used in rendered records.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
        }
    }

    /// Lowercase operation name, used in unsupported-operation errors.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One completed operation in the history ledger.
///
/// Records are immutable once appended and carry a 1-based sequence number
/// assigned at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Sequence number within the current history (1-based).
    pub seq: u64,
    /// Operator applied.
    pub op: Op,
    /// Left operand.
    pub lhs: Number,
    /// Right operand.
    pub rhs: Number,
    /// Computed result.
    pub result: Number,
}

impl Record {
    /// Render the contractual text form: `"<lhs> <op> <rhs> = <result>"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}
