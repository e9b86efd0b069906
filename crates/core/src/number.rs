//! Numeric domain for operands and results.
//!
//! `Number` is the fixed numeric type of the system: integer and
//! floating-point values stay distinct so history records render each the
//! way it was written. Addition is total: there are no overflow checks
//! and no special handling of NaN or infinity.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// A calculator operand or result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Signed integer value.
    Int(i64),
    /// Double-precision floating-point value.
    Float(f64),
}

impl Number {
    /// Widen to f64 regardless of variant.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(x) => *x,
        }
    }

    /// True for the integer variant.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// True for the float variant.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// Standard numeric addition.
///
/// Integer pairs stay integral using wrapping addition (no overflow
/// checks); any float operand promotes the result to float with ordinary
/// IEEE rounding.
impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a.wrapping_add(b)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug formatting keeps whole-valued floats recognizably
            // float ("4.0") and is the shortest round-trippable form.
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Parse a number from text: integers first, then floats.
///
/// The single fail-fast validation boundary of the system; everything past
/// it operates on typed numbers.
impl FromStr for Number {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| TallyError::invalid_operand(format!("not a number: {:?}", trimmed)))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v as i64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v as f64)
    }
}
