//! Calculator facade over the history ledger.
//!
//! The facade callers hold: it owns a [`History`] and a last-result
//! accumulator and exposes the operation surface. Addition is the only
//! implemented operation; the remaining arithmetic and the memory
//! registers are reserved placeholders that report themselves as
//! unsupported instead of guessing at semantics.

use tally_core::{Number, Op, TallyError, TallyResult};

use crate::history::History;

/// Basic calculator with an append-only operation history.
///
/// A Calculator is created once per logical session and mutated only
/// through its operation methods. Mutators take `&mut self`: the design
/// assumes exclusive single-owner access, and callers sharing an instance
/// across threads must add their own synchronization around the whole
/// value.
///
/// # Example
///
/// ```
/// use tally_engine::Calculator;
/// use tally_core::Number;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(2, 3), Number::Int(5));
/// assert_eq!(calc.get_history(), vec!["2 + 3 = 5".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Last computed value; zero until the first operation.
    result: Number,
    /// Operation ledger.
    history: History,
}

impl Calculator {
    /// Create a calculator with a zeroed accumulator and empty history.
    pub fn new() -> Self {
        Self {
            result: Number::Int(0),
            history: History::new(),
        }
    }

    /// Add two numbers.
    ///
    /// Computes `a + b` under standard numeric addition (integer pairs stay
    /// integral, any float operand promotes the result to float), appends
    /// exactly one record to the history, updates the accumulator, and
    /// returns the sum. Addition is total over the numeric domain and
    /// cannot fail.
    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a + b;
        self.history.append(Op::Add, a, b, result);
        self.result = result;
        result
    }

    /// Subtract two numbers. Reserved: not yet supported.
    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> TallyResult<Number> {
        self.apply(Op::Subtract, a, b)
    }

    /// Multiply two numbers. Reserved: not yet supported.
    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> TallyResult<Number> {
        self.apply(Op::Multiply, a, b)
    }

    /// Divide two numbers. Reserved: not yet supported.
    pub fn divide(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> TallyResult<Number> {
        self.apply(Op::Divide, a, b)
    }

    /// Apply an operator to two operands.
    ///
    /// Single dispatch point for the operation surface: `Op::Add` computes
    /// and records the sum; every other operator returns
    /// [`TallyError::Unsupported`] and leaves the calculator untouched.
    pub fn apply(
        &mut self,
        op: Op,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> TallyResult<Number> {
        match op {
            Op::Add => Ok(self.add(a, b)),
            unsupported => Err(TallyError::unsupported(unsupported.name())),
        }
    }

    /// Store a value in the memory register. Reserved: not yet supported.
    pub fn memory_store(&mut self, _value: impl Into<Number>) -> TallyResult<()> {
        Err(TallyError::unsupported("memory.store"))
    }

    /// Recall the memory register. Reserved: not yet supported.
    pub fn memory_recall(&self) -> TallyResult<Number> {
        Err(TallyError::unsupported("memory.recall"))
    }

    /// Clear the memory register. Reserved: not yet supported.
    pub fn memory_clear(&mut self) -> TallyResult<()> {
        Err(TallyError::unsupported("memory.clear"))
    }

    /// Return a copy of the operation history, oldest record first.
    ///
    /// The strings are rendered fresh on every call: mutating the returned
    /// vector never affects the calculator, and later operations never
    /// affect previously returned copies.
    pub fn get_history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    /// Clear the operation history.
    ///
    /// Previously returned copies are unaffected; the accumulator keeps
    /// its value.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Borrow the ledger for structured reads.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The last computed value; `Number::Int(0)` until the first operation.
    pub fn last_result(&self) -> Number {
        self.result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
