//! Append-only operation history.
//!
//! The ledger is the stateful heart of the system: an in-memory,
//! insertion-ordered sequence of structured records. Reads copy out:
//! `snapshot` renders fresh strings on every call, so a returned history
//! can never alias the ledger's internal state in either direction.
//!
//! Records are immutable once appended. The only transitions are append
//! and clear; nothing updates or deletes a record in place.

use tally_core::{Number, Op, Record};

/// Append-only, in-memory ledger of operation records.
///
/// Sequence numbers are 1-based, unique, and monotonically increasing
/// between clears. `clear` replaces the ledger with a new empty sequence
/// and restarts numbering.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Records in insertion order.
    records: Vec<Record>,
    /// Sequence number of the most recent record (0 when empty).
    last_seq: u64,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with pre-allocated record capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            last_seq: 0,
        }
    }

    /// Append one completed operation and return its sequence number.
    ///
    /// The record lands at the end of the ledger; insertion order is
    /// preserved. Amortized O(1).
    pub fn append(&mut self, op: Op, lhs: Number, rhs: Number, result: Number) -> u64 {
        let seq = self.last_seq + 1;
        self.records.push(Record {
            seq,
            op,
            lhs,
            rhs,
            result,
        });
        self.last_seq = seq;
        tracing::trace!(target: "tally::history", seq, op = %op, "record appended");
        seq
    }

    /// Render a copy of the history, oldest record first.
    ///
    /// Every call allocates fresh strings: mutating the returned vector
    /// never affects the ledger, and later appends never affect previously
    /// returned copies.
    pub fn snapshot(&self) -> Vec<String> {
        self.records.iter().map(Record::render).collect()
    }

    /// Structured view of the records, insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Drop all records and restart sequence numbering.
    ///
    /// The ledger becomes a new empty sequence; snapshots taken earlier
    /// are unaffected (they were already independent copies).
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records = Vec::new();
        self.last_seq = 0;
        tracing::debug!(target: "tally::history", dropped, "history cleared");
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
