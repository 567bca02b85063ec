//! Records and the append-only series that accumulates them.

use serde::{Deserialize, Serialize};

/// One synthesized personal record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position within the series; strictly increasing by 1.
    pub serial: u64,
    /// Opaque unique identifier (UUID).
    pub identifier: String,
    /// `"first last"` name, possibly corrupted.
    pub person: String,
    /// Locale-formatted address.
    pub location: String,
    /// Locale-formatted phone number.
    pub phone: String,
    /// Number of corruption passes actually applied to `person`.
    pub error_count: u32,
}

/// The accumulated, append-only collection of records for one configuration.
///
/// Owns the serial counter: serials are assigned here and reset here, so no
/// hidden module-level state is involved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    records: Vec<Record>,
    next_serial: u64,
}

impl Series {
    /// An empty series with the counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_serial: 1,
        }
    }

    /// All records appended so far, in serial order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The serial the next appended record will receive.
    #[inline]
    #[must_use]
    pub fn peek_serial(&self) -> u64 {
        self.next_serial
    }

    /// Clear all records and reinitialize the counter to 1.
    pub fn reset(&mut self) {
        self.records.clear();
        self.next_serial = 1;
    }

    /// Take the next serial, advancing the counter.
    pub(crate) fn take_serial(&mut self) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }

    /// Append a finished record. Crate-internal so the monotonic-serial
    /// invariant cannot be broken from outside the batch generator.
    pub(crate) fn append(&mut self, record: Record) {
        debug_assert_eq!(record.serial + 1, self.next_serial);
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: u64) -> Record {
        Record {
            serial,
            identifier: format!("id-{serial}"),
            person: "Ada Lovelace".to_string(),
            location: "12 Maple Street, Boston".to_string(),
            phone: "(555) 010-0199".to_string(),
            error_count: 0,
        }
    }

    #[test]
    fn serials_advance_by_one() {
        let mut series = Series::new();
        assert_eq!(series.peek_serial(), 1);
        for _ in 0..3 {
            let serial = series.take_serial();
            series.append(record(serial));
        }
        let serials: Vec<u64> = series.records().iter().map(|r| r.serial).collect();
        assert_eq!(serials, vec![1, 2, 3]);
    }

    #[test]
    fn reset_clears_and_restarts_counter() {
        let mut series = Series::new();
        let serial = series.take_serial();
        series.append(record(serial));
        series.reset();
        assert!(series.is_empty());
        assert_eq!(series.peek_serial(), 1);
        assert_eq!(series.take_serial(), 1);
    }
}
