//! # Sink
//!
//! The decoding side: a pivot-indexed system of row-reduced combinations,
//! solved online by Gauss-Jordan elimination. Each arriving combination is
//! first reduced against the stored rows; whatever survives is normalized
//! and inserted, then a back-substitution sweep pushes the system toward
//! reduced row-echelon form and the decoded count is refreshed.
//!
//! Stored invariant: the row at pivot `p` has `p` as its smallest component
//! and coefficient 1 there. Forward reduction relies on it to clear a
//! column with a single fold per stored row.

use std::collections::BTreeMap;
use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;
use tracing::{debug, trace};

use crate::combination::{Combination, InvalidPadding};
use crate::stats::SinkStats;

/// Failure while writing out decoded payloads.
#[derive(Debug, Error)]
pub enum DumpError {
    /// A decoded row's buffer failed the padding scan.
    #[error(transparent)]
    Padding(#[from] InvalidPadding),
    /// The destination writer failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Online RLNC decoder.
#[derive(Debug, Default)]
pub struct Sink {
    /// Pivot index to row; the row's smallest component is the pivot and
    /// its coefficient there is 1.
    rows: BTreeMap<u32, Combination>,
    /// Decoded rows after the last successful solve.
    decoded_count: usize,
    /// One past the largest component index ever seen.
    components_count: u32,
    stats: SinkStats,
}

impl Sink {
    pub fn new() -> Self {
        Sink::default()
    }

    /// Integrate a received combination.
    ///
    /// Returns `true` exactly when the input was innovative, i.e. linearly
    /// independent of the stored rows. Null and dependent inputs leave the
    /// system untouched apart from the statistics.
    pub fn solve(&mut self, mut incoming: Combination) -> bool {
        self.stats.received += 1;
        let (Some(first), Some(last)) = (incoming.first_component(), incoming.last_component())
        else {
            self.stats.null_dropped += 1;
            return false;
        };
        self.components_count = self.components_count.max(last + 1);
        self.stats.components = u64::from(self.components_count);

        // Forward reduction: clear columns left to right against stored
        // pivots. Stop at the first column with no stored row; that is
        // where the remainder becomes a pivot row itself.
        let mut col = first;
        while let Some(last) = incoming.last_component() {
            if col > last {
                break;
            }
            let coeff = incoming.coeff(col);
            if coeff != 0 {
                match self.rows.get(&col) {
                    Some(row) => incoming.add_scaled(row, coeff),
                    None => break,
                }
            }
            col += 1;
        }

        let Some(pivot) = incoming.first_component() else {
            // Reduced to nothing: a linear combination of stored rows.
            self.stats.non_innovative += 1;
            trace!("dropped non-innovative combination");
            return false;
        };

        // Normalize the pivot coefficient to 1 and insert. Forward
        // reduction guarantees no stored row already holds this pivot.
        let pivot_coeff = incoming.coeff(pivot);
        incoming /= pivot_coeff;
        self.rows.insert(pivot, incoming);
        trace!(pivot, rows = self.rows.len(), "stored innovative combination");

        self.back_substitute();

        // Drop rows that elimination emptied, then refresh the counts.
        self.rows.retain(|_, row| !row.is_null());
        self.decoded_count = self.rows.values().filter(|row| !row.is_coded()).count();
        self.stats.innovative += 1;
        self.stats.decoded = self.decoded_count as u64;
        if self.is_complete() {
            debug!(decoded = self.decoded_count, "system fully decoded");
        }
        true
    }

    /// Upward sweep: for each row in descending pivot order, subtract
    /// already-decoded rows to clear columns above the pivot. The sweep
    /// stops at the first row it cannot fully reduce, because every row
    /// above that one depends on its outcome; later solves retry the sweep
    /// from scratch.
    fn back_substitute(&mut self) {
        let pivots: Vec<u32> = self.rows.keys().rev().copied().collect();
        for pivot in pivots {
            let Some(mut row) = self.rows.remove(&pivot) else {
                continue;
            };
            let floor = row.first_component().map_or(pivot, |f| f.max(pivot));
            let mut col = row.last_component().unwrap_or(pivot);
            while col > floor {
                if let Some(other) = self.rows.get(&col) {
                    if other.is_coded() {
                        break;
                    }
                    let coeff = row.coeff(col);
                    if coeff != 0 {
                        // `other` is decoded (single component, coefficient
                        // 1), so this clears exactly column `col`.
                        row.add_scaled(other, coeff);
                    }
                }
                col -= 1;
            }
            let reduced = row.last_component() == Some(pivot);
            self.rows.insert(pivot, row);
            if !reduced {
                break;
            }
        }
    }

    // ─── Observation ─────────────────────────────────────────────────────

    /// All stored rows as `(pivot, row)` pairs in ascending pivot order.
    /// The borrow ends before any mutating call can run.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Combination)> {
        self.rows.iter().map(|(&pivot, row)| (pivot, row))
    }

    /// Fully decoded rows as `(pivot, row)` pairs, ascending by pivot.
    pub fn decoded(&self) -> impl Iterator<Item = (u32, &Combination)> {
        self.rows().filter(|(_, row)| !row.is_coded())
    }

    /// Number of rows held: the rank of the system seen so far.
    pub fn seen_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of decoded rows after the last successful solve.
    pub fn decoded_count(&self) -> usize {
        self.decoded_count
    }

    /// One past the largest component index seen.
    pub fn components_count(&self) -> u32 {
        self.components_count
    }

    /// Whether every component seen so far has been decoded.
    pub fn is_complete(&self) -> bool {
        self.components_count > 0 && self.decoded_count as u32 == self.components_count
    }

    /// Decoder statistics counters.
    pub fn stats(&self) -> &SinkStats {
        &self.stats
    }

    /// Write the unpadded payload of every decoded row, ascending by pivot.
    /// Returns the number of bytes written.
    pub fn dump<W: Write>(&self, writer: &mut W) -> Result<usize, DumpError> {
        let mut total = 0;
        for (_, row) in self.decoded() {
            let payload = row.payload()?;
            writer.write_all(payload)?;
            total += payload.len();
        }
        Ok(total)
    }

    /// Collect the decoded payloads into one contiguous buffer.
    pub fn assemble(&self) -> Result<Bytes, DumpError> {
        let mut buf = BytesMut::new();
        for (_, row) in self.decoded() {
            buf.put_slice(row.payload()?);
        }
        Ok(buf.freeze())
    }

    /// Drop every row and reset all counters.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.decoded_count = 0;
        self.components_count = 0;
        self.stats = SinkStats::default();
    }
}
