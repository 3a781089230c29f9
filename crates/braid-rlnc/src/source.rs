//! # Source
//!
//! The encoding side: an ordered set of original payloads wrapped as
//! trivial combinations, plus a generator that emits random linear
//! combinations of all of them. Coefficients are drawn in ascending
//! component order, so a given seed and add history always produce the same
//! stream of combinations.

use std::collections::BTreeMap;

use tracing::trace;

use crate::combination::Combination;
use crate::rng::CoeffGenerator;

/// Random linear combination source.
///
/// Payloads may have different lengths; each is padded on entry and a
/// generated combination carries a buffer sized for the longest.
#[derive(Debug, Clone)]
pub struct Source {
    /// Component index to the trivial combination holding that payload.
    originals: BTreeMap<u32, Combination>,
    /// Index assigned to the next added payload.
    next_index: u32,
    rng: CoeffGenerator,
}

impl Source {
    /// Create a source with the given coefficient seed. Seed 0 selects the
    /// degenerate all-ones coefficient stream (see [`CoeffGenerator`]).
    pub fn new(seed: u64) -> Self {
        Source {
            originals: BTreeMap::new(),
            next_index: 0,
            rng: CoeffGenerator::new(seed),
        }
    }

    /// Add an original payload and return its assigned component index.
    /// Indices are sequential from 0.
    pub fn add(&mut self, payload: &[u8]) -> u32 {
        let index = self.next_index;
        self.originals
            .insert(index, Combination::from_payload(index, payload));
        self.next_index += 1;
        trace!(index, len = payload.len(), "added source payload");
        index
    }

    /// Generate a random linear combination of every added payload, or
    /// `None` if the source is empty.
    ///
    /// Each original is folded in with a freshly drawn nonzero coefficient,
    /// ascending by component index, so the result spans the full range of
    /// added indices.
    pub fn generate(&mut self) -> Option<Combination> {
        if self.originals.is_empty() {
            return None;
        }
        let mut out = Combination::new();
        for original in self.originals.values() {
            let coeff = self.rng.next_coeff();
            out.add_scaled(original, coeff);
        }
        Some(out)
    }

    /// Number of originals currently held.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Whether no payloads have been added.
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Drop all originals and restart index assignment at 0.
    pub fn clear(&mut self) {
        self.originals.clear();
        self.next_index = 0;
    }
}
