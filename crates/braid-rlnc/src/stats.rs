//! # Decoder Statistics
//!
//! Flat counters kept by the sink, serializable for export alongside
//! whatever telemetry the embedding application already runs.

use serde::Serialize;

/// Aggregate sink-side statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SinkStats {
    /// Combinations handed to `solve`, including null and dependent ones.
    pub received: u64,
    /// Combinations accepted as linearly independent.
    pub innovative: u64,
    /// Combinations rejected as linear combinations of stored rows.
    pub non_innovative: u64,
    /// Null combinations discarded outright.
    pub null_dropped: u64,
    /// Rows decoded after the most recent solve.
    pub decoded: u64,
    /// One past the largest component index seen.
    pub components: u64,
}

impl SinkStats {
    /// Fraction of received combinations that advanced the system.
    pub fn innovation_ratio(&self) -> f64 {
        if self.received == 0 {
            0.0
        } else {
            self.innovative as f64 / self.received as f64
        }
    }
}
