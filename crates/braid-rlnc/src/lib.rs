//! # braid-rlnc
//!
//! Sparse random linear network coding (RLNC) engine over GF(2^8).
//!
//! A [`Source`] wraps a sequence of payloads (equal or varying lengths) and
//! emits an unbounded stream of random linear combinations of them. A
//! [`Sink`] feeds arriving combinations through online Gauss-Jordan
//! elimination over a sparse, pivot-indexed system, recovering the original
//! payloads as soon as enough linearly independent combinations have been
//! seen.
//!
//! The engine is transport-agnostic: a [`Combination`] exposes its
//! coefficient pairs and coded bytes for marshaling, and a receiver
//! rebuilds one with [`Combination::set_coded_data`] plus repeated
//! [`Combination::add_component`]. No wire format is prescribed beyond the
//! 0x80 payload padding convention that makes decoded buffers
//! self-delimiting.
//!
//! ## Crate structure
//!
//! - [`gf256`]: GF(2^8) tables, field ops, vector XOR
//! - [`rng`]: deterministic nonzero coefficient generator
//! - [`combination`]: the sparse combination algebra
//! - [`source`]: payload store and combination generator
//! - [`sink`]: online Gauss-Jordan decoder
//! - [`stats`]: serializable decoder counters
//!
//! ## Example
//!
//! ```
//! use braid_rlnc::{Sink, Source};
//!
//! let mut source = Source::new(7);
//! source.add(b"alpha");
//! source.add(b"beta");
//!
//! let mut sink = Sink::new();
//! while !sink.is_complete() {
//!     let combination = source.generate().expect("source is non-empty");
//!     sink.solve(combination);
//! }
//! assert_eq!(&sink.assemble().unwrap()[..], b"alphabeta");
//! ```

pub mod combination;
pub mod gf256;
pub mod rng;
pub mod sink;
pub mod source;
pub mod stats;

pub use combination::{Combination, InvalidPadding};
pub use rng::CoeffGenerator;
pub use sink::{DumpError, Sink};
pub use source::Source;
pub use stats::SinkStats;
