//! # sigscope-core
//!
//! Ingestion and analysis layer for recorded radio-signal captures.
//!
//! Capture files arrive in several heterogeneous encodings: raw numeric
//! text, interleaved 16-bit PCM binary, textual `(a, b)` complex pairs, and
//! delimited tables with `real`/`imag` columns. This crate normalizes all of
//! them into one canonical complex sample sequence and derives a small set of
//! statistics (envelope, component ranges, mean amplitude) from it. Chart
//! drawing and window management belong to an external renderer that merely
//! consumes these values.
//!
//! ## Pipeline
//!
//! Parse → assemble → compute statistics, one capture per invocation,
//! synchronous start to finish:
//!
//! ```rust,no_run
//! use sigscope_core::analysis::SignalStats;
//! use sigscope_core::ingest::{read_file, Ingested, SourceFormat};
//!
//! let decoded = read_file("capture.pcm".as_ref(), SourceFormat::Pcm16)?;
//! if let Ingested::Pair(pair) = decoded {
//!     let stats = SignalStats::compute_from_pair(&pair);
//!     print!("{}", stats.to_text());
//! }
//! # Ok::<(), sigscope_core::SignalError>(())
//! ```

pub mod analysis;
pub mod ingest;
pub mod types;

pub use analysis::{envelope, SignalStats};
pub use ingest::{read_file, Ingested, SourceFormat};
pub use types::{IQBuffer, IQSample, IqPair, Sample, SignalError, SignalResult};
