//! Signal Analysis Module
//!
//! Analysis tools for normalized I/Q signals: envelope extraction and
//! summary statistics (sample counts, component ranges, mean amplitude).
//!
//! ## Example
//!
//! ```rust
//! use sigscope_core::analysis::{envelope, SignalStats};
//! use sigscope_core::types::IQSample;
//!
//! let samples = vec![IQSample::new(3.0, 4.0)];
//!
//! let env = envelope(&samples);
//! assert_eq!(env, vec![5.0]);
//!
//! let stats = SignalStats::compute(&samples);
//! println!("Mean amplitude: {:.2}", stats.mean_amplitude);
//! ```

pub mod statistics;

pub use statistics::{envelope, SignalStats};
