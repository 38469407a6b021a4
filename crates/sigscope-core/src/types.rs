//! Core types for I/Q signal ingestion
//!
//! This module defines the fundamental types used throughout the library for
//! representing complex I/Q (In-phase/Quadrature) samples.
//!
//! ## Understanding I/Q Samples
//!
//! Recorded radio signals are represented as complex numbers where:
//! - **I (In-phase)**: The real component, aligned with a reference carrier
//! - **Q (Quadrature)**: The imaginary component, 90° out of phase with the
//!   carrier
//!
//! Capture files store these two components in different layouts (interleaved
//! binary integers, text pairs, tabular columns); the parsers in
//! [`crate::ingest`] normalize all of them into `Vec<IQSample>`.

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A floating point sample (for real-valued signals)
pub type Sample = f64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// Result type for ingestion operations
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur while decoding signal capture files
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// A required tabular column is absent. Carries the full observed header
    /// so the caller can see what the file actually contains.
    #[error("missing required column(s) {missing:?}; available columns: {available:?}")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// A cell in a required column did not parse as a number.
    #[error("non-numeric value '{value}' in column '{column}' at data row {row}")]
    BadCell {
        column: String,
        row: usize,
        value: String,
    },

    /// A data row is too short to contain a required column.
    #[error("data row {row} has {found} field(s), expected at least {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Two equal-rank sequences of I and Q components, row order = time order.
///
/// The component lengths are allowed to differ (an interleaved capture with
/// an odd sample count leaves `in_phase` one element longer). The mismatch is
/// resolved by [`IqPair::assemble`], which silently truncates to the shorter
/// length. This lossy pairing is deliberate; it is not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IqPair {
    /// In-phase (real) components
    pub in_phase: Vec<Sample>,
    /// Quadrature (imaginary) components
    pub quadrature: Vec<Sample>,
}

impl IqPair {
    /// Create a pair from its two component sequences
    pub fn new(in_phase: Vec<Sample>, quadrature: Vec<Sample>) -> Self {
        Self {
            in_phase,
            quadrature,
        }
    }

    /// Number of complete complex samples this pair can form
    pub fn len(&self) -> usize {
        self.in_phase.len().min(self.quadrature.len())
    }

    /// True when no complete complex sample can be formed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of raw scalar components held
    pub fn raw_sample_count(&self) -> usize {
        self.in_phase.len() + self.quadrature.len()
    }

    /// Pair the components index-for-index into a complex signal.
    ///
    /// Output length is `min(in_phase.len(), quadrature.len())`; any excess
    /// trailing component is dropped.
    pub fn assemble(&self) -> IQBuffer {
        self.in_phase
            .iter()
            .zip(self.quadrature.iter())
            .map(|(&i, &q)| IQSample::new(i, q))
            .collect()
    }
}
