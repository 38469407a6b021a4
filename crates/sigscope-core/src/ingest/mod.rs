//! Capture File Ingestion
//!
//! Decoders for the capture file layouts this toolkit understands, each
//! normalizing its input into the common types from [`crate::types`]:
//!
//! - **Raw text** ([`raw_text`]): unsigned decimal digit runs anywhere in the
//!   text, read as a mono amplitude stream
//! - **PCM binary** ([`pcm`]): interleaved signed 16-bit little-endian
//!   integers, split into I and Q by sample parity
//! - **Complex text** ([`complex_text`]): `(a, b)` integer pairs embedded in
//!   free-form text
//! - **Tabular I/Q** ([`tabular`]): delimited rows under a header with
//!   `real` and `imag` columns
//!
//! The format is always chosen by the caller; there is no auto-detection.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sigscope_core::ingest::{read_file, Ingested, SourceFormat};
//!
//! let decoded = read_file("capture.pcm".as_ref(), SourceFormat::Pcm16)?;
//! if let Ingested::Pair(pair) = decoded {
//!     let signal = pair.assemble();
//!     println!("{} complex samples", signal.len());
//! }
//! # Ok::<(), sigscope_core::SignalError>(())
//! ```

pub mod complex_text;
pub mod pcm;
pub mod raw_text;
pub mod tabular;

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::types::{IQBuffer, IqPair, Sample, SignalResult};

/// The closed set of capture file layouts, selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Digit runs in plain text, one amplitude per run
    RawText,
    /// Interleaved signed 16-bit little-endian PCM
    Pcm16,
    /// `(real, imag)` integer pairs in plain text
    ComplexText,
    /// Delimited table with `real` and `imag` columns
    TabularIq,
}

impl SourceFormat {
    /// Parse a CLI-style format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw-text" => Some(Self::RawText),
            "pcm16" => Some(Self::Pcm16),
            "complex-text" => Some(Self::ComplexText),
            "csv" => Some(Self::TabularIq),
            _ => None,
        }
    }

    /// All recognized format names, in CLI spelling
    pub fn names() -> &'static [&'static str] {
        &["raw-text", "pcm16", "complex-text", "csv"]
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RawText => "raw-text",
            Self::Pcm16 => "pcm16",
            Self::ComplexText => "complex-text",
            Self::TabularIq => "csv",
        };
        write!(f, "{}", name)
    }
}

/// What a parse produced.
///
/// Raw text carries no I/Q structure and stays a mono stream; PCM and tabular
/// input decode to component pairs; complex text names both parts explicitly
/// in its notation and therefore skips the pair step entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingested {
    /// Mono amplitude stream (no quadrature component)
    Mono(Vec<Sample>),
    /// Separate I and Q component sequences
    Pair(IqPair),
    /// Already-assembled complex samples
    Signal(IQBuffer),
}

impl Ingested {
    /// Number of decoded elements (scalars for mono, complex samples
    /// otherwise)
    pub fn len(&self) -> usize {
        match self {
            Self::Mono(samples) => samples.len(),
            Self::Pair(pair) => pair.len(),
            Self::Signal(signal) => signal.len(),
        }
    }

    /// True when the parse matched nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode one capture file using the given format.
///
/// The file handle is scoped to this call and closed on every exit path. An
/// input that matches nothing yields an empty [`Ingested`], not an error;
/// only malformed tabular structure fails.
pub fn read_file(path: &Path, format: SourceFormat) -> SignalResult<Ingested> {
    debug!("Reading {:?} as {}", path, format);
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    match format {
        SourceFormat::RawText => Ok(Ingested::Mono(raw_text::parse(&mut reader)?)),
        SourceFormat::Pcm16 => Ok(Ingested::Pair(pcm::parse(&mut reader)?)),
        SourceFormat::ComplexText => Ok(Ingested::Signal(complex_text::parse(&mut reader)?)),
        SourceFormat::TabularIq => Ok(Ingested::Pair(tabular::parse(&mut reader)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        for name in SourceFormat::names() {
            let format = SourceFormat::from_name(name).expect("known name");
            assert_eq!(format.to_string(), *name);
        }
    }

    #[test]
    fn test_unknown_format_name() {
        assert_eq!(SourceFormat::from_name("wav"), None);
    }
}
