//! Raw Numeric Text Parser
//!
//! Scans plain text for maximal runs of decimal digits and reads each run as
//! one amplitude value, left-to-right, top-to-bottom. Signs are not
//! recognized and everything that is not a digit run is silently ignored:
//! there is no distinction between malformed and absent data. The output is a
//! mono amplitude stream, used for captures with no I/Q separation.

use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Sample, SignalResult};

fn digit_run_regex() -> &'static Regex {
    static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUN.get_or_init(|| {
        // Compile-time constant pattern, always valid
        Regex::new(r"\d+").expect("digit run regex is valid")
    })
}

/// Extract every digit run from the reader as one amplitude each.
///
/// An input with zero digit runs yields an empty vector, not an error.
pub fn parse<R: BufRead>(reader: &mut R) -> SignalResult<Vec<Sample>> {
    let regex = digit_run_regex();
    let mut amplitudes = Vec::new();

    for line in reader.lines() {
        let line = line?;
        for run in regex.find_iter(&line) {
            // A digit run always parses as f64 (overflow saturates to inf)
            if let Ok(value) = run.as_str().parse::<Sample>() {
                amplitudes.push(value);
            }
        }
    }

    Ok(amplitudes)
}
