//! Complex Text Parser
//!
//! Extracts parenthesized integer pairs `(a, b)` from free-form text and
//! reads each as one complex sample `a + bi`, in order of first appearance.
//! Both integers may be signed; whitespace is tolerated around the comma
//! only. Because the notation names both components explicitly, this parser
//! produces complex samples directly instead of going through an
//! [`crate::types::IqPair`].
//!
//! Zero matches is a valid outcome (empty signal); callers are expected to
//! report it as "no samples found" rather than as a read failure.

use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{IQBuffer, IQSample, SignalResult};

fn pair_regex() -> &'static Regex {
    static PAIR: OnceLock<Regex> = OnceLock::new();
    PAIR.get_or_init(|| {
        // Compile-time constant pattern, always valid
        Regex::new(r"\((-?\d+)\s*,\s*(-?\d+)\)").expect("pair regex is valid")
    })
}

/// Extract every `(a, b)` pair from the reader as one complex sample each.
pub fn parse<R: BufRead>(reader: &mut R) -> SignalResult<IQBuffer> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let signal = pair_regex()
        .captures_iter(&content)
        .filter_map(|caps| {
            // Both groups are signed digit runs; parse only fails on overflow
            let re: f64 = caps[1].parse().ok()?;
            let im: f64 = caps[2].parse().ok()?;
            Some(IQSample::new(re, im))
        })
        .collect();

    Ok(signal)
}
