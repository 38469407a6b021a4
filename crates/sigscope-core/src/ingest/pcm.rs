//! PCM Binary Parser
//!
//! Reinterprets a headerless byte stream as interleaved signed 16-bit
//! little-endian integers and de-interleaves them by sample parity:
//! even-indexed integers are the I component, odd-indexed the Q component.
//!
//! The 16-bit width, signedness, and byte order are a hard format contract.
//! A trailing partial byte (odd byte length) cannot form an integer and is
//! discarded silently, mirroring the sample-pairing truncation policy; an odd
//! integer count leaves `in_phase` one element longer than `quadrature`,
//! which [`crate::types::IqPair::assemble`] later truncates.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::types::{IqPair, Sample, SignalResult};

/// Decode the entire byte stream into an I/Q component pair.
pub fn parse<R: Read>(reader: &mut R) -> SignalResult<IqPair> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    // Trailing partial byte is discarded, not an error
    let count = bytes.len() / 2;
    let mut cursor = &bytes[..];

    let mut in_phase = Vec::with_capacity(count.div_ceil(2));
    let mut quadrature = Vec::with_capacity(count / 2);

    for idx in 0..count {
        let value = cursor.read_i16::<LittleEndian>()? as Sample;
        if idx % 2 == 0 {
            in_phase.push(value);
        } else {
            quadrature.push(value);
        }
    }

    Ok(IqPair::new(in_phase, quadrature))
}
