//! Deflate pass over the padded bitstream. It picks up what the rank pass leaves behind:
//! repeated literals and a skewed rank distribution.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

pub fn deflate(input: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(level.clamp(0, 9)));
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}

/// Inflates a raw deflate stream. Any decoder failure means the blob is corrupt or foreign.
///
/// Output stops at `limit + 1` bytes, so a caller that expects exactly `limit` bytes sees the
/// overrun without the whole stream ever being expanded.
pub fn inflate(input: &[u8], limit: usize) -> Result<Vec<u8>> {
    let decoder = DeflateDecoder::new(input);
    let mut output = Vec::with_capacity(limit.min(1 << 24));
    decoder
        .take(limit as u64 + 1)
        .read_to_end(&mut output)
        .map_err(|e| Error::CorruptStream(format!("deflate stream did not decode: {}", e)))?;
    Ok(output)
}
