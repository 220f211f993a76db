//! Blob framing around the deflated bitstream.
//!
//! ```text
//! "RKZ" | version | W (u32 BE) | log2 N | log2 V | log2 C | deflate(bitstream) | crc32 (BE) | len (BE)
//! ```
//!
//! The header lets the decoder refuse a blob written with a different configuration before
//! replaying any predictor calls. The trailer covers the bitstream the deflate pass produced, so
//! a truncated or damaged blob is caught even when the deflate stream still happens to decode.

use flate2::Crc;
use log::{debug, error};

use crate::error::{Error, Result};

use super::config::ProtocolConfig;
use super::entropy::{deflate, inflate};

pub const MAGIC: [u8; 3] = *b"RKZ";
pub const VERSION: u8 = 1;
pub const HEADER_LEN: usize = 11;
pub const TRAILER_LEN: usize = 8;

fn header(config: &ProtocolConfig) -> [u8; HEADER_LEN] {
    let mut out = [0_u8; HEADER_LEN];
    out[..3].copy_from_slice(&MAGIC);
    out[3] = VERSION;
    out[4..8].copy_from_slice(&(config.context_window_length as u32).to_be_bytes());
    out[8] = config.rank_bits();
    out[9] = config.word_length_bits();
    out[10] = config.context_length_bits();
    out
}

/// Reads the configuration a blob was written with.
pub fn read_config(blob: &[u8]) -> Result<ProtocolConfig> {
    if blob.len() < HEADER_LEN + TRAILER_LEN {
        return Err(Error::CorruptStream(format!(
            "blob of {} bytes is too short",
            blob.len()
        )));
    }
    if blob[..3] != MAGIC {
        return Err(Error::CorruptStream("not a rankzip blob".to_string()));
    }
    if blob[3] != VERSION {
        return Err(Error::CorruptStream(format!(
            "unsupported format version {}",
            blob[3]
        )));
    }
    let window = u32::from_be_bytes([blob[4], blob[5], blob[6], blob[7]]);
    ProtocolConfig::from_widths(window, blob[8], blob[9], blob[10])
        .map_err(|e| Error::CorruptStream(format!("bad header: {}", e)))
}

/// Wraps a padded bitstream: header, deflate body, trailer.
pub fn seal(bits: &[u8], config: &ProtocolConfig, level: u32) -> Result<Vec<u8>> {
    config.validate()?;
    let len = u32::try_from(bits.len()).map_err(|_| Error::FieldOverflow {
        field: "bitstream",
        bits: bits.len() * 8,
        max: u32::MAX as usize * 8,
    })?;
    let body = deflate(bits, level)?;
    let mut crc = Crc::new();
    crc.update(bits);

    let mut blob = Vec::with_capacity(HEADER_LEN + body.len() + TRAILER_LEN);
    blob.extend_from_slice(&header(config));
    blob.extend_from_slice(&body);
    blob.extend_from_slice(&crc.sum().to_be_bytes());
    blob.extend_from_slice(&len.to_be_bytes());
    debug!(
        "Sealed {} bitstream bytes into a {} byte blob",
        bits.len(),
        blob.len()
    );
    Ok(blob)
}

/// Checks the header against `config`, inflates the body and verifies the trailer.
pub fn open(blob: &[u8], config: &ProtocolConfig) -> Result<Vec<u8>> {
    config.validate()?;
    let written_with = read_config(blob)?;
    if written_with != *config {
        error!(
            "Blob was written with {:?}, decoder is set up with {:?}",
            written_with, config
        );
        return Err(Error::PredictorMismatch(format!(
            "blob uses W={} N={} V={} C={}, decoder uses W={} N={} V={} C={}",
            written_with.context_window_length,
            written_with.next_word_possibilities_number,
            written_with.out_of_vocabulary_word_max_bit_size,
            written_with.initial_context_max_bit_size,
            config.context_window_length,
            config.next_word_possibilities_number,
            config.out_of_vocabulary_word_max_bit_size,
            config.initial_context_max_bit_size,
        )));
    }

    let split = blob.len() - TRAILER_LEN;
    let trailer = &blob[split..];
    let crc_expected = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let len_expected = u32::from_be_bytes([trailer[4], trailer[5], trailer[6], trailer[7]]) as usize;

    let bits = inflate(&blob[HEADER_LEN..split], len_expected)?;
    if bits.len() != len_expected {
        return Err(Error::CorruptStream(format!(
            "bitstream is {} bytes, trailer says {}",
            bits.len(),
            len_expected
        )));
    }
    let mut crc = Crc::new();
    crc.update(&bits);
    if crc.sum() != crc_expected {
        return Err(Error::CorruptStream(format!(
            "bitstream checksum {:08x} does not match {:08x}",
            crc.sum(),
            crc_expected
        )));
    }
    Ok(bits)
}
