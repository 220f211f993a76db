//! The codec module turns a compressed object into bytes and back. It knows nothing about
//! ranking or predictors, only the shape of the object.
//!
//! Packing happens in the following steps:
//! - Serialize: write the initial context and one record per word into a dense bitstream, with
//!   fixed-width length prefixes, and pad the last byte with ones.
//! - Deflate: run the padded bitstream through deflate.
//! - Frame: put a header (magic, version, configuration) in front and a CRC-32 and length
//!   trailer behind.
//!
//! Unpacking is the inverse: check the frame, inflate, verify, deserialize.
//!
pub mod compressed;
pub mod config;
pub mod deserialize;
pub mod entropy;
pub mod frame;
pub mod serialize;

use log::debug;

use crate::error::Result;

use compressed::CompressedObject;
use config::{CodecOptions, ProtocolConfig};

/// Serialize, deflate and frame a compressed object.
pub fn pack(
    object: &CompressedObject,
    config: &ProtocolConfig,
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    config.validate()?;
    let bits = serialize::serialize(object, config)?;
    debug!("Bitstream is {} bytes before deflate", bits.len());
    frame::seal(&bits, config, options.level)
}

/// Check, inflate and deserialize a blob written by pack() with the same configuration.
pub fn unpack(blob: &[u8], config: &ProtocolConfig) -> Result<CompressedObject> {
    config.validate()?;
    let bits = frame::open(blob, config)?;
    deserialize::deserialize(&bits, config)
}
