//! Rank based text compression.
//!
//! Provides lossless compression of text by leaning on a next-word predictor: every word the
//! predictor guesses is stored as its rank in the predictor's candidate list, which costs
//! `log2(N)` bits, and every word it misses is stored literally. The resulting bitstream is
//! then deflated.
//!
//! Any model can be plugged in by implementing [`ranking::predictor::Predictor`]. Decompression
//! replays the same predictor calls, so it must be given an identical predictor and the same
//! [`codec::config::ProtocolConfig`].
//!
//! Basic usage to compress a file with the built in window predictor is as follows:
//!
//! `$> rankzip -z notes.txt`
//!
//! This will compress the file and create the file notes.txt.rkz.
//! The original file will be deleted.
//!
pub mod bitstream;
pub mod codec;
pub mod compression;
pub mod error;
pub mod ranking;
pub mod tools;

pub use codec::compressed::{CompressedObject, WordEntry};
pub use codec::config::{CodecOptions, ProtocolConfig};
pub use compression::protocol::{CompressionReport, Protocol};
pub use error::{Error, Result};
pub use ranking::predictor::{Candidates, Predictor};
