//! The compression module ties the ranking and codec layers together.
//!
//! Compression happens in the following steps:
//! - Rank encoding: replace each word after the initial context with its rank in the predictor's
//!   candidates, or keep it literally.
//! - Bit packing: write the result as a dense bitstream padded to a whole byte.
//! - Deflate: squeeze out the redundancy the rank pass leaves, and frame the result.
//!
//! Decompression follows the inverse of the compression process, replaying the predictor from
//! the stored initial context.
//!
//! `protocol` holds the in-memory API. `compress` and `decompress` are the file drivers behind
//! the binary.
//!
pub mod compress;
pub mod decompress;
pub mod protocol;

use std::fs::{self, File};
use std::io::{self, Read, Write};

use log::{debug, error};

use crate::ranking::window_predictor::WindowPredictor;
use crate::tools::cli::{Output, RkOpts};

/// Build the predictor the binary uses, seeded from the vocabulary file if one was given.
pub(crate) fn build_predictor(opts: &RkOpts) -> io::Result<WindowPredictor> {
    let limit = opts.config.next_word_possibilities_number;
    match &opts.vocabulary {
        Some(path) => {
            let words: Vec<String> = fs::read_to_string(path)?
                .split_whitespace()
                .map(String::from)
                .collect();
            debug!("Read {} vocabulary words from {}", words.len(), path);
            Ok(WindowPredictor::with_vocabulary(words, limit))
        }
        None => Ok(WindowPredictor::new(limit)),
    }
}

/// Read the whole input, from the named file or stdin.
pub(crate) fn read_input(opts: &RkOpts) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match &opts.file {
        Some(fname) => {
            File::open(fname)?.read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Write the result to stdout or to `out_name`, then remove the input unless asked to keep it.
pub(crate) fn write_output(opts: &RkOpts, out_name: Option<String>, data: &[u8]) -> io::Result<()> {
    match (opts.output, out_name) {
        (Output::File, Some(fname)) => {
            if !opts.force_overwrite && fs::metadata(&fname).is_ok() {
                error!("Output file {} already exists.", fname);
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists, use --force to overwrite", fname),
                ));
            }
            File::create(&fname)?.write_all(data)?;
            debug!("Wrote {} bytes to {}", data.len(), fname);
            if !opts.keep_input_files {
                if let Some(input) = &opts.file {
                    fs::remove_file(input)?;
                    debug!("Removed {}", input);
                }
            }
        }
        _ => io::stdout().write_all(data)?,
    }
    Ok(())
}
