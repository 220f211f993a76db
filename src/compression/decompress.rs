use log::info;

use crate::error::Result;
use crate::tools::cli::RkOpts;

use super::protocol::Protocol;
use super::{build_predictor, read_input, write_output};

/// Decompress the input specified in opts (RkOpts). `notes.txt.rkz` becomes `notes.txt`; a name
/// without the extension gets `.out` appended.
pub fn decompress(opts: &RkOpts) -> Result<String> {
    let blob = read_input(opts)?;

    let predictor = build_predictor(opts)?;
    let mut protocol = Protocol::with_options(predictor, opts.config, opts.options)?;
    let text = protocol.decompress(&blob)?;

    let out_name = opts.file.as_ref().map(|f| match f.strip_suffix(".rkz") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", f),
    });
    write_output(opts, out_name, text.as_bytes())?;
    info!("Restored {} words.", text.split_whitespace().count());
    Ok(text)
}
