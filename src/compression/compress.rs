use log::{error, info};

use crate::error::{Error, Result};
use crate::tools::cli::RkOpts;

use super::protocol::{CompressionReport, Protocol};
use super::{build_predictor, read_input, write_output};

/// Compress the input defined in opts <RkOpts> into `<file>.rkz` (or stdout).
pub fn compress(opts: &RkOpts) -> Result<CompressionReport> {
    let input = read_input(opts)?;
    let text = String::from_utf8(input).map_err(|e| {
        error!("Fatal error: input is not UTF-8 text.");
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    let predictor = build_predictor(opts)?;
    let mut protocol = Protocol::with_options(predictor, opts.config, opts.options)?;
    let (blob, report) = protocol.compress_with_report(&text)?;

    let out_name = opts.file.as_ref().map(|f| format!("{}.rkz", f));
    write_output(opts, out_name, &blob)?;
    info!(
        "Wrote {} bytes ({:.1}% of the input).",
        report.output_bytes,
        report.ratio() * 100.0
    );
    Ok(report)
}
