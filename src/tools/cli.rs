use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

use crate::codec::config::{CodecOptions, ProtocolConfig};
use crate::error::Result;

/// Zip, Unzip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Everything the file drivers need to know, filled in from the command line.
#[derive(Debug)]
pub struct RkOpts {
    /// Name of file to read for input
    pub file: Option<String>,
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Protocol parameters, must match between compression and decompression
    pub config: ProtocolConfig,
    pub options: CodecOptions,
    /// Optional file of seed words for the built in predictor
    pub vocabulary: Option<String>,
}

impl RkOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Zip,
            output: Output::File,
            force_overwrite: false,
            keep_input_files: false,
            config: ProtocolConfig::default(),
            options: CodecOptions::default(),
            vocabulary: None,
        }
    }
}

impl Default for RkOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress text by storing each word's rank in a predictor's guesses",
    long_about = None
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,

    /// Context window length (W)
    #[clap(short = 'w', long = "window", default_value_t = 16)]
    window: usize,

    /// Number of ranked candidates asked of the predictor (N, a power of two)
    #[clap(short = 'n', long = "candidates", default_value_t = 16)]
    candidates: usize,

    /// Largest out of vocabulary word, in bits (V, a power of two)
    #[clap(long = "word-bits", default_value_t = 256)]
    word_bits: usize,

    /// Largest initial context, in bits (C, a power of two)
    #[clap(long = "context-bits", default_value_t = 4096)]
    context_bits: usize,

    /// Deflate level, 0-9
    #[clap(short = 'l', long = "level", default_value_t = 6)]
    level: u32,

    /// File of seed words for the built in predictor, most likely first
    #[clap(long = "vocab")]
    vocab: Option<String>,
}

impl Args {
    /// Put command line information from CLAP into our internal structure.
    pub fn into_opts(self) -> Result<RkOpts> {
        let mut opts = RkOpts::new();
        opts.file = self.filename;
        // Decompression wins if both are given.
        if self.decompress {
            opts.op_mode = Mode::Unzip
        } else if self.compress {
            opts.op_mode = Mode::Zip
        };
        opts.force_overwrite = self.force;
        opts.keep_input_files = self.keep;
        if self.stdout || opts.file.is_none() {
            opts.output = Output::Stdout
        };
        opts.config =
            ProtocolConfig::new(self.window, self.candidates, self.word_bits, self.context_bits)?;
        opts.options = CodecOptions {
            level: self.level.min(9),
        };
        opts.vocabulary = self.vocab;
        Ok(opts)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.v {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn rkopts_init() -> Result<RkOpts> {
    let args = Args::parse();
    log::set_max_level(args.log_level());
    let opts = args.into_opts()?;

    info!("---- rankzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Getting input from stdin"),
    }
    info!("Output goes to {}", opts.output);
    info!(
        "W={} N={} V={} C={}, deflate level {}",
        opts.config.context_window_length,
        opts.config.next_word_possibilities_number,
        opts.config.out_of_vocabulary_word_max_bit_size,
        opts.config.initial_context_max_bit_size,
        opts.options.level
    );
    if let Some(vocab) = &opts.vocabulary {
        info!("Seeding the predictor from {}", vocab)
    };
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- rankzip Initialization End ----\n");
    Ok(opts)
}
