//! Error kinds for the rank compression protocol.
//!
//! Every failure here is fatal. Nothing is retried: each one is either a programming error
//! (bad configuration, a predictor breaking its contract) or a data-integrity error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The text must hold strictly more words than the context window.
    #[error("Input has {words} words, needs more than the context window of {window}")]
    InsufficientInput { words: usize, window: usize },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A length-prefixed field does not fit in its fixed-width length field.
    #[error("{field} is {bits} bits long, the maximum is {max} bits")]
    FieldOverflow {
        field: &'static str,
        bits: usize,
        max: usize,
    },

    #[error("Corrupt stream: {0}")]
    CorruptStream(String),

    #[error("Predictor configuration mismatch: {0}")]
    PredictorMismatch(String),

    /// A predictor was handed more context than its window holds.
    #[error("Context of {len} words exceeds the window length of {window}")]
    ContextOverflow { len: usize, window: usize },

    #[error("Predictor failure: {0}")]
    Predictor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
