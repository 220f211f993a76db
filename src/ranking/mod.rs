//! The ranking module is the rank encoder/decoder of rankzip.
//!
//! Encoding walks the input words. For each word after the first W it asks the predictor for its
//! candidates, sorts them by descending score, and stores the word's position in that list (or
//! the word itself when the predictor did not offer it). Then it feeds the word to the predictor.
//!
//! Decoding replays the same predictor calls from the same initial context, so it turns each
//! rank back into the word the encoder saw. Nothing about the predictor is stored: a decoder
//! with a different predictor or a different W or N silently reads different words.
//!
pub mod context_window;
pub mod decoder;
pub mod encoder;
pub mod predictor;
pub mod rank;
pub mod window_predictor;

#[cfg(test)]
pub(crate) mod script;
