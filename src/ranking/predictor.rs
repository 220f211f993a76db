use crate::error::Result;

/// Candidate next words with their scores, in the order the predictor produced them.
pub type Candidates = Vec<(String, f64)>;

/// The only thing the codec needs from a language model.
///
/// Round trips depend entirely on `predict` being deterministic: the same context must give
/// the same candidates, the same scores, and equal scores in the same order, every time.
pub trait Predictor {
    /// Replaces the context. Fails if `context` holds more than `window_length` words.
    fn reset(&mut self, context: &[String], window_length: usize) -> Result<()>;

    /// Appends one word, evicting the oldest if the window is full.
    fn advance(&mut self, word: &str) -> Result<()>;

    /// Up to N candidates for the next word given the current context.
    fn predict(&mut self) -> Result<Candidates>;

    fn name(&self) -> &str {
        "predictor"
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn reset(&mut self, context: &[String], window_length: usize) -> Result<()> {
        (**self).reset(context, window_length)
    }

    fn advance(&mut self, word: &str) -> Result<()> {
        (**self).advance(word)
    }

    fn predict(&mut self) -> Result<Candidates> {
        (**self).predict()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
