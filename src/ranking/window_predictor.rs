//! A deterministic predictor that needs no model: it guesses that the next word is one it has
//! seen recently.
//!
//! Each distinct word in the context window scores its number of occurrences plus a recency
//! bonus below one, so frequency decides first and the latest occurrence breaks ties. Words from
//! an optional seed vocabulary follow with a score of zero, in vocabulary order. It compresses
//! repetitive text well and gives the binary something to drive the codec with when no language
//! model is plugged in.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;

use super::context_window::ContextWindow;
use super::predictor::{Candidates, Predictor};

pub struct WindowPredictor {
    window: ContextWindow,
    vocabulary: Vec<String>,
    /// Most candidates returned by one predict() call.
    limit: usize,
}

impl WindowPredictor {
    pub fn new(limit: usize) -> Self {
        Self::with_vocabulary(Vec::new(), limit)
    }

    /// Duplicate vocabulary words are dropped, keeping the first.
    pub fn with_vocabulary(vocabulary: Vec<String>, limit: usize) -> Self {
        let mut seen = FxHashSet::default();
        let vocabulary = vocabulary
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();
        Self {
            window: ContextWindow::new(0),
            vocabulary,
            limit,
        }
    }

    pub fn window(&self) -> &ContextWindow {
        &self.window
    }
}

impl Predictor for WindowPredictor {
    fn reset(&mut self, context: &[String], window_length: usize) -> Result<()> {
        self.window.reset(context, window_length)
    }

    fn advance(&mut self, word: &str) -> Result<()> {
        self.window.advance(word);
        Ok(())
    }

    fn predict(&mut self) -> Result<Candidates> {
        let len = self.window.len() as f64;
        let mut order: Vec<&str> = Vec::new();
        let mut scores: FxHashMap<&str, f64> = FxHashMap::default();
        for (pos, word) in self.window.iter().enumerate() {
            let recency = (pos + 1) as f64 / (len + 1.0);
            let score = scores.entry(word).or_insert_with(|| {
                order.push(word);
                0.0
            });
            *score = score.trunc() + 1.0 + recency;
        }

        let mut candidates: Candidates = order
            .iter()
            .map(|&w| (w.to_string(), scores[w]))
            .collect();
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.extend(
            self.vocabulary
                .iter()
                .filter(|w| !scores.contains_key(w.as_str()))
                .map(|w| (w.clone(), 0.0)),
        );
        candidates.truncate(self.limit);
        Ok(candidates)
    }

    fn name(&self) -> &str {
        "window"
    }
}
