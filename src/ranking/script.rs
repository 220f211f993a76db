//! A predictor driven by a fixed table from context to candidates, for tests.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::context_window::ContextWindow;
use super::predictor::{Candidates, Predictor};

#[derive(Default)]
pub(crate) struct ScriptedPredictor {
    window: ContextWindow,
    table: FxHashMap<String, Candidates>,
    /// predict() on this context returns an error instead of candidates.
    failing: Option<String>,
    /// Every context predict() was called with, in order.
    pub(crate) calls: Vec<String>,
}

impl ScriptedPredictor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, context: &str, candidates: &[(&str, f64)]) -> Self {
        self.table.insert(
            context.to_string(),
            candidates.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
        );
        self
    }

    pub(crate) fn failing_on(mut self, context: &str) -> Self {
        self.failing = Some(context.to_string());
        self
    }
}

impl Predictor for ScriptedPredictor {
    fn reset(&mut self, context: &[String], window_length: usize) -> Result<()> {
        self.window.reset(context, window_length)
    }

    fn advance(&mut self, word: &str) -> Result<()> {
        self.window.advance(word);
        Ok(())
    }

    fn predict(&mut self) -> Result<Candidates> {
        let context = self.window.text();
        if self.failing.as_deref() == Some(context.as_str()) {
            return Err(Error::Predictor(format!("no prediction for {:?}", context)));
        }
        let candidates = self.table.get(&context).cloned().unwrap_or_default();
        self.calls.push(context);
        Ok(candidates)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
