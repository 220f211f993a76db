use std::collections::VecDeque;

use crate::error::{Error, Result};

/// The predictor's state: the most recent words, oldest first, never more than `capacity`.
///
/// Encoding and decoding only agree if both sides drive this through exactly the same
/// transitions, so it is kept as a small explicit state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextWindow {
    words: VecDeque<String>,
    capacity: usize,
}

impl ContextWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            words: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Replaces the contents and the capacity. Fails if the context is longer than the window.
    pub fn reset(&mut self, context: &[String], capacity: usize) -> Result<()> {
        if context.len() > capacity {
            return Err(Error::ContextOverflow {
                len: context.len(),
                window: capacity,
            });
        }
        self.capacity = capacity;
        self.words.clear();
        self.words.extend(context.iter().cloned());
        Ok(())
    }

    /// Appends a word, evicting and returning the oldest one if the window overflows.
    pub fn advance(&mut self, word: &str) -> Option<String> {
        debug_assert!(self.words.len() <= self.capacity);
        self.words.push_back(word.to_string());
        if self.words.len() > self.capacity {
            self.words.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.words.len() == self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn text(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}
