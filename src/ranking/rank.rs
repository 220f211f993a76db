use super::predictor::Candidates;

/// Candidate words in rank order: descending score, equal scores kept in the order the
/// predictor returned them. Encoder and decoder both build their rankings here.
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking {
    words: Vec<String>,
}

impl Ranking {
    /// Sorts (stably) and keeps the best `limit` candidates.
    pub fn from_candidates(mut candidates: Candidates, limit: usize) -> Self {
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.truncate(limit);
        Self {
            words: candidates.into_iter().map(|(word, _)| word).collect(),
        }
    }

    /// Position of the first occurrence of word, if it was offered.
    pub fn rank_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn word_at(&self, rank: usize) -> Option<&str> {
        self.words.get(rank).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
