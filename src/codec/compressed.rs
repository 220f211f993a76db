/// One input word after the rank pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordEntry {
    /// The predictor did not offer the word, so it is stored literally.
    OutOfVocabulary { word: String },
    /// Zero based position of the word in the predictor's ranking.
    Ranked { rank: usize },
}

impl WordEntry {
    pub fn is_out_of_vocabulary(&self) -> bool {
        matches!(self, WordEntry::OutOfVocabulary { .. })
    }
}

/// The bridge between the rank encoder and the bit-packed codec. It holds no predictor state:
/// the decoder rebuilds that by replaying the predictor from `initial_context`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressedObject {
    /// The first W words, stored verbatim.
    pub initial_context: Vec<String>,
    pub words: Vec<WordEntry>,
}

impl CompressedObject {
    /// The initial context as it is written to the stream: words joined by single spaces.
    pub fn context_text(&self) -> String {
        self.initial_context.join(" ")
    }

    pub fn ranked_count(&self) -> usize {
        self.words.iter().filter(|w| !w.is_out_of_vocabulary()).count()
    }

    pub fn out_of_vocabulary_count(&self) -> usize {
        self.words.len() - self.ranked_count()
    }
}
