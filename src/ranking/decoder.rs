use log::{debug, error, trace};

use crate::codec::compressed::{CompressedObject, WordEntry};
use crate::codec::config::ProtocolConfig;
use crate::error::{Error, Result};

use super::predictor::Predictor;
use super::rank::Ranking;

/// Rebuild the text from a compressed object by replaying the predictor exactly as encode()
/// drove it. Only correct with the configuration and a predictor identical to the encoder's.
pub fn decode<P: Predictor + ?Sized>(
    object: &CompressedObject,
    predictor: &mut P,
    config: &ProtocolConfig,
) -> Result<String> {
    config.validate()?;
    let window = config.context_window_length;
    let limit = config.next_word_possibilities_number;

    if object.initial_context.len() != window {
        error!(
            "Initial context has {} words, the window is {}.",
            object.initial_context.len(),
            window
        );
        return Err(Error::PredictorMismatch(format!(
            "initial context has {} words, decoder window is {}",
            object.initial_context.len(),
            window
        )));
    }

    predictor.reset(&object.initial_context, window)?;
    debug!(
        "Decoding {} words with {} (W={}, N={})",
        object.words.len(),
        predictor.name(),
        window,
        limit
    );

    let mut words = object.initial_context.clone();
    words.reserve(object.words.len());
    for (i, entry) in object.words.iter().enumerate() {
        let word = match entry {
            WordEntry::OutOfVocabulary { word } => word.clone(),
            WordEntry::Ranked { rank } => {
                let ranking = Ranking::from_candidates(predictor.predict()?, limit);
                match ranking.word_at(*rank) {
                    Some(word) => word.to_string(),
                    None => {
                        return Err(Error::CorruptStream(format!(
                            "rank {} of word {} is beyond the {} candidates offered",
                            rank,
                            i,
                            ranking.len()
                        )))
                    }
                }
            }
        };
        trace!("{:?} -> {:?}", entry, word);
        predictor.advance(&word)?;
        words.push(word);
    }

    Ok(words.join(" "))
}
