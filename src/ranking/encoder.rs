use log::{debug, error, trace};

use crate::codec::compressed::{CompressedObject, WordEntry};
use crate::codec::config::ProtocolConfig;
use crate::error::{Error, Result};

use super::predictor::Predictor;
use super::rank::Ranking;

/// Replace every word after the first W with its rank in the predictor's candidates, or keep
/// it literally when the predictor did not offer it.
///
/// The predictor is reset to the first W words and then fed each word in turn, so its state
/// is changed by this call.
pub fn encode<P: Predictor + ?Sized>(
    text: &str,
    predictor: &mut P,
    config: &ProtocolConfig,
) -> Result<CompressedObject> {
    config.validate()?;
    let window = config.context_window_length;
    let limit = config.next_word_possibilities_number;

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= window {
        error!(
            "Input has {} words, need more than {} to encode.",
            words.len(),
            window
        );
        return Err(Error::InsufficientInput {
            words: words.len(),
            window,
        });
    }

    let initial_context: Vec<String> = words[..window].iter().map(|w| w.to_string()).collect();
    predictor.reset(&initial_context, window)?;
    debug!(
        "Encoding {} words with {} (W={}, N={})",
        words.len() - window,
        predictor.name(),
        window,
        limit
    );

    let mut entries = Vec::with_capacity(words.len() - window);
    for &word in &words[window..] {
        let ranking = Ranking::from_candidates(predictor.predict()?, limit);
        let entry = match ranking.rank_of(word) {
            Some(rank) => WordEntry::Ranked { rank },
            None => WordEntry::OutOfVocabulary {
                word: word.to_string(),
            },
        };
        trace!("{:?} -> {:?}", word, entry);
        entries.push(entry);
        predictor.advance(word)?;
    }

    let object = CompressedObject {
        initial_context,
        words: entries,
    };
    debug!(
        "Encoded {} ranked and {} out of vocabulary words",
        object.ranked_count(),
        object.out_of_vocabulary_count()
    );
    Ok(object)
}

#[cfg(test)]
mod test {
    use super::encode;
    use crate::codec::compressed::WordEntry;
    use crate::codec::config::ProtocolConfig;
    use crate::error::Error;
    use crate::ranking::script::ScriptedPredictor;

    #[test]
    fn quick_brown_fox_test() {
        let config = ProtocolConfig::new(2, 2, 256, 1024).unwrap();
        let mut predictor = ScriptedPredictor::new()
            .on("the quick", &[("brown", 0.9), ("slow", 0.1)])
            .on("quick brown", &[("fox", 0.7), ("dog", 0.3)]);
        let obj = encode("the quick brown fox", &mut predictor, &config).unwrap();
        assert_eq!(obj.initial_context, vec!["the", "quick"]);
        assert_eq!(obj.context_text(), "the quick");
        assert_eq!(
            obj.words,
            vec![WordEntry::Ranked { rank: 0 }, WordEntry::Ranked { rank: 0 }]
        );
        assert_eq!(predictor.calls, vec!["the quick", "quick brown"]);
    }

    #[test]
    fn lower_ranked_word_test() {
        let config = ProtocolConfig::new(1, 4, 256, 1024).unwrap();
        let mut predictor =
            ScriptedPredictor::new().on("a", &[("x", 0.1), ("b", 0.3), ("y", 0.5)]);
        let obj = encode("a b", &mut predictor, &config).unwrap();
        assert_eq!(obj.words, vec![WordEntry::Ranked { rank: 1 }]);
    }

    #[test]
    fn missing_word_is_out_of_vocabulary_test() {
        let config = ProtocolConfig::new(1, 4, 256, 1024).unwrap();
        let mut predictor = ScriptedPredictor::new().on("a", &[("x", 0.9)]);
        let obj = encode("a b c", &mut predictor, &config).unwrap();
        assert_eq!(
            obj.words,
            vec![
                WordEntry::OutOfVocabulary { word: "b".to_string() },
                WordEntry::OutOfVocabulary { word: "c".to_string() },
            ]
        );
    }

    #[test]
    fn word_below_the_top_n_is_out_of_vocabulary_test() {
        let config = ProtocolConfig::new(1, 2, 256, 1024).unwrap();
        let mut predictor =
            ScriptedPredictor::new().on("a", &[("x", 0.9), ("y", 0.5), ("b", 0.1)]);
        let obj = encode("a b", &mut predictor, &config).unwrap();
        assert!(obj.words[0].is_out_of_vocabulary());
    }

    #[test]
    fn insufficient_input_test() {
        let config = ProtocolConfig::new(3, 2, 256, 1024).unwrap();
        let mut predictor = ScriptedPredictor::new();
        assert!(matches!(
            encode("only three words", &mut predictor, &config),
            Err(Error::InsufficientInput { words: 3, window: 3 })
        ));
        assert!(predictor.calls.is_empty());
    }

    #[test]
    fn predictor_failure_propagates_test() {
        let config = ProtocolConfig::new(2, 2, 256, 1024).unwrap();
        let mut predictor = ScriptedPredictor::new()
            .on("the quick", &[("brown", 0.9)])
            .failing_on("quick brown");
        assert!(matches!(
            encode("the quick brown fox jumps", &mut predictor, &config),
            Err(Error::Predictor(_))
        ));
        assert_eq!(predictor.calls, vec!["the quick"]);
    }

    #[test]
    fn ranks_stay_below_n_test() {
        let config = ProtocolConfig::new(1, 4, 256, 1024).unwrap();
        let mut predictor = ScriptedPredictor::new();
        for w in ["a", "b", "c", "d", "e", "f"] {
            predictor = predictor.on(
                w,
                &[("a", 0.1), ("b", 0.2), ("c", 0.3), ("d", 0.4), ("e", 0.5), ("f", 0.6)],
            );
        }
        let obj = encode("f e d c b a f a", &mut predictor, &config).unwrap();
        for entry in &obj.words {
            if let WordEntry::Ranked { rank } = entry {
                assert!(*rank < 4);
            }
        }
        assert_eq!(obj.out_of_vocabulary_count(), 3);
    }
}
