use rankzip::bitstream::bitreader::BitReader;
use rankzip::codec::serialize::serialize;
use rankzip::codec::{pack, unpack};
use rankzip::ranking::decoder::decode;
use rankzip::ranking::encoder::encode;
use rankzip::{
    Candidates, CodecOptions, CompressedObject, Error, Predictor, Protocol, ProtocolConfig,
    Result, WordEntry,
};

const VOCAB: [&str; 12] = [
    "the", "a", "cat", "dog", "sat", "ran", "on", "under", "mat", "table", "and", "then",
];

/// Scores a fixed vocabulary with arithmetic on the context, so equal contexts always give
/// equal candidates and some scores tie.
struct ArithmeticPredictor {
    window: Vec<String>,
    capacity: usize,
    limit: usize,
}

impl ArithmeticPredictor {
    fn new(limit: usize) -> Self {
        Self {
            window: Vec::new(),
            capacity: 0,
            limit,
        }
    }
}

fn byte_sum(s: &str) -> u64 {
    s.bytes().map(u64::from).sum()
}

impl Predictor for ArithmeticPredictor {
    fn reset(&mut self, context: &[String], window_length: usize) -> Result<()> {
        if context.len() > window_length {
            return Err(Error::ContextOverflow {
                len: context.len(),
                window: window_length,
            });
        }
        self.window = context.to_vec();
        self.capacity = window_length;
        Ok(())
    }

    fn advance(&mut self, word: &str) -> Result<()> {
        assert!(self.window.len() <= self.capacity);
        self.window.push(word.to_string());
        if self.window.len() > self.capacity {
            self.window.remove(0);
        }
        Ok(())
    }

    fn predict(&mut self) -> Result<Candidates> {
        let seed: u64 = self.window.iter().map(|w| byte_sum(w)).sum();
        Ok(VOCAB
            .iter()
            .take(self.limit)
            .map(|w| (w.to_string(), ((seed * 31 + byte_sum(w)) % 7) as f64))
            .collect())
    }
}

/// Never offers the word that actually comes next.
struct WrongPredictor;

impl Predictor for WrongPredictor {
    fn reset(&mut self, _context: &[String], _window_length: usize) -> Result<()> {
        Ok(())
    }

    fn advance(&mut self, _word: &str) -> Result<()> {
        Ok(())
    }

    fn predict(&mut self) -> Result<Candidates> {
        Ok(vec![("\u{2603}".to_string(), 1.0), ("\u{2604}".to_string(), 0.5)])
    }
}

const TEXTS: [&str; 4] = [
    "the cat sat on the mat and then the dog sat on the table",
    "a dog ran under the table then a cat ran under the mat",
    "the zebra sat on a mat and then ate the whole mat",
    "naïve café owners ran the cat and the dog under the table",
];

#[test]
fn round_trip_with_deterministic_predictor() {
    for (w, n) in [(1, 2), (2, 4), (3, 8), (4, 16), (0, 1)] {
        let config = ProtocolConfig::new(w, n, 256, 1024).unwrap();
        for text in TEXTS {
            let mut protocol = Protocol::new(ArithmeticPredictor::new(n), config).unwrap();
            let blob = protocol.compress(text).unwrap();
            assert_eq!(protocol.decompress(&blob).unwrap(), text, "W={} N={}", w, n);
        }
    }
}

#[test]
fn ranks_are_bounded_by_n() {
    let config = ProtocolConfig::new(2, 4, 256, 1024).unwrap();
    // Offers all twelve words, more than N.
    let mut predictor = ArithmeticPredictor::new(12);
    for text in TEXTS {
        let obj = encode(text, &mut predictor, &config).unwrap();
        for entry in &obj.words {
            if let WordEntry::Ranked { rank } = entry {
                assert!(*rank < 4);
            }
        }
        assert_eq!(decode(&obj, &mut predictor, &config).unwrap(), text);
    }
}

#[test]
fn every_word_out_of_vocabulary_when_predictor_is_wrong() {
    let config = ProtocolConfig::new(2, 2, 256, 1024).unwrap();
    let text = TEXTS[0];
    let obj = encode(text, &mut WrongPredictor, &config).unwrap();
    assert_eq!(obj.words.len(), text.split_whitespace().count() - 2);
    assert!(obj.words.iter().all(WordEntry::is_out_of_vocabulary));

    let blob = pack(&obj, &config, &CodecOptions::default()).unwrap();
    let back = unpack(&blob, &config).unwrap();
    assert_eq!(decode(&back, &mut WrongPredictor, &config).unwrap(), text);
}

#[test]
fn record_widths_and_alignment() {
    // C = 256 -> 8 bit prefix, so records start on a byte boundary after "ab".
    let config = ProtocolConfig::new(1, 8, 64, 256).unwrap();
    let obj = CompressedObject {
        initial_context: vec!["ab".to_string()],
        words: vec![
            WordEntry::Ranked { rank: 6 },
            WordEntry::OutOfVocabulary { word: "é".to_string() },
        ],
    };
    let bits = serialize(&obj, &config).unwrap();
    // 8 + 16 + (1 + 3) + (1 + 6 + 16) = 51 bits -> 7 bytes
    assert_eq!(bits.len(), 7);

    let mut br = BitReader::new(&bits);
    assert_eq!(br.bint(8), Some(16));
    assert_eq!(br.bytes(2), Some(b"ab".to_vec()));
    assert_eq!(br.bool_bit(), Some(false));
    assert_eq!(br.bint(3), Some(6));
    assert_eq!(br.bool_bit(), Some(true));
    assert_eq!(br.bint(6), Some(16));
    assert_eq!(br.bytes(2), Some("é".as_bytes().to_vec()));
    assert_eq!(br.remaining(), 5);
    assert!(br.rest_is_ones());
}

#[test]
fn quick_brown_fox_scenario() {
    struct Fox {
        window: Vec<String>,
    }
    impl Predictor for Fox {
        fn reset(&mut self, context: &[String], _window_length: usize) -> Result<()> {
            self.window = context.to_vec();
            Ok(())
        }
        fn advance(&mut self, word: &str) -> Result<()> {
            self.window.push(word.to_string());
            self.window.remove(0);
            Ok(())
        }
        fn predict(&mut self) -> Result<Candidates> {
            let pairs: &[(&str, f64)] = match self.window.join(" ").as_str() {
                "the quick" => &[("brown", 0.9), ("slow", 0.1)],
                "quick brown" => &[("fox", 0.7), ("dog", 0.3)],
                _ => &[],
            };
            Ok(pairs.iter().map(|(w, s)| (w.to_string(), *s)).collect())
        }
    }

    let config = ProtocolConfig::new(2, 2, 256, 1024).unwrap();
    let mut fox = Fox { window: Vec::new() };
    let obj = encode("the quick brown fox", &mut fox, &config).unwrap();
    assert_eq!(obj.context_text(), "the quick");
    assert_eq!(
        obj.words,
        vec![WordEntry::Ranked { rank: 0 }, WordEntry::Ranked { rank: 0 }]
    );

    let blob = pack(&obj, &config, &CodecOptions::default()).unwrap();
    let back = unpack(&blob, &config).unwrap();
    assert_eq!(back, obj);
    assert_eq!(decode(&back, &mut fox, &config).unwrap(), "the quick brown fox");
}

#[test]
fn truncated_blob_is_corrupt() {
    let config = ProtocolConfig::new(3, 8, 256, 1024).unwrap();
    for text in TEXTS {
        let mut protocol = Protocol::new(ArithmeticPredictor::new(8), config).unwrap();
        let blob = protocol.compress(text).unwrap();
        assert!(matches!(
            protocol.decompress(&blob[..blob.len() - 1]),
            Err(Error::CorruptStream(_))
        ));
    }
}

#[test]
fn short_input_is_rejected() {
    let config = ProtocolConfig::new(4, 8, 256, 1024).unwrap();
    let mut protocol = Protocol::new(ArithmeticPredictor::new(8), config).unwrap();
    assert!(matches!(
        protocol.compress("one two three four"),
        Err(Error::InsufficientInput { words: 4, window: 4 })
    ));
    assert!(matches!(
        protocol.compress(""),
        Err(Error::InsufficientInput { words: 0, .. })
    ));
}

#[test]
fn boxed_predictor() {
    let config = ProtocolConfig::new(2, 4, 256, 1024).unwrap();
    let predictor: Box<dyn Predictor> = Box::new(ArithmeticPredictor::new(4));
    let mut protocol = Protocol::new(predictor, config).unwrap();
    let blob = protocol.compress(TEXTS[1]).unwrap();
    assert_eq!(protocol.decompress(&blob).unwrap(), TEXTS[1]);
}

#[test]
fn long_literal_overflows_word_field() {
    let config = ProtocolConfig::new(1, 2, 64, 1024).unwrap();
    let mut protocol = Protocol::new(WrongPredictor, config).unwrap();
    // 8 bytes = 64 bits, one more than a 6 bit field holds.
    assert!(matches!(
        protocol.compress("start abcdefgh"),
        Err(Error::FieldOverflow { bits: 64, max: 63, .. })
    ));
}
