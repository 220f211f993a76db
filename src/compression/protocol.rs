use log::info;

use crate::codec::config::{CodecOptions, ProtocolConfig};
use crate::codec::{pack, unpack};
use crate::error::Result;
use crate::ranking::decoder::decode;
use crate::ranking::encoder::encode;
use crate::ranking::predictor::Predictor;

/// Sizes and counts from one compress() call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompressionReport {
    pub input_bytes: usize,
    pub words: usize,
    pub ranked: usize,
    pub out_of_vocabulary: usize,
    pub output_bytes: usize,
}

impl CompressionReport {
    /// Output size over input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }
}

/// A predictor bound to one configuration: text in, blob out, and back.
///
/// Each call resets the predictor, so one Protocol can handle any number of documents one
/// after another. Separate documents can be handled in parallel with separate Protocols.
pub struct Protocol<P> {
    predictor: P,
    config: ProtocolConfig,
    options: CodecOptions,
}

impl<P: Predictor> Protocol<P> {
    pub fn new(predictor: P, config: ProtocolConfig) -> Result<Self> {
        Self::with_options(predictor, config, CodecOptions::default())
    }

    pub fn with_options(predictor: P, config: ProtocolConfig, options: CodecOptions) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            predictor,
            config,
            options,
        })
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn into_predictor(self) -> P {
        self.predictor
    }

    pub fn compress(&mut self, text: &str) -> Result<Vec<u8>> {
        self.compress_with_report(text).map(|(blob, _)| blob)
    }

    pub fn compress_with_report(&mut self, text: &str) -> Result<(Vec<u8>, CompressionReport)> {
        let object = encode(text, &mut self.predictor, &self.config)?;
        let blob = pack(&object, &self.config, &self.options)?;
        let report = CompressionReport {
            input_bytes: text.len(),
            words: object.initial_context.len() + object.words.len(),
            ranked: object.ranked_count(),
            out_of_vocabulary: object.out_of_vocabulary_count(),
            output_bytes: blob.len(),
        };
        info!(
            "Compressed {} words ({} ranked, {} out of vocabulary): {} -> {} bytes, ratio {:.3}",
            report.words,
            report.ranked,
            report.out_of_vocabulary,
            report.input_bytes,
            report.output_bytes,
            report.ratio()
        );
        Ok((blob, report))
    }

    /// Fails with PredictorMismatch if the blob was written with another configuration.
    pub fn decompress(&mut self, blob: &[u8]) -> Result<String> {
        let object = unpack(blob, &self.config)?;
        let text = decode(&object, &mut self.predictor, &self.config)?;
        info!("Decompressed {} bytes into {} bytes", blob.len(), text.len());
        Ok(text)
    }
}
