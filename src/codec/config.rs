use crate::error::{Error, Result};

/// Widest fixed-width field the bitstream will read or write.
pub const MAX_FIELD_BITS: u8 = 32;

/// Protocol parameters. All four must be identical between compression and decompression of
/// the same blob, since the decoder replays the encoder's predictor calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// W: number of words in the initial context, and the predictor's window length.
    pub context_window_length: usize,
    /// N: how many ranked candidates the predictor is asked for. A power of two.
    pub next_word_possibilities_number: usize,
    /// V: ceiling on the bit size of an out of vocabulary literal. A power of two.
    pub out_of_vocabulary_word_max_bit_size: usize,
    /// C: ceiling on the bit size of the initial context. A power of two.
    pub initial_context_max_bit_size: usize,
}

impl ProtocolConfig {
    pub fn new(
        context_window_length: usize,
        next_word_possibilities_number: usize,
        out_of_vocabulary_word_max_bit_size: usize,
        initial_context_max_bit_size: usize,
    ) -> Result<Self> {
        let config = Self {
            context_window_length,
            next_word_possibilities_number,
            out_of_vocabulary_word_max_bit_size,
            initial_context_max_bit_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter can be expressed in the fixed-width bit layout.
    pub fn validate(&self) -> Result<()> {
        if u32::try_from(self.context_window_length).is_err() {
            return Err(Error::Configuration(format!(
                "context window length {} does not fit in 32 bits",
                self.context_window_length
            )));
        }
        field_width("next word possibilities number", self.next_word_possibilities_number, 0)?;
        field_width(
            "out of vocabulary word max bit size",
            self.out_of_vocabulary_word_max_bit_size,
            1,
        )?;
        field_width("initial context max bit size", self.initial_context_max_bit_size, 1)?;
        Ok(())
    }

    /// Width in bits of a rank field, log2(N).
    pub fn rank_bits(&self) -> u8 {
        self.next_word_possibilities_number.trailing_zeros() as u8
    }

    /// Width in bits of a literal's length prefix, log2(V).
    pub fn word_length_bits(&self) -> u8 {
        self.out_of_vocabulary_word_max_bit_size.trailing_zeros() as u8
    }

    /// Width in bits of the context's length prefix, log2(C).
    pub fn context_length_bits(&self) -> u8 {
        self.initial_context_max_bit_size.trailing_zeros() as u8
    }

    /// Rebuilds a configuration from its stored form (window length and the three field
    /// widths).
    pub fn from_widths(
        context_window_length: u32,
        rank_bits: u8,
        word_length_bits: u8,
        context_length_bits: u8,
    ) -> Result<Self> {
        let pow = |bits: u8| -> Result<usize> {
            if bits > MAX_FIELD_BITS {
                return Err(Error::Configuration(format!("field width {} is too wide", bits)));
            }
            Ok(1_usize << bits)
        };
        Self::new(
            context_window_length as usize,
            pow(rank_bits)?,
            pow(word_length_bits)?,
            pow(context_length_bits)?,
        )
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            context_window_length: 16,
            next_word_possibilities_number: 16,
            out_of_vocabulary_word_max_bit_size: 256,
            initial_context_max_bit_size: 4096,
        }
    }
}

/// log2 of a power of two, checked against the widest field we can pack.
fn field_width(name: &str, value: usize, min_bits: u8) -> Result<u8> {
    if !value.is_power_of_two() {
        return Err(Error::Configuration(format!(
            "{} must be a power of two, got {}",
            name, value
        )));
    }
    let bits = value.trailing_zeros() as u8;
    if bits < min_bits || bits > MAX_FIELD_BITS {
        return Err(Error::Configuration(format!(
            "{} needs a field width between {} and {} bits, got {}",
            name, min_bits, MAX_FIELD_BITS, bits
        )));
    }
    Ok(bits)
}

/// Options that shape the output but need not match between the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Deflate level, 0-9.
    pub level: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self { level: 6 }
    }
}
