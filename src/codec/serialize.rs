use log::{debug, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::{Error, Result};

use super::compressed::{CompressedObject, WordEntry};
use super::config::ProtocolConfig;

/// Pack a compressed object into a byte aligned bitstream (before the deflate pass).
///
/// Layout:
/// - `log2(C)` bits: bit length of the UTF-8 initial context, then the context bytes.
/// - per word: a flag bit, then either `log2(N)` bits of rank (flag 0) or `log2(V)` bits of
///   literal bit length followed by the literal's UTF-8 bytes (flag 1).
/// - 0-7 one bits of padding.
pub fn serialize(object: &CompressedObject, config: &ProtocolConfig) -> Result<Vec<u8>> {
    config.validate()?;
    let context = object.context_text();
    let mut bp = BitPacker::new(context.len() + object.words.len() * 2 + 8);

    write_length_prefixed(
        &mut bp,
        "initial context",
        context.as_bytes(),
        config.context_length_bits(),
    )?;
    debug!("Wrote initial context, bitstream at {}", bp.loc());

    let rank_bits = config.rank_bits();
    for entry in &object.words {
        match entry {
            WordEntry::OutOfVocabulary { word } => {
                bp.out_bit(true);
                write_length_prefixed(
                    &mut bp,
                    "out of vocabulary word",
                    word.as_bytes(),
                    config.word_length_bits(),
                )?;
            }
            WordEntry::Ranked { rank } => {
                if *rank >= config.next_word_possibilities_number {
                    return Err(Error::FieldOverflow {
                        field: "rank",
                        bits: bit_length(*rank),
                        max: rank_bits as usize,
                    });
                }
                bp.out_bit(false);
                bp.out(rank_bits, *rank as u32);
            }
        }
        trace!("Wrote {:?}, bitstream at {}", entry, bp.loc());
    }

    let pad = bp.flush();
    debug!(
        "Packed {} words into {} bytes ({} padding bits)",
        object.words.len(),
        bp.output.len(),
        pad
    );
    Ok(bp.output)
}

/// Writes a `width` bit field holding the bit length of data, then data itself.
fn write_length_prefixed(bp: &mut BitPacker, field: &'static str, data: &[u8], width: u8) -> Result<()> {
    let bits = data.len() * 8;
    let max = (1_usize << width) - 1;
    if bits > max {
        return Err(Error::FieldOverflow { field, bits, max });
    }
    bp.out(width, bits as u32);
    bp.out_bytes(data);
    Ok(())
}

/// Minimum number of bits needed to write value.
fn bit_length(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()) as usize
}
