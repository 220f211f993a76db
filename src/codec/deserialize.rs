use log::{debug, trace};

use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};

use super::compressed::{CompressedObject, WordEntry};
use super::config::ProtocolConfig;

/// Unpack a bitstream written by serialize().
///
/// There is no record count in the stream. Parsing stops when nothing is left, or when fewer
/// than 8 bits are left and all of them are ones: that is the flush padding. A ranked record
/// always starts with a 0 bit and a literal record is longer than 8 bits, so neither can be
/// mistaken for padding. Any other short tail must be records, and a record that runs off the
/// end of the buffer means the stream is corrupt.
pub fn deserialize(bits: &[u8], config: &ProtocolConfig) -> Result<CompressedObject> {
    config.validate()?;
    let mut br = BitReader::new(bits);

    let context = read_length_prefixed(&mut br, "initial context", config.context_length_bits())?;
    let initial_context: Vec<String> = context.split_whitespace().map(String::from).collect();
    debug!(
        "Read initial context of {} words, bitstream at {}",
        initial_context.len(),
        br.loc()
    );

    let rank_bits = config.rank_bits() as usize;
    let mut words = Vec::new();
    loop {
        if br.remaining() < 8 && br.rest_is_ones() {
            trace!("{} padding bits at {}", br.remaining(), br.loc());
            break;
        }
        let entry = match br.bool_bit() {
            Some(true) => WordEntry::OutOfVocabulary {
                word: read_length_prefixed(
                    &mut br,
                    "out of vocabulary word",
                    config.word_length_bits(),
                )?,
            },
            Some(false) => WordEntry::Ranked {
                rank: br.bint(rank_bits).ok_or_else(|| truncated("rank", &br))?,
            },
            None => break,
        };
        trace!("Read {:?}, bitstream at {}", entry, br.loc());
        words.push(entry);
    }
    debug!("Unpacked {} words from {} bytes", words.len(), bits.len());

    Ok(CompressedObject {
        initial_context,
        words,
    })
}

/// Reads a `width` bit length field and then that many bits as UTF-8 text.
fn read_length_prefixed(br: &mut BitReader<'_>, field: &str, width: u8) -> Result<String> {
    let bits = br
        .bint(width as usize)
        .ok_or_else(|| truncated(field, br))?;
    if bits % 8 != 0 {
        return Err(Error::CorruptStream(format!(
            "{} length of {} bits is not a whole number of bytes at {}",
            field,
            bits,
            br.loc()
        )));
    }
    let bytes = br.bytes(bits / 8).ok_or_else(|| truncated(field, br))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::CorruptStream(format!("{} is not valid UTF-8: {}", field, e)))
}

fn truncated(field: &str, br: &BitReader<'_>) -> Error {
    Error::CorruptStream(format!(
        "{} runs past the end of the stream at {}",
        field,
        br.loc()
    ))
}
