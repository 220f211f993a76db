//! BitReader: reads a packed, most-significant-bit-first bitstream.
//!
//! The reader works over a byte slice that is already in memory (the output of the inflate
//! pass). Every read is bounds checked: asking for more bits than remain returns None and
//! leaves the reader where it was.
//!

const BIT_MASK: u8 = 0xff;

/// Reads a packed bitstream.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// True if every unread bit is a 1. Also true when nothing is left.
    pub fn rest_is_ones(&self) -> bool {
        if self.cursor >= self.buffer.len() {
            return true;
        }
        let partial = BIT_MASK >> self.bit_index;
        self.buffer[self.cursor] & partial == partial
            && self.buffer[self.cursor + 1..].iter().all(|&b| b == BIT_MASK)
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (at most 32), or None if fewer than n bits are
    /// left. A zero width read returns Some(0).
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        /*
        Read as many bits as possible for each step. First drain the partial byte we are in
        the middle of, then take whole bytes, then the top bits of one last byte.
        */
        if n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;

        // Test if we have a partial byte of data. If we do, read from it.
        if self.bit_index > 0 && n > 0 {
            let needed = n.min(8 - self.bit_index);
            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
            }
            self.bit_index %= 8;
            n -= needed;
        }
        // Now we are byte aligned (or done). Get as many full bytes as we need.
        while n >= 8 {
            result = result << 8 | self.buffer[self.cursor] as usize;
            self.cursor += 1;
            n -= 8;
        }
        // If we still need a partial byte, get whatever bits we still need.
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index = n;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns an Option<Vec<u8>> of n bytes, or None if fewer than n bytes are left.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        if n.checked_mul(8)? > self.remaining() {
            return None;
        }
        if self.bit_index == 0 {
            let out = self.buffer[self.cursor..self.cursor + n].to_vec();
            self.cursor += n;
            return Some(out);
        }
        (0..n).map(|_| self.byte()).collect()
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
