use log::error;

/// Creates a bitstream for output. Bits are packed most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Number of padding bits added by the last call to flush().
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to
    /// flush the bit queue to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the `depth` least significant bits of data (0-32 bits).
    pub fn out(&mut self, depth: u8, data: u32) {
        debug_assert!(depth <= 32, "field wider than 32 bits");
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data as u64) & (u64::MAX >> (64 - depth)); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Writes a single bit, 1 for true.
    pub fn out_bit(&mut self, bit: bool) {
        self.out(1, bit as u32);
    }

    /// Puts a run of bytes on the stream. The stream does not need to be byte aligned.
    pub fn out_bytes(&mut self, data: &[u8]) {
        if self.q_bits == 0 {
            self.output.extend_from_slice(data);
        } else {
            data.iter().for_each(|&byte| self.out(8, byte as u32));
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 1s in the least
    /// significant bits. Returns the number of padding bits added.
    pub fn flush(&mut self) -> u8 {
        self.last_bits = 0;
        if self.q_bits > 0 {
            let pad = 8 - self.q_bits;
            self.out(pad, u32::MAX);
            self.last_bits = pad;
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        self.last_bits
    }

    /// Number of bits written so far, including bits still waiting in the queue.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.bit_len() / 8, self.bit_len() % 8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn out_test() {
        let mut bw = BitPacker::new(100);
        bw.out(16, 0b00100001_00100000);
        bw.flush();
        assert_eq!(bw.output, "! ".as_bytes());
        assert_eq!(bw.last_bits, 0);
    }

    #[test]
    fn out_masks_high_bits_test() {
        let mut bw = BitPacker::new(100);
        bw.out(4, 0xff_f3);
        bw.out(4, 0x1);
        assert_eq!(bw.output, [0x31]);
    }

    #[test]
    fn flush_pads_with_ones_test() {
        let mut bw = BitPacker::new(100);
        bw.out_bit(false);
        bw.out(2, 0b01);
        assert_eq!(bw.flush(), 5);
        assert_eq!(bw.output, [0b0011_1111]);
        assert_eq!(bw.bit_len() % 8, 0);
    }

    #[test]
    fn zero_width_writes_nothing_test() {
        let mut bw = BitPacker::new(10);
        bw.out(0, 7);
        assert_eq!(bw.bit_len(), 0);
        assert_eq!(bw.flush(), 0);
        assert!(bw.output.is_empty());
    }

    #[test]
    fn unaligned_bytes_and_loc_test() {
        let mut bw = BitPacker::new(100);
        bw.out_bit(true);
        bw.out_bytes(b"!!");
        assert_eq!("[2.1]", &bw.loc());
        bw.flush();
        assert_eq!(bw.output, [0b1001_0000, 0b1001_0000, 0b1111_1111]);
        assert_eq!("[3.0]", &bw.loc());
    }

    #[test]
    fn out32_test() {
        let mut bw = BitPacker::new(100);
        bw.out(32, 0b00100001_00100000_00100001_00100000);
        bw.flush();
        assert_eq!(bw.output, [33, 32, 33, 32]);
    }
}
