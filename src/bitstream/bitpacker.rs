use log::error;

use crate::huffman_coding::tree_array::Code;
use crate::tools::safe_alphabet::to_safe;

/// Bits per output character.
const GROUP: u8 = 6;

/// Creates a bitstream for output, six bits per safe character.
pub struct SixBitPacker {
    pub output: Vec<u8>,
    queue: u32,
    q_bits: u8,
}

impl SixBitPacker {
    /// Create a new SixBitPacker with an output buffer of size specified. Call flush() to
    /// push the final partial group to the buffer.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal write function common to all the out functions.
    fn write_stream(&mut self) {
        while self.q_bits >= GROUP {
            let group = (self.queue >> (self.q_bits - GROUP)) as u8 & 0x3f;
            self.output.push(to_safe(group));
            self.q_bits -= GROUP;
        }
        // Drop the bits we already wrote so the queue never overflows
        self.queue &= (1 << self.q_bits) - 1;
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue = self.queue << 1 | bit as u32;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts a whole Huffman code on the stream, first bit first.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits (1-5) from the queue, padding with 0s in the least
    /// significant bits.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= GROUP - self.q_bits;
            self.q_bits = GROUP;
            self.write_stream();
            if self.q_bits > 0 {
                error!("Stuff left in the SixBitPacker queue.");
            }
        }
    }

    /// Debugging function to return the number of chars.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len(), self.q_bits)
    }
}
