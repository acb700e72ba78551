//! BitReader: reads the transcoded bitstream back out, six bits per safe character.
//!
//! Bits come out of each character most significant first, which is the order the packer
//! put them in. The characters are checked against the safe alphabet once, up front.
//!

use std::io;

use crate::tools::safe_alphabet::from_safe_checked;

/// Reads a transcoded bitstream.
#[derive(Debug)]
pub struct SafeBitReader {
    groups: Vec<u8>,
    cursor: usize,
    bit_index: u8,
}

impl SafeBitReader {
    /// Creates a new reader. Fails if any character is outside the safe alphabet.
    pub fn new(stream: &[u8]) -> io::Result<Self> {
        let groups = stream
            .iter()
            .map(|&b| from_safe_checked(b))
            .collect::<io::Result<Vec<u8>>>()?;
        Ok(Self {
            groups,
            cursor: 0,
            bit_index: 0,
        })
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        let group = *self.groups.get(self.cursor)?;
        let bit = (group >> (5 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 6 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the stream.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
