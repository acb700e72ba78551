//! The bitstream module forms the I/O subsystem of the compressor.
//!
//! Huffman codes are variable length, so the encoder works on a single logical run of bits.
//! That run is cut into groups of six bits, and each group becomes one character of the safe
//! alphabet (see `tools::safe_alphabet`). The reader reverses this for the decoder.
//!
//! Bits are written and read most significant first. The final group is padded with zeros;
//! the decoder knows how many symbols to produce and never looks at the padding.
//!
pub mod bitpacker;
pub mod bitreader;
