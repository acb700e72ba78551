//! The compression module manages both directions of the compressor.
//!
//! Compression happens in the following steps:
//! - Frequency count: How often each byte value occurs in the input.
//! - Huffman tree: Merge the two lightest nodes until one root is left.
//! - Tree array: Flatten the tree into leaves and sign-encoded branch markers.
//! - Codes: Read each symbol's bit path off the tree array.
//! - Bit packing: Concatenate the codes of the input and cut them into groups of six bits.
//! - Transcoding: Map every six bit group (and every tree element, as two groups) onto the safe alphabet.
//! - Script: Emit the literals with a small program that can decode them.
//!
//! Decompression reads the literals back out of a script and walks the tree array once per
//! symbol, taking the next slot on a 0 bit and jumping on a 1 bit.
//!

pub mod compress;
pub mod decompress;
pub mod script;
