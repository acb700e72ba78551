//! Huffman text compressor that produces a self-decoding script.
//!
//! Version 0.1.0
//!
//! The input is coded with one Huffman table built from its byte frequencies. The table travels
//! as a flattened tree array, and both the tree and the bitstream are written with a 64
//! character alphabet that never includes a backslash or a quote. The two literals can be
//! pasted inside a double quoted string without escaping.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffscript -z page.txt`
//!
//! This will create page.txt.js, a program that writes the original text back into the page.
//! `huffscript -d page.txt.js` restores page.txt.
//!
//! From code:
//!
//! ```
//! use huffscript::compression::{compress::encode, decompress::decode};
//!
//! let encoded = encode(b"abracadabra");
//! assert_eq!(decode(&encoded).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;
