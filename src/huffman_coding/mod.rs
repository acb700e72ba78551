//! The huffman module builds the prefix code for the compressor. Decoding happens in the
//! decompress function.
//!
//! Three steps live here:
//! - huffman: count-weighted tree construction by repeatedly merging the two lightest live nodes.
//! - tree_array: the tree flattened into one array of leaves and sign-encoded branch markers.
//! - tree_array: codes for every symbol, read off the flattened array.
//!
//! The whole input shares one table, so the process is inherently sequential and does not
//! benefit from multithreading. A tree never has more than 511 nodes.
//!

pub mod huffman;
pub mod tree_array;
