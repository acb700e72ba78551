//! The tools module provides several helper functions for the compressor.
//!
//! The tools are:
//! - cli: Command line interface.
//! - data_io: Reading inputs and writing outputs, with overwrite protection.
//! - freq_count: Frequency count of the input bytes.
//! - safe_alphabet: Mapping of 6 bit values onto bytes that never need escaping in a string literal.
//!
pub mod cli;
pub mod data_io;
pub mod freq_count;
pub mod safe_alphabet;
