//! Maps 6 bit values onto printable bytes that can sit inside a double quoted string literal
//! without escaping.
//!
//! The alphabet is the two bands `42..=91` and `93..=106`. Byte 92 (the backslash) is skipped.
//! Tree array elements are widened to 12 bits (`element + 512`) and written as two characters,
//! high half first.

use std::io::{self, Error};

/// First byte of the safe alphabet.
const BASE: u8 = 42;
/// The one byte inside the range that must never be emitted.
pub const BACKSLASH: u8 = 92;
/// Offset that lifts every tree element into the non-negative 12 bit range.
const NODE_BIAS: i32 = 512;

/// Transcode a 6 bit value (0-63) into a safe byte.
#[inline(always)]
pub fn to_safe(v: u8) -> u8 {
    let byte = BASE + (v & 0x3f);
    if byte >= BACKSLASH {
        byte + 1
    } else {
        byte
    }
}

/// Reverse of `to_safe`. Returns None for bytes outside the safe alphabet.
#[inline(always)]
pub fn from_safe(byte: u8) -> Option<u8> {
    match byte {
        BASE..=91 => Some(byte - BASE),
        93..=106 => Some(byte - 1 - BASE),
        _ => None,
    }
}

/// Same as `from_safe`, but reports an InvalidData error for bad bytes.
pub fn from_safe_checked(byte: u8) -> io::Result<u8> {
    from_safe(byte).ok_or_else(|| {
        Error::new(
            io::ErrorKind::InvalidData,
            format!("Byte {} is not in the safe alphabet", byte),
        )
    })
}

/// Encode one tree array element as two safe bytes.
pub fn encode_node(element: i32) -> [u8; 2] {
    let x = (element + NODE_BIAS) as u16;
    [to_safe((x >> 6) as u8 & 0x3f), to_safe(x as u8 & 0x3f)]
}

/// Decode two safe bytes back into a tree array element.
pub fn decode_node(pair: [u8; 2]) -> io::Result<i32> {
    let hi = from_safe_checked(pair[0])? as i32;
    let lo = from_safe_checked(pair[1])? as i32;
    Ok((hi << 6 | lo) - NODE_BIAS)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn six_bit_roundtrip_test() {
        for v in 0..64_u8 {
            let b = to_safe(v);
            assert_ne!(b, BACKSLASH);
            assert!((42..=106).contains(&b));
            assert_eq!(from_safe(b), Some(v));
        }
    }

    #[test]
    fn band_edges_test() {
        assert_eq!(to_safe(0), b'*');
        assert_eq!(to_safe(49), 91);
        assert_eq!(to_safe(50), 93);
        assert_eq!(to_safe(63), 106);
    }

    #[test]
    fn rejects_unsafe_bytes_test() {
        assert_eq!(from_safe(BACKSLASH), None);
        assert_eq!(from_safe(b'"'), None);
        assert_eq!(from_safe(107), None);
        assert_eq!(from_safe(b'{'), None);
        assert!(from_safe_checked(b'\n').is_err());
    }

    #[test]
    fn node_test() {
        for element in [-510, -2, 0, 97, 255] {
            let pair = encode_node(element);
            assert!(!pair.contains(&BACKSLASH));
            assert_eq!(decode_node(pair).unwrap(), element);
        }
        // 0 + 512 = 0b001000_000000
        assert_eq!(encode_node(0), [to_safe(8), to_safe(0)]);
    }
}
