//! Hamming(7,4) single-error-correcting block code
//!
//! Each 4-bit nibble becomes a 7-bit codeword stored in one byte. The layout,
//! from bit 6 down to bit 0, is:
//!
//! ```text
//! bit:      6   5   4   3   2   1   0
//! field:   p1  p2  d1  p3  d2  d3  d4
//! position: 1   2   3   4   5   6   7
//! ```
//!
//! `d1` is the most significant bit of the nibble. Bit 7 is reserved: encode
//! writes it as zero and decode ignores it. Parity bits follow the standard
//! Hamming assignment, so a nonzero syndrome is the 1-based position of the
//! flipped bit, which lives at bit `7 - position`.
//!
//! A payload byte is carried by two codewords, high nibble first.
//!
//! The code corrects one flipped bit per codeword. Two or more flips decode
//! to a wrong nibble without any error being reported.

use crate::constants::{CODEWORDS_PER_BYTE, CODEWORD_MASK, NIBBLE_MASK};
use crate::error::CodecError;
use bytes::{Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Result of decoding a single codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedNibble {
    /// Recovered data bits
    pub nibble: u8,

    /// Syndrome of the received codeword (0 when no correction was applied)
    pub syndrome: u8,
}

impl DecodedNibble {
    /// Whether a bit was flipped back during decoding
    pub const fn corrected(&self) -> bool {
        self.syndrome != 0
    }
}

/// Summary of a buffer decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Number of bytes written to the output
    pub decoded_len: usize,

    /// Number of codewords that had a bit corrected
    pub corrected_codewords: usize,
}

#[inline]
const fn bit(value: u8, shift: u8) -> u8 {
    (value >> shift) & 1
}

/// Encode the low 4 bits of `nibble` into a 7-bit codeword
pub const fn encode_nibble(nibble: u8) -> u8 {
    let d1 = bit(nibble, 3);
    let d2 = bit(nibble, 2);
    let d3 = bit(nibble, 1);
    let d4 = bit(nibble, 0);

    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;

    (p1 << 6) | (p2 << 5) | (d1 << 4) | (p3 << 3) | (d2 << 2) | (d3 << 1) | d4
}

/// Compute the 3-bit syndrome of a received codeword
pub const fn syndrome(code: u8) -> u8 {
    let p1 = bit(code, 6);
    let p2 = bit(code, 5);
    let d1 = bit(code, 4);
    let p3 = bit(code, 3);
    let d2 = bit(code, 2);
    let d3 = bit(code, 1);
    let d4 = bit(code, 0);

    let s1 = p1 ^ d1 ^ d2 ^ d4;
    let s2 = p2 ^ d1 ^ d3 ^ d4;
    let s3 = p3 ^ d2 ^ d3 ^ d4;

    (s3 << 2) | (s2 << 1) | s1
}

#[inline]
const fn extract_data(code: u8) -> u8 {
    (bit(code, 4) << 3) | (bit(code, 2) << 2) | (bit(code, 1) << 1) | bit(code, 0)
}

/// Decode a codeword, correcting a single flipped bit, and report the syndrome
pub const fn decode_codeword_checked(code: u8) -> DecodedNibble {
    let mut code = code & CODEWORD_MASK;
    let syndrome = syndrome(code);
    if syndrome != 0 {
        code ^= 1 << (7 - syndrome);
    }
    DecodedNibble {
        nibble: extract_data(code),
        syndrome,
    }
}

/// Decode a codeword (low 7 bits significant) into its data nibble
pub const fn decode_codeword(code: u8) -> u8 {
    decode_codeword_checked(code).nibble
}

/// Encode one byte into two codewords, high nibble first
pub const fn encode_byte(byte: u8) -> [u8; CODEWORDS_PER_BYTE] {
    [
        encode_nibble(byte >> 4),
        encode_nibble(byte & NIBBLE_MASK),
    ]
}

/// Number of encoded bytes produced for `payload_len` payload bytes
pub const fn encoded_len(payload_len: usize) -> usize {
    payload_len * CODEWORDS_PER_BYTE
}

/// Encode `payload` into `out`, returning the number of bytes written
///
/// `out` must hold at least [`encoded_len`] bytes.
pub fn encode_into(payload: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
    let required = encoded_len(payload.len());
    CodecError::check_capacity(required, out.len())?;

    for (byte, pair) in payload.iter().zip(out.chunks_exact_mut(CODEWORDS_PER_BYTE)) {
        pair.copy_from_slice(&encode_byte(*byte));
    }

    Ok(required)
}

/// Encode `payload` into a freshly allocated buffer
pub fn encode_buffer(payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::zeroed(encoded_len(payload.len()));
    let written = encode_into(payload, &mut buf).unwrap_or_default();
    debug_assert_eq!(written, buf.len(), "buffer sized by encoded_len");
    buf.freeze()
}

/// Decode `encoded` into `out`
///
/// Each output byte is assembled from two codewords, high nibble first.
/// An odd input length is rejected with [`CodecError::InvalidLength`] and
/// nothing is written.
pub fn decode_into(encoded: &[u8], out: &mut [u8]) -> Result<DecodeReport, CodecError> {
    if encoded.len() % CODEWORDS_PER_BYTE != 0 {
        #[cfg(feature = "logging")]
        warn!("Rejecting Hamming buffer of odd length {}", encoded.len());
        return Err(CodecError::InvalidLength(encoded.len()));
    }

    let decoded_len = encoded.len() / CODEWORDS_PER_BYTE;
    CodecError::check_capacity(decoded_len, out.len())?;

    let mut corrected_codewords = 0;
    for (pair, slot) in encoded.chunks_exact(CODEWORDS_PER_BYTE).zip(out.iter_mut()) {
        let high = decode_codeword_checked(pair[0]);
        let low = decode_codeword_checked(pair[1]);
        corrected_codewords += usize::from(high.corrected()) + usize::from(low.corrected());
        *slot = (high.nibble << 4) | low.nibble;
    }

    #[cfg(feature = "logging")]
    {
        if corrected_codewords > 0 {
            debug!(
                "Corrected {} of {} codewords",
                corrected_codewords,
                encoded.len()
            );
        }
    }

    Ok(DecodeReport {
        decoded_len,
        corrected_codewords,
    })
}

/// Decode `encoded` into a freshly allocated buffer, with correction stats
pub fn decode_buffer_with_stats(encoded: &[u8]) -> Result<(Bytes, DecodeReport), CodecError> {
    let mut buf = BytesMut::zeroed(encoded.len() / CODEWORDS_PER_BYTE);
    let report = decode_into(encoded, &mut buf)?;
    Ok((buf.freeze(), report))
}

/// Decode `encoded` into a freshly allocated buffer
pub fn decode_buffer(encoded: &[u8]) -> Result<Bytes, CodecError> {
    decode_buffer_with_stats(encoded).map(|(decoded, _)| decoded)
}
