//! Rate 1/2, K=3 convolutional encoder (generators 7 and 5 octal)
//!
//! Input bits are consumed MSB-first, byte by byte. Every input bit shifts
//! into a 3-bit register (newest bit in bit 0) and produces two output bits,
//! `parity(reg & G1)` then `parity(reg & G2)`, written MSB-first into the
//! output buffer. Two zero tail bits follow the payload so the two memory
//! bits (bits 0 and 1) end at zero. Bit 2 still holds the last data bit
//! after the flush and is shifted out by the next push.
//!
//! The register lives for one call only; nothing carries over between calls.

use crate::constants::{GENERATOR_1, GENERATOR_2, OUTPUTS_PER_BIT, REGISTER_MASK, TAIL_BITS};
use crate::error::CodecError;
use bytes::{Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::debug;

/// Number of output bits for `input_len` input bytes, tail included
pub const fn encoded_bit_len(input_len: usize) -> usize {
    OUTPUTS_PER_BIT * (input_len * 8 + TAIL_BITS)
}

/// Number of output bytes for `input_len` input bytes
pub const fn encoded_len(input_len: usize) -> usize {
    encoded_bit_len(input_len).div_ceil(8)
}

/// Encoder memory for a single encode call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRegister(u8);

impl ShiftRegister {
    /// Register in the all-zero start state
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current register contents (low 3 bits)
    pub const fn state(&self) -> u8 {
        self.0
    }

    /// The K-1 memory bits that carry over to the next input bit
    pub const fn memory(&self) -> u8 {
        self.0 & (REGISTER_MASK >> 1)
    }

    /// Shift `bit` in and return the two output bits it produces
    pub fn push(&mut self, bit: u8) -> (u8, u8) {
        self.0 = ((self.0 << 1) | (bit & 1)) & REGISTER_MASK;
        self.outputs()
    }

    /// Output pair for the current register contents
    pub const fn outputs(&self) -> (u8, u8) {
        (
            parity(self.0 & GENERATOR_1),
            parity(self.0 & GENERATOR_2),
        )
    }
}

#[inline]
const fn parity(value: u8) -> u8 {
    (value.count_ones() & 1) as u8
}

/// MSB-first bit writer over a caller buffer
struct BitWriter<'a> {
    buf: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    fn put(&mut self, bit: u8) {
        if bit != 0 {
            self.buf[self.bit_pos / 8] |= 0x80 >> (self.bit_pos % 8);
        }
        self.bit_pos += 1;
    }

    fn put_pair(&mut self, (a, b): (u8, u8)) {
        self.put(a);
        self.put(b);
    }

    fn bits_written(&self) -> usize {
        self.bit_pos
    }
}

/// Encode `input` into `out`, returning the number of output bits
///
/// `out` must hold at least [`encoded_len`] bytes; a shorter buffer is
/// rejected before anything is written. Bytes past the encoded region are
/// left untouched; unused bits of the final byte are zero.
pub fn encode_into(input: &[u8], out: &mut [u8]) -> Result<usize, CodecError> {
    let required = encoded_len(input.len());
    CodecError::check_capacity(required, out.len())?;

    let region = &mut out[..required];
    region.fill(0);

    let mut register = ShiftRegister::new();
    let mut writer = BitWriter::new(region);

    for byte in input {
        for shift in (0..8).rev() {
            writer.put_pair(register.push((byte >> shift) & 1));
        }
    }
    for _ in 0..TAIL_BITS {
        writer.put_pair(register.push(0));
    }

    debug_assert_eq!(register.memory(), 0);

    let bits = writer.bits_written();

    #[cfg(feature = "logging")]
    debug!(
        "Convolutionally encoded {} bytes into {} bits ({} bytes)",
        input.len(),
        bits,
        required
    );

    Ok(bits)
}

/// Encode `input` into a freshly allocated buffer, returning it with its bit count
pub fn encode(input: &[u8]) -> (Bytes, usize) {
    let mut buf = BytesMut::zeroed(encoded_len(input.len()));
    let bits = encode_into(input, &mut buf).unwrap_or_default();
    debug_assert_eq!(bits, encoded_bit_len(input.len()), "buffer sized by encoded_len");
    (buf.freeze(), bits)
}
