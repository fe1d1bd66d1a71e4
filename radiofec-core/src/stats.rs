//! Bit error accounting for received packets

/// Number of set bits in `x`
pub const fn hamming_weight(x: u8) -> u32 {
    x.count_ones()
}

/// Count differing bits between two equally sized buffers
///
/// Returns `None` when the lengths differ, which usually means the received
/// line was truncated or merged with another.
pub fn bit_errors(expected: &[u8], received: &[u8]) -> Option<u64> {
    if expected.len() != received.len() {
        return None;
    }
    Some(
        expected
            .iter()
            .zip(received)
            .map(|(e, r)| u64::from(hamming_weight(e ^ r)))
            .sum(),
    )
}

/// Running bit error statistics over many packets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitErrorStats {
    /// Packets compared
    pub packets: u64,

    /// Packets skipped because of a length mismatch
    pub skipped: u64,

    /// Bits compared
    pub total_bits: u64,

    /// Bits that differed
    pub bit_errors: u64,
}

impl BitErrorStats {
    /// Compare one received packet against the expected one
    ///
    /// Returns the bit errors of this packet, or `None` if it was skipped.
    pub fn record(&mut self, expected: &[u8], received: &[u8]) -> Option<u64> {
        match bit_errors(expected, received) {
            Some(errors) => {
                self.packets += 1;
                self.total_bits += expected.len() as u64 * 8;
                self.bit_errors += errors;
                Some(errors)
            }
            None => {
                self.skipped += 1;
                None
            }
        }
    }

    /// Count a packet that could not be compared at all
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Bit error rate (0.0 when nothing was compared)
    pub fn ber(&self) -> f64 {
        if self.total_bits == 0 {
            return 0.0;
        }
        self.bit_errors as f64 / self.total_bits as f64
    }

    /// Combine two sets of statistics
    pub fn merge(&mut self, other: &BitErrorStats) {
        self.packets += other.packets;
        self.skipped += other.skipped;
        self.total_bits += other.total_bits;
        self.bit_errors += other.bit_errors;
    }
}
