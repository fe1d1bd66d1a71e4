//! Fuzzing entry points for radiofec-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_hamming_decode

pub fn fuzz_hamming_decode(data: &[u8]) {
    use radiofec_core::hamming::decode_buffer;

    // Odd lengths must come back as an error, never a panic
    let _ = decode_buffer(data);
}

pub fn fuzz_convolutional_encode(data: &[u8]) {
    use radiofec_core::convolutional::{encode_into, encoded_len};

    // Use the first byte to pick an output capacity around the exact size
    let Some((&slack, input)) = data.split_first() else {
        return;
    };
    let capacity = (encoded_len(input.len()) + slack as usize).saturating_sub(4);
    let mut out = vec![0u8; capacity];
    let _ = encode_into(input, &mut out);
}

pub fn fuzz_parse_packet(data: &[u8]) {
    use radiofec_core::packet::parse_packet;

    let _ = parse_packet(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_hamming_decode_empty() {
        fuzz_hamming_decode(&[]);
    }

    #[test]
    fn test_fuzz_hamming_decode_random() {
        fuzz_hamming_decode(&[0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_fuzz_convolutional_short_buffer() {
        fuzz_convolutional_encode(&[0x00, 0xFF, 0xFF]);
        fuzz_convolutional_encode(&[0xFF; 64]);
    }

    #[test]
    fn test_fuzz_parse_packet() {
        fuzz_parse_packet(&[]);
        fuzz_parse_packet(&[0xAA; 1024]);
    }
}
