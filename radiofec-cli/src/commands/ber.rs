use super::{parse_hex, read_input, split_log_line};
use anyhow::{bail, Result};
use colored::*;
use radiofec_core::{hamming, stats::BitErrorStats};
use tracing::{debug, info, warn};

/// Compare every logged packet against `expected`
///
/// With `decode` the logged bytes are Hamming codewords and are decoded
/// before the comparison. Lines without a hex field, with a length mismatch
/// or that fail to decode are counted as skipped.
pub fn analyze(log: &str, expected: &[u8], decode: bool) -> BitErrorStats {
    let mut stats = BitErrorStats::default();

    for (lineno, line) in log.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if line.trim().is_empty() {
            continue;
        }

        let Some(received) = received_bytes(line, decode) else {
            // No hex data found (e.g. overflow line)
            stats.skip();
            continue;
        };

        match stats.record(expected, &received) {
            Some(errors) => debug!("Line {}: {} bit errors", lineno, errors),
            None => warn!(
                "Line {}: expected {} bytes but got {}; skipping",
                lineno,
                expected.len(),
                received.len()
            ),
        }
    }

    stats
}

fn received_bytes(line: &str, decode: bool) -> Option<Vec<u8>> {
    let (_, payload, _) = split_log_line(line)?;
    if payload.is_empty() {
        return None;
    }
    let bytes = parse_hex(payload).ok()?;
    if decode {
        hamming::decode_buffer(&bytes).ok().map(|b| b.to_vec())
    } else {
        Some(bytes)
    }
}

/// Print the bit error rate of a receiver log
pub fn execute(input: &str, expected_hex: &str, decode: bool) -> Result<()> {
    info!("Analyzing log: {}", input);

    let expected = parse_hex(expected_hex)?;
    if expected.is_empty() {
        bail!("Expected packet must not be empty");
    }

    let raw = read_input(input)?;
    let stats = analyze(&String::from_utf8_lossy(&raw), &expected, decode);
    if stats.packets == 0 {
        bail!(
            "No valid packets found in {} ({} skipped)",
            input,
            stats.skipped
        );
    }

    println!("\n=== Bit Error Statistics ===");
    println!("Packets compared:  {}", stats.packets);
    println!("Packets skipped:   {}", stats.skipped);
    println!("Bits compared:     {}", stats.total_bits);
    println!("Bit errors:        {}", stats.bit_errors);

    let ber = format!("{:.3e}", stats.ber());
    if stats.bit_errors == 0 {
        println!("Bit error rate:    {}", ber.green());
    } else {
        println!("Bit error rate:    {}", ber.yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [u8; 4] = [0x0F, 0x00, 0x10, 0x20];

    #[test]
    fn test_analyze_raw() {
        let log = "\
t1 | 0f 00 10 20 | -90
t2 | 0f 00 10 21 | -91 CRC error
overflow

t3 | 0f 00 | -92
";
        let stats = analyze(log, &EXPECTED, false);
        assert_eq!(stats.packets, 2);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.total_bits, 64);
        assert_eq!(stats.bit_errors, 1);
    }

    #[test]
    fn test_analyze_decoded() {
        // Codewords of 0F 00 10 20 with one flipped bit in the last codeword
        let log = "t | 00 7f 00 00 69 00 2a 01 | ok\n";
        let stats = analyze(log, &EXPECTED, true);
        assert_eq!(stats.packets, 1);
        assert_eq!(stats.bit_errors, 0);
    }
}
