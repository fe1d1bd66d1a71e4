use super::{format_hex, parse_hex, read_input, split_log_line};
use anyhow::{Context, Result};
use radiofec_core::hamming;
use std::fs;
use std::io::{self, Write};
use tracing::{info, warn};

/// Decode the Hamming payload of one log line, keeping timestamp and message
///
/// Returns `None` for blank, malformed or undecodable lines.
pub fn decode_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (timestamp, payload, message) = split_log_line(line)?;
    let encoded = match parse_hex(payload) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!("Could not parse hex values in line: {}", line);
            return None;
        }
    };

    match hamming::decode_buffer(&encoded) {
        Ok(decoded) => Some(format!(
            "{} | {} | {}",
            timestamp,
            format_hex(&decoded),
            message
        )),
        Err(e) => {
            warn!("Skipping line: {}", e);
            None
        }
    }
}

/// Rewrite a receiver log with decoded payloads
pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    info!("Decoding log: {}", input);

    let raw = read_input(input)?;
    let text = String::from_utf8_lossy(&raw);

    let mut decoded_lines = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match decode_line(line) {
            Some(decoded) => decoded_lines.push(decoded),
            None => skipped += 1,
        }
    }

    let mut out = decoded_lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }

    match output {
        Some(path) => fs::write(path, &out)
            .with_context(|| format!("Failed to write output file: {}", path))?,
        None => io::stdout().write_all(out.as_bytes())?,
    }

    info!(
        "Decoded {} lines ({} skipped)",
        decoded_lines.len(),
        skipped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line() {
        let line = "12:00:00.000 | 69 00 2a 00 | -80 OK";
        assert_eq!(
            decode_line(line).as_deref(),
            Some("12:00:00.000 | 10 20 | -80 OK")
        );
    }

    #[test]
    fn test_decode_line_corrects_errors() {
        // 0x69 with bit 2 flipped
        let line = "t | 6d 00 | msg";
        assert_eq!(decode_line(line).as_deref(), Some("t | 10 | msg"));
    }

    #[test]
    fn test_decode_line_rejects_bad_input() {
        assert_eq!(decode_line(""), None);
        assert_eq!(decode_line("no fields"), None);
        assert_eq!(decode_line("t | zz | msg"), None);
        assert_eq!(decode_line("t | 69 00 2a | msg"), None);
    }
}
