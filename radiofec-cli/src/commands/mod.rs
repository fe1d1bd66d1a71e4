//! Subcommand implementations and the I/O helpers they share

pub mod ber;
pub mod decode;
pub mod decode_log;
pub mod encode;
pub mod packets;

use crate::OutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Read a whole file, or stdin when `input` is "-"
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Parse hex text, ignoring whitespace (`"0f 00 1a"` and `"0f001a"` both work)
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).with_context(|| format!("Invalid hex input: {}", text.trim()))
}

/// Format bytes as space separated upper-case hex
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write buffers to a file (or stdout when `output` is `None`)
pub fn write_buffers(buffers: &[Vec<u8>], output: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut data = Vec::new();
    for buf in buffers {
        match format {
            OutputFormat::Hex => {
                data.extend_from_slice(format_hex(buf).as_bytes());
                data.push(b'\n');
            }
            OutputFormat::Binary => data.extend_from_slice(buf),
        }
    }

    match output {
        Some(path) => fs::write(path, &data)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            io::stdout().write_all(&data)?;
            Ok(())
        }
    }
}

/// Split a receiver log line `timestamp | hex bytes | message` into its fields
pub fn split_log_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.splitn(3, '|');
    let timestamp = parts.next()?.trim();
    let payload = parts.next()?.trim();
    let message = parts.next()?.trim();
    Some((timestamp, payload, message))
}
