use super::{parse_hex, read_input, write_buffers};
use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use radiofec_core::{hamming, Scheme};
use tracing::info;

/// Decode a Hamming-encoded buffer
pub fn execute(
    input: &str,
    output: Option<&str>,
    scheme: Scheme,
    hex_input: bool,
    format: OutputFormat,
) -> Result<()> {
    if !scheme.supports_decode() {
        bail!("The {} scheme has no decoder", scheme.name());
    }

    let raw = read_input(input)?;
    let encoded = if hex_input {
        let text = String::from_utf8(raw).context("Hex input is not valid UTF-8")?;
        parse_hex(&text)?
    } else {
        raw
    };

    let (decoded, report) = hamming::decode_buffer_with_stats(&encoded)
        .with_context(|| format!("Failed to decode {} bytes", encoded.len()))?;

    info!(
        "Decoded {} bytes ({} codewords corrected)",
        report.decoded_len, report.corrected_codewords
    );

    write_buffers(&[decoded.to_vec()], output, format)
}
