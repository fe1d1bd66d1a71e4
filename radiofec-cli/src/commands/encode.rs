use super::{parse_hex, read_input, write_buffers};
use crate::OutputFormat;
use anyhow::{Context, Result};
use radiofec_core::{convolutional, hamming, Scheme};
use tracing::info;

/// Encode a whole input buffer with the given scheme
///
/// With `hex_input` the input is read as hex text instead of raw bytes.
pub fn execute(
    input: &str,
    output: Option<&str>,
    scheme: Scheme,
    hex_input: bool,
    format: OutputFormat,
) -> Result<()> {
    let raw = read_input(input)?;
    let payload = if hex_input {
        let text = String::from_utf8(raw).context("Hex input is not valid UTF-8")?;
        parse_hex(&text)?
    } else {
        raw
    };

    let encoded = encode_payload(&payload, scheme);

    info!(
        "Encoded {} bytes with {} scheme into {} bytes",
        payload.len(),
        scheme.name(),
        encoded.len()
    );

    write_buffers(&[encoded], output, format)
}

/// Encode an arbitrary-length payload
pub fn encode_payload(payload: &[u8], scheme: Scheme) -> Vec<u8> {
    match scheme {
        Scheme::Hamming => hamming::encode_buffer(payload).to_vec(),
        Scheme::Convolutional => convolutional::encode(payload).0.to_vec(),
    }
}
