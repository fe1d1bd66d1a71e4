use super::write_buffers;
use crate::OutputFormat;
use anyhow::{Context, Result};
use radiofec_core::{sample::SampleGenerator, CodecPipeline, PacketBuilder, PacketConfig};
use std::fs;
use tracing::{debug, info};

/// Load a packet configuration from JSON, or defaults when no path is given
pub fn load_config(path: Option<&str>) -> Result<PacketConfig> {
    let Some(path) = path else {
        return Ok(PacketConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path))
}

/// Generate `config.count` sample packets, encoded and framed
pub fn generate(config: &PacketConfig) -> Result<Vec<Vec<u8>>> {
    let pipeline = CodecPipeline::new(config.codec()).context("Invalid codec configuration")?;
    let mut generator = SampleGenerator::new(config.seed);
    let mut payload = vec![0u8; config.payload_len];

    let mut packets = Vec::with_capacity(config.count);
    for i in 0..config.count {
        // Sequence numbers are one byte and wrap
        let seq = (i % 256) as u8;
        generator.fill(&mut payload, config.include_index);

        let encoded = pipeline
            .encode(&payload)
            .with_context(|| format!("Failed to encode packet {}", i))?;
        let packet = PacketBuilder::new(config.radio)
            .sequence(seq)
            .payload(encoded)
            .build()
            .with_context(|| format!("Failed to build packet {}", i))?;

        debug!("Packet {} (seq {}): {} bytes", i, seq, packet.len());
        packets.push(packet.to_vec());
    }

    Ok(packets)
}

/// Generate packets and write them out
pub fn execute(config: &PacketConfig, output: Option<&str>, format: OutputFormat) -> Result<()> {
    info!(
        "Generating {} packets: {:?}, {} scheme, {} byte payloads",
        config.count,
        config.radio,
        config.scheme.name(),
        config.payload_len
    );

    let packets = generate(config)?;
    write_buffers(&packets, output, format)?;

    info!(
        "Successfully generated {} packets ({} bytes total)",
        packets.len(),
        packets.iter().map(Vec::len).sum::<usize>()
    );

    Ok(())
}
