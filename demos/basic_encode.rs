//! Basic encoding example

use radiofec_core::{sample::SampleGenerator, CodecPipeline, PacketBuilder, PacketConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("RadioFEC Basic Encoding Example\n");

    let config = PacketConfig {
        count: 5,
        ..PacketConfig::default()
    };
    let pipeline = CodecPipeline::new(config.codec())?;
    let mut generator = SampleGenerator::new(config.seed);

    let mut output = Vec::new();
    let mut payload = vec![0u8; config.payload_len];

    for seq in 0..config.count {
        generator.fill(&mut payload, config.include_index);

        let encoded = pipeline.encode(&payload)?;
        let packet = PacketBuilder::new(config.radio)
            .sequence(seq as u8)
            .payload(encoded)
            .build()?;

        println!(
            "Packet {}: {} raw bytes -> {} bytes on air",
            seq,
            payload.len(),
            packet.len()
        );
        output.extend_from_slice(&packet);
    }

    std::fs::write("example_output.bin", &output)?;

    println!("\nWrote {} bytes to example_output.bin", output.len());

    Ok(())
}
