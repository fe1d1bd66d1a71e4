//! Hamming round trip over a simulated binary symmetric channel

use radiofec_core::{hamming, stats::BitErrorStats, CodecConfig, CodecPipeline, Scheme};
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = CodecPipeline::new(CodecConfig::new(Scheme::Hamming, 16))?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for flip_probability in [0.001, 0.01, 0.05] {
        let mut raw = BitErrorStats::default();
        let mut coded = BitErrorStats::default();
        let mut corrected = 0;

        for _ in 0..1000 {
            let mut payload = [0u8; 16];
            rng.fill(&mut payload[..]);

            let encoded = pipeline.encode(&payload)?;
            let mut received = encoded.to_vec();
            for byte in received.iter_mut() {
                for bit in 0..7 {
                    if rng.gen_bool(flip_probability) {
                        *byte ^= 1 << bit;
                    }
                }
            }

            raw.record(&encoded, &received);
            let (decoded, report) = hamming::decode_buffer_with_stats(&received)?;
            corrected += report.corrected_codewords;
            coded.record(&payload, &decoded);
        }

        println!(
            "p = {:<6} channel BER {:.5}  decoded BER {:.5}  ({} codewords corrected)",
            flip_probability,
            raw.ber(),
            coded.ber(),
            corrected
        );
    }

    Ok(())
}
