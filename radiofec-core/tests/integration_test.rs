//! Integration tests for the complete generate → encode → frame → corrupt → decode flow

use radiofec_core::{
    constants::{HEADER_LEN, MAX_ENC_PAYLOAD_SIZE, RAW_PAYLOAD_SIZE},
    hamming,
    packet::{parse_packet, write_header},
    sample::SampleGenerator,
    CodecConfig, CodecPipeline, PacketBuilder, PacketConfig, Radio, Scheme,
};
use rand::{Rng, SeedableRng};

#[test]
fn test_full_workflow_hamming() {
    let config = PacketConfig {
        scheme: Scheme::Hamming,
        ..PacketConfig::default()
    };
    let pipeline = CodecPipeline::new(config.codec()).unwrap();
    let mut generator = SampleGenerator::new(config.seed);

    for seq in 0..8u8 {
        // Step 1: Generate payload
        let mut payload = vec![0u8; config.payload_len];
        generator.fill(&mut payload, config.include_index);

        // Step 2: Encode and frame
        let encoded = pipeline.encode(&payload).unwrap();
        let packet = PacketBuilder::new(config.radio)
            .sequence(seq)
            .payload(encoded)
            .build()
            .unwrap();
        assert_eq!(packet.len(), HEADER_LEN + 2 * RAW_PAYLOAD_SIZE);

        // Step 3: Receive and decode
        let received = parse_packet(&packet).unwrap();
        assert_eq!(received.sequence, seq);
        assert_eq!(received.radio, Radio::Cc2500);
        let decoded = pipeline.decode(&received.payload).unwrap();
        assert_eq!(&decoded[..], &payload[..]);
    }
}

#[test]
fn test_convolutional_packet_size() {
    let pipeline = CodecPipeline::new(CodecConfig::default()).unwrap();
    let mut generator = SampleGenerator::default();
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    generator.fill(&mut payload, true);

    let mut packet = [0u8; HEADER_LEN + MAX_ENC_PAYLOAD_SIZE];
    let written = pipeline
        .encode_into(&payload, &mut packet[HEADER_LEN..])
        .unwrap();
    assert_eq!(written, MAX_ENC_PAYLOAD_SIZE);
    write_header(&mut packet, Radio::Cc1352, 1, written).unwrap();

    assert_eq!(packet[HEADER_LEN - 2] as usize, MAX_ENC_PAYLOAD_SIZE + 1);
    let parsed = parse_packet(&packet).unwrap();
    assert_eq!(parsed.payload.len(), MAX_ENC_PAYLOAD_SIZE);
}

#[test]
fn test_noisy_channel_single_flips_recovered() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let pipeline = CodecPipeline::new(CodecConfig::new(Scheme::Hamming, 64)).unwrap();

    for _ in 0..50 {
        let mut payload = vec![0u8; 64];
        rng.fill(&mut payload[..]);
        let mut encoded = pipeline.encode(&payload).unwrap().to_vec();

        // At most one flipped bit per codeword, including the reserved bit
        for code in encoded.iter_mut() {
            if rng.gen_bool(0.3) {
                *code ^= 1u8 << rng.gen_range(0..8u32);
            }
        }

        let decoded = pipeline.decode(&encoded).unwrap();
        assert_eq!(&decoded[..], &payload[..]);
    }
}

#[test]
fn test_corrections_are_counted() {
    let mut encoded = hamming::encode_buffer(b"\x12\x34").to_vec();
    encoded[0] ^= 0b0000_0100;
    encoded[3] ^= 0b0100_0000;

    let (decoded, report) = hamming::decode_buffer_with_stats(&encoded).unwrap();
    assert_eq!(&decoded[..], b"\x12\x34");
    assert_eq!(report.corrected_codewords, 2);
    assert_eq!(report.decoded_len, 2);
}

#[test]
fn test_encoded_length_independent_of_content() {
    for scheme in [Scheme::Hamming, Scheme::Convolutional] {
        let pipeline = CodecPipeline::new(CodecConfig::new(scheme, 16)).unwrap();
        let zeros = pipeline.encode(&[0x00; 16]).unwrap();
        let ones = pipeline.encode(&[0xFF; 16]).unwrap();
        assert_eq!(zeros.len(), pipeline.encoded_len());
        assert_eq!(ones.len(), pipeline.encoded_len());
    }
}

#[test]
fn test_config_from_json() {
    let config: PacketConfig =
        serde_json::from_str(r#"{"radio":"cc1352","scheme":"hamming","count":4}"#).unwrap();
    assert_eq!(config.radio, Radio::Cc1352);
    assert_eq!(config.scheme, Scheme::Hamming);
    assert_eq!(config.count, 4);
    assert_eq!(config.payload_len, RAW_PAYLOAD_SIZE);
}
