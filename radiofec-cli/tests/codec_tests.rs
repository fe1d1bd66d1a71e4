use std::fs;
use tempfile::tempdir;

use radiofec_cli::{commands::decode, commands::encode, OutputFormat};
use radiofec_core::Scheme;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn encode_hex_hamming() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.hex");
    let out_path = td.path().join("encoded.hex");
    write_file(&in_path, "10 20\n");

    encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        Scheme::Hamming,
        /*hex_input*/ true,
        OutputFormat::Hex,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "69 00 2A 00\n");
}

#[test]
fn encode_binary_convolutional() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.bin");
    let out_path = td.path().join("encoded.bin");
    fs::write(&in_path, [0x80u8]).unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        Scheme::Convolutional,
        /*hex_input*/ false,
        OutputFormat::Binary,
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), vec![0xEC, 0x00, 0x00]);
}

#[test]
fn decode_round_trip_with_errors() {
    let td = tempdir().unwrap();
    let enc_path = td.path().join("encoded.bin");
    let out_path = td.path().join("decoded.bin");

    let mut encoded = encode::encode_payload(b"radio", Scheme::Hamming);
    encoded[1] ^= 0b0001_0000;
    encoded[6] ^= 0b0000_0001;
    fs::write(&enc_path, &encoded).unwrap();

    decode::execute(
        enc_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        Scheme::Hamming,
        /*hex_input*/ false,
        OutputFormat::Binary,
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), b"radio".to_vec());
}

#[test]
fn decode_odd_length_fails() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("odd.hex");
    write_file(&in_path, "69 00 2a");

    let result = decode::execute(
        in_path.to_str().unwrap(),
        None,
        Scheme::Hamming,
        /*hex_input*/ true,
        OutputFormat::Hex,
    );
    assert!(result.is_err());
}

#[test]
fn decode_convolutional_unsupported() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("conv.bin");
    fs::write(&in_path, [0xECu8, 0x00, 0x00]).unwrap();

    let result = decode::execute(
        in_path.to_str().unwrap(),
        None,
        Scheme::Convolutional,
        /*hex_input*/ false,
        OutputFormat::Hex,
    );
    assert!(result.is_err());
}
