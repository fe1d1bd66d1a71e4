use std::fs;
use tempfile::tempdir;

use radiofec_cli::commands::{ber, decode_log};

#[test]
fn decode_log_file() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("rx.log");
    let out_path = td.path().join("decoded.log");

    let log = "\
15:17:18.394 | 00 7f 00 00 69 00 2a 00 | -91
15:17:18.512 | 00 7f 00 00 69 00 2a 04 | -92 CRC error
garbage line
15:17:18.630 | 00 7f 00 | -90
";
    fs::write(&in_path, log).unwrap();

    decode_log::execute(in_path.to_str().unwrap(), Some(out_path.to_str().unwrap())).unwrap();

    let decoded = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        decoded,
        "15:17:18.394 | 0F 00 10 20 | -91\n15:17:18.512 | 0F 00 10 20 | -92 CRC error\n"
    );
}

#[test]
fn ber_report() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("rx.log");
    fs::write(
        &in_path,
        "t1 | 0f 00 10 20 | -90\nt2 | 0f 00 10 30 | -95\n",
    )
    .unwrap();

    let stats = ber::analyze(
        &fs::read_to_string(&in_path).unwrap(),
        &[0x0F, 0x00, 0x10, 0x20],
        false,
    );
    assert_eq!(stats.packets, 2);
    assert_eq!(stats.bit_errors, 1);
    assert!((stats.ber() - 1.0 / 64.0).abs() < 1e-12);

    ber::execute(in_path.to_str().unwrap(), "0f 00 10 20", false).unwrap();
}

#[test]
fn ber_rejects_empty_expected() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("rx.log");
    fs::write(&in_path, "t | 00 | x\n").unwrap();
    assert!(ber::execute(in_path.to_str().unwrap(), "", false).is_err());
}

#[test]
fn ber_fails_without_comparable_packets() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("rx.log");
    fs::write(&in_path, "overflow\noverflow\nt | 0f 00 | -90\n").unwrap();
    assert!(ber::execute(in_path.to_str().unwrap(), "0f 00 10 20", false).is_err());

    let empty_path = td.path().join("empty.log");
    fs::write(&empty_path, "").unwrap();
    assert!(ber::execute(empty_path.to_str().unwrap(), "0f 00 10 20", false).is_err());
}
