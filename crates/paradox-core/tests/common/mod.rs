#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;
use std::sync::Once;

use paradox_core::frame::layout;
use paradox_core::frame::reader::checksum;
use paradox_core::{EventMapTable, NamesTable};

static LOGGER_INIT: Once = Once::new();

// Tests run concurrently; the logger may only be installed once per binary.
pub fn ensure_env_logger_initialized() {
    use std::io::Write;

    LOGGER_INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .is_test(true)
            .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
            .init();
    });
}

pub fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
}

pub fn load_table() -> EventMapTable {
    let json = fs::read_to_string(golden_dir().join("table.json")).expect("read table.json");
    serde_json::from_str(&json).expect("parse table.json")
}

pub fn load_names() -> NamesTable {
    let json = fs::read_to_string(golden_dir().join("names.json")).expect("read names.json");
    serde_json::from_str(&json).expect("parse names.json")
}

pub fn decode_hex(text: &str) -> Vec<u8> {
    let text = text.trim();
    assert!(text.len() % 2 == 0, "odd hex length");
    (0..text.len())
        .step_by(2)
        .map(|idx| u8::from_str_radix(&text[idx..idx + 2], 16).expect("hex byte"))
        .collect()
}

/// Live event record with a valid checksum.
pub fn live_event(major: u8, minor: u8, partition: u8, label: &[u8]) -> Vec<u8> {
    let mut record = vec![0u8; layout::FRAME_LEN];
    record[layout::COMMAND_OFFSET] = layout::LIVE_EVENT_COMMAND << 4;
    record[layout::EVENT_SOURCE_OFFSET] = 0xFF;
    record[layout::TIME_RANGE].copy_from_slice(&[20, 19, 6, 1, 12, 30]);
    record[layout::MAJOR_OFFSET] = major;
    record[layout::MINOR_OFFSET] = minor;
    record[layout::PARTITION_OFFSET] = partition;
    let mut padded = [b' '; layout::LABEL_LEN];
    padded[..label.len()].copy_from_slice(label);
    record[layout::LABEL_RANGE].copy_from_slice(&padded);
    seal(&mut record);
    record
}

pub fn seal(record: &mut [u8]) {
    record[layout::CHECKSUM_OFFSET] = checksum(&record[layout::CHECKSUM_RANGE]);
}
