pub const FRAME_LEN: usize = 37;

pub const COMMAND_OFFSET: usize = 0;
pub const EVENT_SOURCE_OFFSET: usize = 1;
pub const EVENT_NR_RANGE: std::ops::Range<usize> = 2..4;
pub const TIME_RANGE: std::ops::Range<usize> = 4..10;

pub const MAJOR_OFFSET: usize = 10;
pub const MINOR_OFFSET: usize = 11;
pub const PARTITION_OFFSET: usize = 13;
pub const MODULE_SERIAL_RANGE: std::ops::Range<usize> = 14..18;

pub const LABEL_TYPE_OFFSET: usize = 18;
pub const LABEL_LEN: usize = 16;
pub const LABEL_RANGE: std::ops::Range<usize> = 19..19 + LABEL_LEN;

pub const CHECKSUM_OFFSET: usize = 36;
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 0..CHECKSUM_OFFSET;

/// High nibble of the first byte for a live event record.
pub const LIVE_EVENT_COMMAND: u8 = 0x0E;
