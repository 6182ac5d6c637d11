use log::debug;
use time::PrimitiveDateTime;

use super::error::FrameError;
use super::layout;
use super::reader::FrameReader;

/// Fields of one live event record, as read off the wire.
///
/// The command nibble is carried through unchecked; rejecting foreign
/// records is the event parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub command: u8,
    pub status: u8,
    pub event_source: u8,
    pub event_nr: u16,
    pub timestamp: PrimitiveDateTime,
    pub partition: u8,
    pub module_serial: u32,
    pub label_type: Option<u8>,
    pub label: [u8; layout::LABEL_LEN],
    pub major: u16,
    pub minor: u16,
}

impl RawFrame {
    /// Label bytes with trailing NUL/space padding removed.
    pub fn label_bytes(&self) -> &[u8] {
        let end = self
            .label
            .iter()
            .rposition(|b| *b != 0 && *b != b' ')
            .map_or(0, |idx| idx + 1);
        &self.label[..end]
    }
}

pub fn parse_live_event(payload: &[u8]) -> Result<RawFrame, FrameError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::FRAME_LEN)?;
    reader.verify_checksum()?;

    let frame = RawFrame {
        command: reader.read_command()?,
        status: reader.read_status()?,
        event_source: reader.byte(layout::EVENT_SOURCE_OFFSET)?,
        event_nr: u16::from_be_bytes(reader.array(layout::EVENT_NR_RANGE.start)?),
        timestamp: reader.read_timestamp()?,
        partition: reader.byte(layout::PARTITION_OFFSET)?,
        module_serial: u32::from_be_bytes(reader.array(layout::MODULE_SERIAL_RANGE.start)?),
        label_type: Some(reader.byte(layout::LABEL_TYPE_OFFSET)?),
        label: reader.read_label()?,
        major: reader.byte(layout::MAJOR_OFFSET)? as u16,
        minor: reader.byte(layout::MINOR_OFFSET)? as u16,
    };
    debug!(
        "live event frame #{}: major={} minor={} partition={}",
        frame.event_nr, frame.major, frame.minor, frame.partition
    );
    Ok(frame)
}
