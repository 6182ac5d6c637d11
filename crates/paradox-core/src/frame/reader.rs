use std::ops::Range;

use time::{Date, Month, PrimitiveDateTime, Time};

use super::error::FrameError;
use super::layout;

pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    fn too_short(&self, needed: usize) -> FrameError {
        FrameError::TooShort {
            needed,
            actual: self.payload.len(),
        }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FrameError> {
        if self.payload.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn byte(&self, offset: usize) -> Result<u8, FrameError> {
        let [value] = self.array(offset)?;
        Ok(value)
    }

    /// `N` bytes starting at `offset`, copied out so callers can destructure
    /// them or feed them to `from_be_bytes`.
    pub fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], FrameError> {
        self.bytes(offset..offset + N)?
            .try_into()
            .map_err(|_| self.too_short(offset + N))
    }

    pub fn bytes(&self, range: Range<usize>) -> Result<&'a [u8], FrameError> {
        let end = range.end;
        self.payload.get(range).ok_or_else(|| self.too_short(end))
    }

    /// Command nibble (high half of the first byte).
    pub fn read_command(&self) -> Result<u8, FrameError> {
        Ok(self.byte(layout::COMMAND_OFFSET)? >> 4)
    }

    /// Status flags (low half of the first byte).
    pub fn read_status(&self) -> Result<u8, FrameError> {
        Ok(self.byte(layout::COMMAND_OFFSET)? & 0x0F)
    }

    pub fn read_label(&self) -> Result<[u8; layout::LABEL_LEN], FrameError> {
        self.array(layout::LABEL_RANGE.start)
    }

    /// Century, year, month, day, hour and minute, one byte each.
    pub fn read_timestamp(&self) -> Result<PrimitiveDateTime, FrameError> {
        let [century, year, month, day, hour, minute] = self.array(layout::TIME_RANGE.start)?;
        let year = century as u16 * 100 + year as u16;
        let invalid = FrameError::InvalidTimestamp {
            year,
            month,
            day,
            hour,
            minute,
        };

        let month_value = Month::try_from(month).map_err(|_| invalid.clone())?;
        let date = Date::from_calendar_date(year as i32, month_value, day)
            .map_err(|_| invalid.clone())?;
        let time = Time::from_hms(hour, minute, 0).map_err(|_| invalid)?;
        Ok(PrimitiveDateTime::new(date, time))
    }

    pub fn verify_checksum(&self) -> Result<(), FrameError> {
        let expected = checksum(self.bytes(layout::CHECKSUM_RANGE)?);
        let actual = self.byte(layout::CHECKSUM_OFFSET)?;
        if expected != actual {
            return Err(FrameError::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }
}

/// Sum of `data` modulo 256.
///
/// # Examples
/// ```
/// use paradox_core::frame::reader::checksum;
///
/// assert_eq!(checksum(&[0xff, 0x02]), 0x01);
/// ```
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}
