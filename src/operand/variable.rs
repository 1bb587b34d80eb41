//! Variable-length operands that use bit7 of each byte as an
//! "another byte follows" continuation flag, capped at 4 bytes.

use crate::error::{CecError, Result};
use crate::frame::Frame;

const EXTENSION_BIT: u8 = 0x80;
const MAX_BYTES: usize = 4;

/// Reads up to `MAX_BYTES` starting at `offset`, stopping at the first
/// byte whose extension bit (bit7) is clear, or at `MAX_BYTES` if none
/// is seen. Returns the raw bytes (extension bit still set on all but
/// the last, unless the cap was hit) and how many bytes were consumed.
fn read_extended(frame: &Frame, offset: usize) -> Result<(Vec<u8>, usize)> {
    let mut bytes = Vec::with_capacity(MAX_BYTES);
    for i in 0..MAX_BYTES {
        let byte = frame.at(offset + i)?;
        bytes.push(byte);
        if byte & EXTENSION_BIT == 0 {
            return Ok((bytes, i + 1));
        }
    }
    Ok((bytes, MAX_BYTES))
}

fn write_extended(frame: &mut Frame, mut bytes: Vec<u8>) -> Result<()> {
    if bytes.is_empty() {
        return Err(CecError::InvalidParam("extended operand needs at least one byte"));
    }
    if bytes.len() > MAX_BYTES {
        return Err(CecError::InvalidParam("extended operand exceeds 4 bytes"));
    }
    let last = bytes.len() - 1;
    for (i, byte) in bytes.iter_mut().enumerate() {
        if i == last {
            *byte &= !EXTENSION_BIT;
        } else {
            *byte |= EXTENSION_BIT;
        }
    }
    frame.append_slice(&bytes)
}

/// The remote-control profile reported by `Report Features`, one to
/// four bytes wide depending on how many profile bytes the device sets.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RcProfile {
    payload: Vec<u8>,
}

impl RcProfile {
    pub fn new(payload: Vec<u8>) -> Result<Self> {
        if payload.is_empty() || payload.len() > MAX_BYTES {
            return Err(CecError::InvalidParam("RC profile must be 1..=4 bytes"));
        }
        Ok(RcProfile { payload })
    }

    /// The profile payload with every extension bit cleared.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decodes starting at `offset`, returning the value and the number
    /// of bytes consumed from the frame so the caller can advance past it.
    pub fn from_frame(frame: &Frame, offset: usize) -> Result<(Self, usize)> {
        let (mut bytes, consumed) = read_extended(frame, offset)?;
        for byte in &mut bytes {
            *byte &= !EXTENSION_BIT;
        }
        Ok((RcProfile { payload: bytes }, consumed))
    }

    pub fn serialize(&self, frame: &mut Frame) -> Result<()> {
        write_extended(frame, self.payload.clone())
    }
}

/// The device-feature bitfield reported by `Report Features`, one to
/// four bytes wide.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeviceFeatures {
    payload: Vec<u8>,
}

impl DeviceFeatures {
    pub fn new(payload: Vec<u8>) -> Result<Self> {
        if payload.is_empty() || payload.len() > MAX_BYTES {
            return Err(CecError::InvalidParam("device features must be 1..=4 bytes"));
        }
        Ok(DeviceFeatures { payload })
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<(Self, usize)> {
        let (mut bytes, consumed) = read_extended(frame, offset)?;
        for byte in &mut bytes {
            *byte &= !EXTENSION_BIT;
        }
        Ok((DeviceFeatures { payload: bytes }, consumed))
    }

    pub fn serialize(&self, frame: &mut Frame) -> Result<()> {
        write_extended(frame, self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_profile_clears_extension_bit_on_wire() {
        let profile = RcProfile::new(vec![0x02]).unwrap();
        let mut frame = Frame::new();
        profile.serialize(&mut frame).unwrap();
        assert_eq!(frame.at(0).unwrap(), 0x02);
    }

    #[test]
    fn multi_byte_profile_sets_extension_bit_on_all_but_last() {
        let profile = RcProfile::new(vec![0x01, 0x02, 0x03]).unwrap();
        let mut frame = Frame::new();
        profile.serialize(&mut frame).unwrap();
        assert_eq!(frame.at(0).unwrap(), 0x01 | EXTENSION_BIT);
        assert_eq!(frame.at(1).unwrap(), 0x02 | EXTENSION_BIT);
        assert_eq!(frame.at(2).unwrap(), 0x03);
    }

    #[test]
    fn round_trips_through_frame() {
        let features = DeviceFeatures::new(vec![0x12, 0x34]).unwrap();
        let mut frame = Frame::new();
        features.serialize(&mut frame).unwrap();
        let (decoded, consumed) = DeviceFeatures::from_frame(&frame, 0).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(decoded.payload(), &[0x12, 0x34]);
    }

    #[test]
    fn four_bytes_is_the_cap() {
        let features = DeviceFeatures::new(vec![0x01, 0x02, 0x03, 0x04]).unwrap();
        assert!(DeviceFeatures::new(vec![0x01; 5]).is_err());
        let mut frame = Frame::new();
        features.serialize(&mut frame).unwrap();
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn missing_terminator_stops_at_the_four_byte_cap() {
        let frame = Frame::from_bytes(&[0x81, 0x82, 0x83, 0x84]).unwrap();
        let (profile, consumed) = RcProfile::from_frame(&frame, 0).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(profile.payload(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn single_profile_byte_decodes_with_one_consumed() {
        let frame = Frame::from_bytes(&[0x02]).unwrap();
        let (profile, consumed) = RcProfile::from_frame(&frame, 0).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(profile.payload(), &[0x02]);
    }
}
