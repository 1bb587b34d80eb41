//! The audio-control operands: `Short Audio Descriptor` (one entry of
//! `Report/Request Short Audio Descriptor`) and `Latency Info` (the tail
//! of `Report Current Latency`).

use crate::error::{CecError, Result};
use crate::frame::Frame;

/// A single CEA-861 Short Audio Descriptor, always exactly 3 bytes.
///
/// Byte 0: `bit7` reserved, `bits6..3` audio format code, `bits2..0`
/// channel count minus one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortAudioDescriptor([u8; 3]);

impl ShortAudioDescriptor {
    pub const LEN: usize = 3;

    pub fn new(bytes: [u8; 3]) -> Self {
        ShortAudioDescriptor(bytes)
    }

    pub fn bytes(self) -> [u8; 3] {
        self.0
    }

    pub fn format_code(self) -> u8 {
        (self.0[0] >> 3) & 0x0F
    }

    pub fn channel_count(self) -> u8 {
        (self.0[0] & 0x07) + 1
    }

    /// Atmos capability is signaled by byte2's low two bits for any
    /// format code of 9 or above.
    pub fn is_atmos(self) -> bool {
        self.format_code() >= 9 && (self.0[2] & 0x03) != 0
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        if offset + Self::LEN > frame.len() {
            return Err(CecError::InvalidParam("short audio descriptor truncated in frame"));
        }
        Ok(ShortAudioDescriptor([
            frame.at(offset)?,
            frame.at(offset + 1)?,
            frame.at(offset + 2)?,
        ]))
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append_slice(&self.0)
    }

    /// Parses every remaining descriptor in the frame from `offset`,
    /// capped at 4 entries per the wire message's maximum payload.
    pub fn parse_all(frame: &Frame, offset: usize) -> Result<Vec<Self>> {
        const MAX_DESCRIPTORS: usize = 4;
        let mut descriptors = Vec::new();
        let mut pos = offset;
        while pos + Self::LEN <= frame.len() && descriptors.len() < MAX_DESCRIPTORS {
            descriptors.push(Self::from_frame(frame, pos)?);
            pos += Self::LEN;
        }
        if descriptors.is_empty() {
            return Err(CecError::InvalidParam("no short audio descriptors in frame"));
        }
        Ok(descriptors)
    }
}

/// The latency tail of `Report Current Latency`: always a video-latency
/// byte, with an optional second byte of raw flags, and a third
/// audio-output-delay byte present only when those flags' low two bits
/// equal `0x3` (`str[1] == 0x3` in the original `Operands.hpp`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyInfo {
    video_latency: u8,
    flags: Option<u8>,
    audio_output_delay: Option<u8>,
}

impl LatencyInfo {
    /// Low two bits of the flags byte meaning "delay not compensated,
    /// an explicit delay byte follows".
    const DELAY_PROVIDED: u8 = 3;

    pub fn new(video_latency: u8, flags: Option<u8>, audio_output_delay: Option<u8>) -> Self {
        LatencyInfo { video_latency, flags, audio_output_delay }
    }

    pub fn video_latency(self) -> u8 {
        self.video_latency
    }

    pub fn flags(self) -> Option<u8> {
        self.flags
    }

    pub fn audio_output_delay(self) -> Option<u8> {
        self.audio_output_delay
    }

    /// Decodes the single `LatencyInfo` occupying the rest of the frame
    /// from `offset` (at most 3 bytes: video latency, flags, delay).
    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let video_latency = frame.at(offset)?;
        if offset + 1 >= frame.len() {
            return Ok(LatencyInfo { video_latency, flags: None, audio_output_delay: None });
        }
        let flags = frame.at(offset + 1)?;
        let audio_output_delay = if flags & 0x03 == Self::DELAY_PROVIDED {
            Some(frame.at(offset + 2)?)
        } else {
            None
        };
        Ok(LatencyInfo { video_latency, flags: Some(flags), audio_output_delay })
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append(self.video_latency)?;
        if let Some(flags) = self.flags {
            frame.append(flags)?;
            if let Some(delay) = self.audio_output_delay {
                frame.append(delay)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_audio_descriptor_splits_format_and_channels() {
        let sad = ShortAudioDescriptor::new([0b0_0001_010, 0x00, 0x00]);
        assert_eq!(sad.format_code(), 1);
        assert_eq!(sad.channel_count(), 3);
    }

    #[test]
    fn short_audio_descriptor_detects_atmos_extension() {
        let sad = ShortAudioDescriptor::new([0b0_1111_000, 0x00, 0x01]);
        assert!(sad.is_atmos());
        let not_atmos = ShortAudioDescriptor::new([0b0_1111_000, 0x00, 0x00]);
        assert!(!not_atmos.is_atmos());
        let low_format = ShortAudioDescriptor::new([0b0_0001_000, 0x00, 0x01]);
        assert!(!low_format.is_atmos());
    }

    #[test]
    fn parse_all_caps_at_four_descriptors() {
        let mut frame = Frame::new();
        for _ in 0..5 {
            frame.append_slice(&[0x01, 0x02, 0x03]).unwrap();
        }
        let descriptors = ShortAudioDescriptor::parse_all(&frame, 0).unwrap();
        assert_eq!(descriptors.len(), 4);
    }

    #[test]
    fn latency_info_round_trips_with_delay_byte() {
        let info = LatencyInfo::new(0x14, Some(0x03), Some(0x05));
        let mut frame = Frame::new();
        info.serialize(&mut frame).unwrap();
        assert_eq!(frame.len(), 3);
        let decoded = LatencyInfo::from_frame(&frame, 0).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn latency_info_without_compensation_has_no_delay_byte() {
        let info = LatencyInfo::new(0x14, Some(0x01), None);
        let mut frame = Frame::new();
        info.serialize(&mut frame).unwrap();
        assert_eq!(frame.len(), 2);
        let decoded = LatencyInfo::from_frame(&frame, 0).unwrap();
        assert_eq!(decoded.audio_output_delay(), None);
    }

    #[test]
    fn latency_info_gates_the_delay_byte_on_the_low_flag_bits() {
        let frame = Frame::from_bytes(&[0x14, 0x03, 0x09]).unwrap();
        let decoded = LatencyInfo::from_frame(&frame, 0).unwrap();
        assert_eq!(decoded.audio_output_delay(), Some(0x09));

        let high_bits_only = Frame::from_bytes(&[0x14, 0xC0]).unwrap();
        let decoded = LatencyInfo::from_frame(&high_bits_only, 0).unwrap();
        assert_eq!(decoded.audio_output_delay(), None);
    }

    #[test]
    fn latency_info_accepts_video_latency_only() {
        let frame = Frame::from_bytes(&[0x14]).unwrap();
        let decoded = LatencyInfo::from_frame(&frame, 0).unwrap();
        assert_eq!(decoded.video_latency(), 0x14);
        assert_eq!(decoded.audio_output_delay(), None);
    }
}
