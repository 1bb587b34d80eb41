//! Fixed-length operands: one byte to three bytes, no extension-bit
//! continuation and no repetition.

use crate::error::{CecError, Result};
use crate::frame::Frame;

/// Shared parse rule for a fixed-width operand: take up to `max_len` bytes
/// starting at `offset`, but no more than the frame actually has left.
/// A zero-length result is `InvalidParam`, matching the CEC source's
/// `str.size() && str.size() <= getMaxLen()` validation.
fn take(frame: &Frame, offset: usize, max_len: usize) -> Result<Vec<u8>> {
    if offset >= frame.len() {
        return Err(CecError::InvalidParam("operand has no bytes remaining in frame"));
    }
    let end = (offset + max_len).min(frame.len());
    let mut bytes = Vec::with_capacity(end - offset);
    for i in offset..end {
        bytes.push(frame.at(i)?);
    }
    Ok(bytes)
}

macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub const MAX_LEN: usize = 1;

            pub fn from_byte(byte: u8) -> Result<Self> {
                match byte {
                    $($value => Ok($name::$variant),)+
                    _ => Err(CecError::InvalidParam(concat!(stringify!($name), " value out of range"))),
                }
            }

            pub fn to_byte(self) -> u8 {
                self as u8
            }

            pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
                let bytes = take(frame, offset, Self::MAX_LEN)?;
                if bytes.len() != Self::MAX_LEN {
                    return Err(CecError::InvalidParam(concat!(stringify!($name), " truncated in frame")));
                }
                Self::from_byte(bytes[0])
            }

            pub fn serialize(self, frame: &mut Frame) -> Result<()> {
                frame.append(self.to_byte())
            }
        }
    };
}

byte_enum! {
    /// The reason carried by a `Feature Abort` message.
    pub enum AbortReason {
        UnrecognizedOpcode = 0,
        NotInCorrectModeToRespond = 1,
        CannotProvideSource = 2,
        InvalidOperand = 3,
        Refused = 4,
        UnableToDetermine = 5,
    }
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AbortReason::UnrecognizedOpcode => "Unrecognized opcode",
            AbortReason::NotInCorrectModeToRespond => "Not in correct mode to respond",
            AbortReason::CannotProvideSource => "Cannot provide source",
            AbortReason::InvalidOperand => "Invalid operand",
            AbortReason::Refused => "Refused",
            AbortReason::UnableToDetermine => "Unable to determine",
        };
        write!(f, "{s}")
    }
}

byte_enum! {
    /// The class of device reporting or being asked about, distinct from
    /// the fixed [`crate::logical_address::DeviceTypeClass`] mapping.
    pub enum DeviceType {
        Tv = 0,
        RecordingDevice = 1,
        Reserved = 2,
        Tuner = 3,
        PlaybackDevice = 4,
        AudioSystem = 5,
        PureCecSwitch = 6,
        VideoProcessor = 7,
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeviceType::Tv => "TV",
            DeviceType::RecordingDevice => "Recording Device",
            DeviceType::Reserved => "Reserved",
            DeviceType::Tuner => "Tuner",
            DeviceType::PlaybackDevice => "Playback Device",
            DeviceType::AudioSystem => "Audio System",
            DeviceType::PureCecSwitch => "Pure CEC Switch",
            DeviceType::VideoProcessor => "Video Processor",
        };
        write!(f, "{s}")
    }
}

byte_enum! {
    /// The CEC protocol version, `1.3a`/`1.4`/`2.0`. Values 0..=3 are
    /// reserved and rejected rather than silently accepted.
    pub enum Version {
        V1_3a = 4,
        V1_4 = 5,
        V2_0 = 6,
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Version::V1_3a => "Version 1.3a",
            Version::V1_4 => "Version 1.4",
            Version::V2_0 => "Version 2.0",
        };
        write!(f, "{s}")
    }
}

byte_enum! {
    /// Power state reported by `Report Power Status` / requested by
    /// `Give Device Power Status`.
    pub enum PowerStatus {
        On = 0,
        Standby = 1,
        InTransitionStandbyToOn = 2,
        InTransitionOnToStandby = 3,
        NotKnown = 4,
        FeatureAbort = 5,
    }
}

impl std::fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PowerStatus::On => "On",
            PowerStatus::Standby => "Standby",
            PowerStatus::InTransitionStandbyToOn => "In transition Standby to On",
            PowerStatus::InTransitionOnToStandby => "In transition On to Standby",
            PowerStatus::NotKnown => "Not Known",
            PowerStatus::FeatureAbort => "Feature Abort",
        };
        write!(f, "{s}")
    }
}

byte_enum! {
    /// `{Off, On}`, carried by `Set System Audio Mode`.
    pub enum SystemAudioStatus {
        Off = 0,
        On = 1,
    }
}

impl std::fmt::Display for SystemAudioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if *self == SystemAudioStatus::On { "On" } else { "Off" })
    }
}

/// Three raw bytes identifying the manufacturer, carried by `Device
/// Vendor ID` / `Give Device Vendor ID`'s reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VendorId([u8; 3]);

impl VendorId {
    pub const MAX_LEN: usize = 3;

    pub fn new(byte0: u8, byte1: u8, byte2: u8) -> Self {
        VendorId([byte0, byte1, byte2])
    }

    pub fn bytes(self) -> [u8; 3] {
        self.0
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("vendor ID truncated in frame"));
        }
        Ok(VendorId([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append_slice(&self.0)
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// Raw, un-terminated byte runs. The CEC spec never clarifies whether OSD
/// Name/String are NUL-terminated, so the source consumes every remaining
/// frame byte up to its max length and this crate does the same.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CecBytes {
    bytes: Vec<u8>,
}

impl CecBytes {
    fn new(bytes: &[u8], max_len: usize) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > max_len {
            return Err(CecError::InvalidParam("operand length out of range"));
        }
        Ok(CecBytes { bytes: bytes.to_vec() })
    }

    fn from_frame(frame: &Frame, offset: usize, max_len: usize) -> Result<Self> {
        let bytes = take(frame, offset, max_len)?;
        CecBytes::new(&bytes, max_len)
    }

    fn serialize(&self, frame: &mut Frame) -> Result<()> {
        frame.append_slice(&self.bytes)
    }
}

/// Up to 14 raw bytes naming the device on an on-screen display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OsdName(CecBytes);

impl OsdName {
    pub const MAX_LEN: usize = 14;

    pub fn new(bytes: &[u8]) -> Result<Self> {
        Ok(OsdName(CecBytes::new(bytes, Self::MAX_LEN)?))
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        Ok(OsdName(CecBytes::from_frame(frame, offset, Self::MAX_LEN)?))
    }

    pub fn serialize(&self, frame: &mut Frame) -> Result<()> {
        self.0.serialize(frame)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0.bytes
    }
}

impl std::fmt::Display for OsdName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0.bytes))
    }
}

/// Up to 13 raw bytes of free-form text, carried by `Set OSD String`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OsdString(CecBytes);

impl OsdString {
    pub const MAX_LEN: usize = 13;

    pub fn new(bytes: &[u8]) -> Result<Self> {
        Ok(OsdString(CecBytes::new(bytes, Self::MAX_LEN)?))
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        Ok(OsdString(CecBytes::from_frame(frame, offset, Self::MAX_LEN)?))
    }

    pub fn serialize(&self, frame: &mut Frame) -> Result<()> {
        self.0.serialize(frame)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0.bytes
    }
}

impl std::fmt::Display for OsdString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0.bytes))
    }
}

/// Three ASCII bytes, an ISO 639-2 language code, carried by `Set/Get
/// Menu Language`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language([u8; 3]);

impl Language {
    pub const MAX_LEN: usize = 3;

    pub fn new(code: &str) -> Result<Self> {
        if !code.is_ascii() || code.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("language code must be 3 ASCII bytes"));
        }
        let bytes = code.as_bytes();
        Ok(Language([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("language code truncated in frame"));
        }
        Ok(Language([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append_slice(&self.0)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A remote-control user command code (`User Control Pressed`'s
/// operand). The CEC spec defines roughly a hundred of these; only the
/// ones the retrieved source names are given constants, but any other
/// byte value still round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiCommand(u8);

impl UiCommand {
    pub const MAX_LEN: usize = 1;

    pub const SELECT: UiCommand = UiCommand(0x00);
    pub const UP: UiCommand = UiCommand(0x01);
    pub const DOWN: UiCommand = UiCommand(0x02);
    pub const LEFT: UiCommand = UiCommand(0x03);
    pub const RIGHT: UiCommand = UiCommand(0x04);
    pub const HOME: UiCommand = UiCommand(0x09);
    pub const BACK: UiCommand = UiCommand(0x0D);
    pub const NUM_0: UiCommand = UiCommand(0x20);
    pub const NUM_1: UiCommand = UiCommand(0x21);
    pub const NUM_2: UiCommand = UiCommand(0x22);
    pub const NUM_3: UiCommand = UiCommand(0x23);
    pub const NUM_4: UiCommand = UiCommand(0x24);
    pub const NUM_5: UiCommand = UiCommand(0x25);
    pub const NUM_6: UiCommand = UiCommand(0x26);
    pub const NUM_7: UiCommand = UiCommand(0x27);
    pub const NUM_8: UiCommand = UiCommand(0x28);
    pub const NUM_9: UiCommand = UiCommand(0x29);
    pub const VOLUME_UP: UiCommand = UiCommand(0x41);
    pub const VOLUME_DOWN: UiCommand = UiCommand(0x42);
    pub const MUTE: UiCommand = UiCommand(0x43);
    pub const MUTE_FUNCTION: UiCommand = UiCommand(0x65);
    pub const RESTORE_VOLUME_FUNCTION: UiCommand = UiCommand(0x66);
    pub const POWER_OFF_FUNCTION: UiCommand = UiCommand(0x6C);
    pub const POWER_ON_FUNCTION: UiCommand = UiCommand(0x6D);

    pub fn new(code: u8) -> Self {
        UiCommand(code)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("UI command truncated in frame"));
        }
        Ok(UiCommand(bytes[0]))
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append(self.0)
    }
}

/// `bit7 = mute, bits0..6 = volume`, carried by `Report Audio Status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioStatus {
    mute: bool,
    volume: u8,
}

impl AudioStatus {
    pub const MAX_LEN: usize = 1;

    /// `volume` is masked to 7 bits so the invariant holds by construction.
    pub fn new(mute: bool, volume: u8) -> Self {
        AudioStatus { mute, volume: volume & 0x7F }
    }

    pub fn is_muted(self) -> bool {
        self.mute
    }

    pub fn volume(self) -> u8 {
        self.volume
    }

    fn to_byte(self) -> u8 {
        ((self.mute as u8) << 7) | self.volume
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("audio status truncated in frame"));
        }
        let byte = bytes[0];
        Ok(AudioStatus { mute: byte & 0x80 != 0, volume: byte & 0x7F })
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append(self.to_byte())
    }
}

/// `bits7..6 = format id, bits5..0 = audio format code`, one entry of a
/// `Request Short Audio Descriptor` message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestAudioFormat {
    format_id: u8,
    format_code: u8,
}

impl RequestAudioFormat {
    pub const MAX_LEN: usize = 1;

    pub fn new(format_id: u8, format_code: u8) -> Self {
        RequestAudioFormat {
            format_id: format_id & 0x3,
            format_code: format_code & 0x3F,
        }
    }

    pub fn format_id(self) -> u8 {
        self.format_id
    }

    pub fn format_code(self) -> u8 {
        self.format_code
    }

    fn to_byte(self) -> u8 {
        (self.format_id << 6) | self.format_code
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("request audio format truncated in frame"));
        }
        let byte = bytes[0];
        Ok(RequestAudioFormat { format_id: byte >> 6, format_code: byte & 0x3F })
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append(self.to_byte())
    }
}

/// The `All Device Types` bitfield from `Report Features` (CEC 2.0).
/// Bit positions per the HDMI-CEC 2.0 "All Device Types Operand" table:
/// bit7 TV, bit6 Recording Device, bit4 Tuner, bit3 Playback Device,
/// bit2 Audio System, bit1 CEC Switch (bits 0 and 5 reserved). This
/// resolves the Open Question the source left about exact bit
/// positions; see DESIGN.md.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AllDeviceTypes(u8);

impl AllDeviceTypes {
    pub const MAX_LEN: usize = 1;

    const TV: u8 = 7;
    const RECORDING_DEVICE: u8 = 6;
    const TUNER: u8 = 4;
    const PLAYBACK_DEVICE: u8 = 3;
    const AUDIO_SYSTEM: u8 = 2;
    const CEC_SWITCH: u8 = 1;

    pub fn new(
        tv: bool,
        recording_device: bool,
        tuner: bool,
        playback_device: bool,
        audio_system: bool,
        cec_switch: bool,
    ) -> Self {
        let mut byte = 0u8;
        byte |= (tv as u8) << Self::TV;
        byte |= (recording_device as u8) << Self::RECORDING_DEVICE;
        byte |= (tuner as u8) << Self::TUNER;
        byte |= (playback_device as u8) << Self::PLAYBACK_DEVICE;
        byte |= (audio_system as u8) << Self::AUDIO_SYSTEM;
        byte |= (cec_switch as u8) << Self::CEC_SWITCH;
        AllDeviceTypes(byte)
    }

    pub fn is_tv(self) -> bool {
        self.0 & (1 << Self::TV) != 0
    }

    pub fn is_recording_device(self) -> bool {
        self.0 & (1 << Self::RECORDING_DEVICE) != 0
    }

    pub fn is_tuner(self) -> bool {
        self.0 & (1 << Self::TUNER) != 0
    }

    pub fn is_playback_device(self) -> bool {
        self.0 & (1 << Self::PLAYBACK_DEVICE) != 0
    }

    pub fn is_audio_system(self) -> bool {
        self.0 & (1 << Self::AUDIO_SYSTEM) != 0
    }

    pub fn is_cec_switch(self) -> bool {
        self.0 & (1 << Self::CEC_SWITCH) != 0
    }

    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let bytes = take(frame, offset, Self::MAX_LEN)?;
        if bytes.len() != Self::MAX_LEN {
            return Err(CecError::InvalidParam("all device types truncated in frame"));
        }
        Ok(AllDeviceTypes(bytes[0]))
    }

    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn abort_reason_round_trips() {
        let mut frame = Frame::new();
        AbortReason::UnableToDetermine.serialize(&mut frame).unwrap();
        assert_eq!(AbortReason::from_frame(&frame, 0).unwrap(), AbortReason::UnableToDetermine);
    }

    #[test]
    fn abort_reason_admits_zero() {
        assert_eq!(AbortReason::from_byte(0).unwrap(), AbortReason::UnrecognizedOpcode);
    }

    #[test]
    fn version_rejects_reserved_values() {
        assert!(Version::from_byte(0).is_err());
        assert!(Version::from_byte(3).is_err());
        assert_eq!(Version::from_byte(4).unwrap(), Version::V1_3a);
    }

    #[test]
    fn power_status_allows_full_0_to_5_range() {
        for v in 0..=5u8 {
            assert!(PowerStatus::from_byte(v).is_ok());
        }
        assert!(PowerStatus::from_byte(6).is_err());
    }

    #[test]
    fn vendor_id_round_trips() {
        let id = VendorId::new(0x00, 0x19, 0xFB);
        let mut frame = Frame::new();
        id.serialize(&mut frame).unwrap();
        assert_eq!(VendorId::from_frame(&frame, 0).unwrap(), id);
    }

    #[test]
    fn osd_name_rejects_over_long_and_empty() {
        assert!(OsdName::new(&[0u8; 15]).is_err());
        assert!(OsdName::new(&[]).is_err());
        assert!(OsdName::new(&[0u8; 14]).is_ok());
    }

    #[test]
    fn osd_name_from_frame_takes_whatever_remains() {
        let frame = Frame::from_bytes(b"Living Room").unwrap();
        let name = OsdName::from_frame(&frame, 0).unwrap();
        assert_eq!(name.as_bytes(), b"Living Room");
    }

    #[test]
    fn language_requires_exactly_three_ascii_bytes() {
        assert!(Language::new("eng").is_ok());
        assert!(Language::new("en").is_err());
        assert!(Language::new("english").is_err());
    }

    #[rstest]
    #[case(0x00, 0x00, false, 0x00)]
    #[case(0x80, 0x00, true, 0x00)]
    #[case(0x55, 0x55, false, 0x55)]
    fn audio_status_splits_mute_and_volume(
        #[case] byte: u8,
        #[case] _unused: u8,
        #[case] muted: bool,
        #[case] volume: u8,
    ) {
        let frame = Frame::from_bytes(&[byte]).unwrap();
        let status = AudioStatus::from_frame(&frame, 0).unwrap();
        assert_eq!(status.is_muted(), muted);
        assert_eq!(status.volume(), volume);
    }

    #[test]
    fn request_audio_format_splits_id_and_code() {
        let fmt = RequestAudioFormat::new(1, 9);
        let mut frame = Frame::new();
        fmt.serialize(&mut frame).unwrap();
        let parsed = RequestAudioFormat::from_frame(&frame, 0).unwrap();
        assert_eq!(parsed.format_id(), 1);
        assert_eq!(parsed.format_code(), 9);
    }

    #[test]
    fn all_device_types_round_trips_each_bit() {
        let types = AllDeviceTypes::new(true, false, true, false, true, false);
        let mut frame = Frame::new();
        types.serialize(&mut frame).unwrap();
        let parsed = AllDeviceTypes::from_frame(&frame, 0).unwrap();
        assert!(parsed.is_tv());
        assert!(!parsed.is_recording_device());
        assert!(parsed.is_tuner());
        assert!(!parsed.is_playback_device());
        assert!(parsed.is_audio_system());
        assert!(!parsed.is_cec_switch());
    }
}
