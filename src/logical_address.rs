//! 4-bit device identity on the CEC bus.

use crate::error::{CecError, Result};

/// The device-type class a [`LogicalAddress`] maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTypeClass {
    Tv,
    RecordingDevice,
    Tuner,
    PlaybackDevice,
    AudioSystem,
    Reserved,
    SpecificUse,
    Broadcast,
}

/// A CEC logical address: a value in `0..=15` naming a device on the bus.
///
/// `0xF` is the broadcast/unregistered address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LogicalAddress(u8);

impl LogicalAddress {
    pub const TV: LogicalAddress = LogicalAddress(0);
    pub const RECORDING_DEVICE_1: LogicalAddress = LogicalAddress(1);
    pub const RECORDING_DEVICE_2: LogicalAddress = LogicalAddress(2);
    pub const TUNER_1: LogicalAddress = LogicalAddress(3);
    pub const PLAYBACK_DEVICE_1: LogicalAddress = LogicalAddress(4);
    pub const AUDIO_SYSTEM: LogicalAddress = LogicalAddress(5);
    pub const TUNER_2: LogicalAddress = LogicalAddress(6);
    pub const TUNER_3: LogicalAddress = LogicalAddress(7);
    pub const PLAYBACK_DEVICE_2: LogicalAddress = LogicalAddress(8);
    pub const RECORDING_DEVICE_3: LogicalAddress = LogicalAddress(9);
    pub const TUNER_4: LogicalAddress = LogicalAddress(10);
    pub const PLAYBACK_DEVICE_3: LogicalAddress = LogicalAddress(11);
    pub const RESERVED_1: LogicalAddress = LogicalAddress(12);
    pub const RESERVED_2: LogicalAddress = LogicalAddress(13);
    pub const FREE_USE: LogicalAddress = LogicalAddress(14);
    pub const UNREGISTERED: LogicalAddress = LogicalAddress(15);
    pub const BROADCAST: LogicalAddress = LogicalAddress(15);

    /// Builds a logical address from a raw nibble value.
    ///
    /// Fails with [`CecError::InvalidParam`] if `value` is not in `0..=15`.
    pub fn new(value: u8) -> Result<Self> {
        if value > 0xF {
            return Err(CecError::InvalidParam("logical address out of range"));
        }
        Ok(LogicalAddress(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_broadcast(self) -> bool {
        self.0 == Self::BROADCAST.0
    }

    /// The device-type class this address maps to.
    pub fn device_type_class(self) -> DeviceTypeClass {
        match self.0 {
            0 => DeviceTypeClass::Tv,
            1 | 2 | 9 => DeviceTypeClass::RecordingDevice,
            3 | 6 | 7 | 10 => DeviceTypeClass::Tuner,
            4 | 8 | 11 => DeviceTypeClass::PlaybackDevice,
            5 => DeviceTypeClass::AudioSystem,
            12 | 13 => DeviceTypeClass::Reserved,
            14 => DeviceTypeClass::SpecificUse,
            15 => DeviceTypeClass::Broadcast,
            _ => unreachable!("LogicalAddress is always constructed in 0..=15"),
        }
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "TV",
            1 => "Recording Device 1",
            2 => "Recording Device 2",
            3 => "Tuner 1",
            4 => "Playback Device 1",
            5 => "Audio System",
            6 => "Tuner 2",
            7 => "Tuner 3",
            8 => "Playback Device 2",
            9 => "Recording Device 3",
            10 => "Tuner 4",
            11 => "Playback Device 3",
            12 => "Reserved 12",
            13 => "Reserved 13",
            14 => "Specific Use",
            15 => "Broadcast/Unregistered",
            _ => unreachable!("LogicalAddress is always constructed in 0..=15"),
        }
    }
}

impl std::fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LogicalAddress {
    type Err = CecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TV" => Ok(LogicalAddress::TV),
            "RECORDING_DEVICE_1" => Ok(LogicalAddress::RECORDING_DEVICE_1),
            "RECORDING_DEVICE_2" => Ok(LogicalAddress::RECORDING_DEVICE_2),
            "TUNER_1" => Ok(LogicalAddress::TUNER_1),
            "PLAYBACK_DEVICE_1" => Ok(LogicalAddress::PLAYBACK_DEVICE_1),
            "AUDIO_SYSTEM" => Ok(LogicalAddress::AUDIO_SYSTEM),
            "TUNER_2" => Ok(LogicalAddress::TUNER_2),
            "TUNER_3" => Ok(LogicalAddress::TUNER_3),
            "PLAYBACK_DEVICE_2" => Ok(LogicalAddress::PLAYBACK_DEVICE_2),
            "RECORDING_DEVICE_3" => Ok(LogicalAddress::RECORDING_DEVICE_3),
            "TUNER_4" => Ok(LogicalAddress::TUNER_4),
            "PLAYBACK_DEVICE_3" => Ok(LogicalAddress::PLAYBACK_DEVICE_3),
            "RESERVED_1" => Ok(LogicalAddress::RESERVED_1),
            "RESERVED_2" => Ok(LogicalAddress::RESERVED_2),
            "FREE_USE" => Ok(LogicalAddress::FREE_USE),
            "BROADCAST" | "UNREGISTERED" => Ok(LogicalAddress::BROADCAST),
            _ => Err(CecError::InvalidParam("unrecognized logical address name")),
        }
    }
}
