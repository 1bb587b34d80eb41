//! The second byte of a CEC frame: the operation being carried.

/// An 8-bit CEC opcode.
///
/// `Unknown` carries the raw byte so a receiver that doesn't recognize it
/// can still reply with `Feature Abort(Unrecognized opcode)` instead of
/// losing the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    ActiveSource,
    ImageViewOn,
    TextViewOn,
    InactiveSource,
    RequestActiveSource,
    RoutingChange,
    RoutingInformation,
    SetStreamPath,
    Standby,
    RecordOff,
    RecordOn,
    RecordStatus,
    RecordTvScreen,
    ClearAnalogueTimer,
    ClearDigitalTimer,
    ClearExternalTimer,
    SetAnalogueTimer,
    SetDigitalTimer,
    SetExternalTimer,
    SetTimerProgramTitle,
    TimerClearedStatus,
    TimerStatus,
    CecVersion,
    GetCecVersion,
    GivePhysicalAddress,
    GetMenuLanguage,
    ReportPhysicalAddress,
    SetMenuLanguage,
    DeckControl,
    DeckStatus,
    GiveDeckStatus,
    Play,
    GiveTunerDeviceStatus,
    SelectAnalogueService,
    SelectDigitalService,
    TunerDeviceStatus,
    TunerStepDecrement,
    TunerStepIncrement,
    DeviceVendorId,
    GiveDeviceVendorId,
    VendorCommand,
    VendorCommandWithId,
    VendorRemoteButtonDown,
    VendorRemoteButtonUp,
    SetOsdString,
    GiveOsdName,
    SetOsdName,
    MenuRequest,
    MenuStatus,
    UserControlPressed,
    UserControlReleased,
    GiveDevicePowerStatus,
    ReportPowerStatus,
    FeatureAbort,
    Abort,
    GiveAudioStatus,
    GiveSystemAudioModeStatus,
    ReportAudioStatus,
    SetSystemAudioMode,
    SystemAudioModeRequest,
    SystemAudioModeStatus,
    SetAudioRate,
    ReportShortAudioDescriptor,
    RequestShortAudioDescriptor,
    InitiateArc,
    ReportArcInitiated,
    ReportArcTerminated,
    RequestArcInitiation,
    RequestArcTermination,
    TerminateArc,
    Cdc,
    GiveFeatures,
    ReportFeatures,
    RequestCurrentLatency,
    ReportCurrentLatency,
    Unknown(u8),
}

impl Opcode {
    /// Decodes the raw opcode byte.
    pub fn from_byte(byte: u8) -> Opcode {
        match byte {
            0x82 => Opcode::ActiveSource,
            0x04 => Opcode::ImageViewOn,
            0x0D => Opcode::TextViewOn,
            0x9D => Opcode::InactiveSource,
            0x85 => Opcode::RequestActiveSource,
            0x80 => Opcode::RoutingChange,
            0x81 => Opcode::RoutingInformation,
            0x86 => Opcode::SetStreamPath,
            0x36 => Opcode::Standby,
            0x0B => Opcode::RecordOff,
            0x09 => Opcode::RecordOn,
            0x0A => Opcode::RecordStatus,
            0x0F => Opcode::RecordTvScreen,
            0x33 => Opcode::ClearAnalogueTimer,
            0x99 => Opcode::ClearDigitalTimer,
            0xA1 => Opcode::ClearExternalTimer,
            0x34 => Opcode::SetAnalogueTimer,
            0x97 => Opcode::SetDigitalTimer,
            0xA2 => Opcode::SetExternalTimer,
            0x67 => Opcode::SetTimerProgramTitle,
            0x43 => Opcode::TimerClearedStatus,
            0x35 => Opcode::TimerStatus,
            0x9E => Opcode::CecVersion,
            0x9F => Opcode::GetCecVersion,
            0x83 => Opcode::GivePhysicalAddress,
            0x91 => Opcode::GetMenuLanguage,
            0x84 => Opcode::ReportPhysicalAddress,
            0x32 => Opcode::SetMenuLanguage,
            0x42 => Opcode::DeckControl,
            0x1B => Opcode::DeckStatus,
            0x1A => Opcode::GiveDeckStatus,
            0x41 => Opcode::Play,
            0x08 => Opcode::GiveTunerDeviceStatus,
            0x92 => Opcode::SelectAnalogueService,
            0x93 => Opcode::SelectDigitalService,
            0x07 => Opcode::TunerDeviceStatus,
            0x06 => Opcode::TunerStepDecrement,
            0x05 => Opcode::TunerStepIncrement,
            0x87 => Opcode::DeviceVendorId,
            0x8C => Opcode::GiveDeviceVendorId,
            0x89 => Opcode::VendorCommand,
            0xA0 => Opcode::VendorCommandWithId,
            0x8A => Opcode::VendorRemoteButtonDown,
            0x8B => Opcode::VendorRemoteButtonUp,
            0x64 => Opcode::SetOsdString,
            0x46 => Opcode::GiveOsdName,
            0x47 => Opcode::SetOsdName,
            0x8D => Opcode::MenuRequest,
            0x8E => Opcode::MenuStatus,
            0x44 => Opcode::UserControlPressed,
            0x45 => Opcode::UserControlReleased,
            0x8F => Opcode::GiveDevicePowerStatus,
            0x90 => Opcode::ReportPowerStatus,
            0x00 => Opcode::FeatureAbort,
            0xFF => Opcode::Abort,
            0x71 => Opcode::GiveAudioStatus,
            0x7D => Opcode::GiveSystemAudioModeStatus,
            0x7A => Opcode::ReportAudioStatus,
            0x72 => Opcode::SetSystemAudioMode,
            0x70 => Opcode::SystemAudioModeRequest,
            0x7E => Opcode::SystemAudioModeStatus,
            0x9A => Opcode::SetAudioRate,
            0xA3 => Opcode::ReportShortAudioDescriptor,
            0xA4 => Opcode::RequestShortAudioDescriptor,
            0xC0 => Opcode::InitiateArc,
            0xC1 => Opcode::ReportArcInitiated,
            0xC2 => Opcode::ReportArcTerminated,
            0xC3 => Opcode::RequestArcInitiation,
            0xC4 => Opcode::RequestArcTermination,
            0xC5 => Opcode::TerminateArc,
            0xF8 => Opcode::Cdc,
            0xA5 => Opcode::GiveFeatures,
            0xA6 => Opcode::ReportFeatures,
            0xA7 => Opcode::RequestCurrentLatency,
            0xA8 => Opcode::ReportCurrentLatency,
            other => Opcode::Unknown(other),
        }
    }

    /// Encodes back to the raw opcode byte.
    pub fn to_byte(self) -> u8 {
        match self {
            Opcode::ActiveSource => 0x82,
            Opcode::ImageViewOn => 0x04,
            Opcode::TextViewOn => 0x0D,
            Opcode::InactiveSource => 0x9D,
            Opcode::RequestActiveSource => 0x85,
            Opcode::RoutingChange => 0x80,
            Opcode::RoutingInformation => 0x81,
            Opcode::SetStreamPath => 0x86,
            Opcode::Standby => 0x36,
            Opcode::RecordOff => 0x0B,
            Opcode::RecordOn => 0x09,
            Opcode::RecordStatus => 0x0A,
            Opcode::RecordTvScreen => 0x0F,
            Opcode::ClearAnalogueTimer => 0x33,
            Opcode::ClearDigitalTimer => 0x99,
            Opcode::ClearExternalTimer => 0xA1,
            Opcode::SetAnalogueTimer => 0x34,
            Opcode::SetDigitalTimer => 0x97,
            Opcode::SetExternalTimer => 0xA2,
            Opcode::SetTimerProgramTitle => 0x67,
            Opcode::TimerClearedStatus => 0x43,
            Opcode::TimerStatus => 0x35,
            Opcode::CecVersion => 0x9E,
            Opcode::GetCecVersion => 0x9F,
            Opcode::GivePhysicalAddress => 0x83,
            Opcode::GetMenuLanguage => 0x91,
            Opcode::ReportPhysicalAddress => 0x84,
            Opcode::SetMenuLanguage => 0x32,
            Opcode::DeckControl => 0x42,
            Opcode::DeckStatus => 0x1B,
            Opcode::GiveDeckStatus => 0x1A,
            Opcode::Play => 0x41,
            Opcode::GiveTunerDeviceStatus => 0x08,
            Opcode::SelectAnalogueService => 0x92,
            Opcode::SelectDigitalService => 0x93,
            Opcode::TunerDeviceStatus => 0x07,
            Opcode::TunerStepDecrement => 0x06,
            Opcode::TunerStepIncrement => 0x05,
            Opcode::DeviceVendorId => 0x87,
            Opcode::GiveDeviceVendorId => 0x8C,
            Opcode::VendorCommand => 0x89,
            Opcode::VendorCommandWithId => 0xA0,
            Opcode::VendorRemoteButtonDown => 0x8A,
            Opcode::VendorRemoteButtonUp => 0x8B,
            Opcode::SetOsdString => 0x64,
            Opcode::GiveOsdName => 0x46,
            Opcode::SetOsdName => 0x47,
            Opcode::MenuRequest => 0x8D,
            Opcode::MenuStatus => 0x8E,
            Opcode::UserControlPressed => 0x44,
            Opcode::UserControlReleased => 0x45,
            Opcode::GiveDevicePowerStatus => 0x8F,
            Opcode::ReportPowerStatus => 0x90,
            Opcode::FeatureAbort => 0x00,
            Opcode::Abort => 0xFF,
            Opcode::GiveAudioStatus => 0x71,
            Opcode::GiveSystemAudioModeStatus => 0x7D,
            Opcode::ReportAudioStatus => 0x7A,
            Opcode::SetSystemAudioMode => 0x72,
            Opcode::SystemAudioModeRequest => 0x70,
            Opcode::SystemAudioModeStatus => 0x7E,
            Opcode::SetAudioRate => 0x9A,
            Opcode::ReportShortAudioDescriptor => 0xA3,
            Opcode::RequestShortAudioDescriptor => 0xA4,
            Opcode::InitiateArc => 0xC0,
            Opcode::ReportArcInitiated => 0xC1,
            Opcode::ReportArcTerminated => 0xC2,
            Opcode::RequestArcInitiation => 0xC3,
            Opcode::RequestArcTermination => 0xC4,
            Opcode::TerminateArc => 0xC5,
            Opcode::Cdc => 0xF8,
            Opcode::GiveFeatures => 0xA5,
            Opcode::ReportFeatures => 0xA6,
            Opcode::RequestCurrentLatency => 0xA7,
            Opcode::ReportCurrentLatency => 0xA8,
            Opcode::Unknown(byte) => byte,
        }
    }
}
