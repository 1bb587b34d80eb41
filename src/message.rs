//! One decoder/encoder per CEC opcode, composed from operands.

use crate::error::{CecError, Result};
use crate::frame::Frame;
use crate::header::Header;
use crate::opcode::Opcode;
use crate::operand::{
    AbortReason, AllDeviceTypes, AudioStatus, DeviceFeatures, DeviceType, Language, LatencyInfo,
    OsdName, OsdString, PowerStatus, RcProfile, RequestAudioFormat, ShortAudioDescriptor,
    SystemAudioStatus, UiCommand, VendorId, Version,
};
use crate::physical_address::{self, PhysicalAddress};

/// A decoded CEC message: the opcode plus its typed operands.
///
/// `Opaque` carries opcodes the retrieved CEC source defines without a
/// modeled operand layout (the deck/tuner/timer/vendor-command family);
/// `UnknownOpcode` carries a raw opcode byte the codec does not recognize
/// at all. Both keep their tail bytes so nothing is lost in a
/// decode-then-reencode round trip.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    ActiveSource { physical_address: PhysicalAddress },
    ImageViewOn,
    TextViewOn,
    InactiveSource { physical_address: PhysicalAddress },
    RequestActiveSource,
    RoutingChange { from: PhysicalAddress, to: PhysicalAddress },
    RoutingInformation { physical_address: PhysicalAddress },
    SetStreamPath { physical_address: PhysicalAddress },
    Standby,
    CecVersion { version: Version },
    GetCecVersion,
    GivePhysicalAddress,
    GetMenuLanguage,
    ReportPhysicalAddress { physical_address: PhysicalAddress, device_type: DeviceType },
    SetMenuLanguage { language: Language },
    GiveOsdName,
    SetOsdName { name: OsdName },
    SetOsdString { display_control: u8, string: OsdString },
    GiveDeviceVendorId,
    DeviceVendorId { vendor_id: VendorId },
    GiveDevicePowerStatus,
    ReportPowerStatus { status: PowerStatus },
    FeatureAbort { feature: Opcode, reason: AbortReason },
    Abort,
    UserControlPressed { command: UiCommand },
    UserControlReleased,
    GiveAudioStatus,
    ReportAudioStatus { status: AudioStatus },
    GiveSystemAudioModeStatus,
    SetSystemAudioMode { status: SystemAudioStatus },
    SystemAudioModeRequest { physical_address: PhysicalAddress },
    SystemAudioModeStatus { status: SystemAudioStatus },
    RequestShortAudioDescriptor { formats: Vec<RequestAudioFormat> },
    ReportShortAudioDescriptor { descriptors: Vec<ShortAudioDescriptor> },
    InitiateArc,
    ReportArcInitiated,
    ReportArcTerminated,
    RequestArcInitiation,
    RequestArcTermination,
    TerminateArc,
    GiveFeatures,
    ReportFeatures {
        version: Version,
        all_device_types: AllDeviceTypes,
        rc_profile: RcProfile,
        device_features: DeviceFeatures,
    },
    RequestCurrentLatency { physical_address: PhysicalAddress },
    ReportCurrentLatency {
        physical_address: PhysicalAddress,
        video_latency: u8,
        /// The raw flags byte, carried verbatim; `None` when the frame
        /// ends after `video_latency` with no flags byte at all.
        latency_flags: Option<u8>,
        audio_output_delay: Option<u8>,
    },
    /// The bare single-byte poll frame: header only, no opcode byte.
    Polling,
    /// An opcode this codec recognizes but whose operand layout the
    /// retrieved CEC source does not model (see module docs).
    Opaque { opcode: Opcode, body: Vec<u8> },
    /// A byte this crate's [`Opcode`] table does not recognize at all.
    UnknownOpcode { opcode_byte: u8, body: Vec<u8> },
}

/// Opcodes in the deck/tuner/timer/vendor-command family and their kin,
/// for which no operand structure is modeled; decoded as [`Message::Opaque`].
fn is_opaque(opcode: Opcode) -> bool {
    matches!(
        opcode,
        Opcode::RecordOff
            | Opcode::RecordOn
            | Opcode::RecordStatus
            | Opcode::RecordTvScreen
            | Opcode::MenuRequest
            | Opcode::MenuStatus
            | Opcode::DeckControl
            | Opcode::DeckStatus
            | Opcode::GiveDeckStatus
            | Opcode::Play
            | Opcode::GiveTunerDeviceStatus
            | Opcode::SelectAnalogueService
            | Opcode::SelectDigitalService
            | Opcode::TunerDeviceStatus
            | Opcode::TunerStepIncrement
            | Opcode::TunerStepDecrement
            | Opcode::VendorCommand
            | Opcode::VendorCommandWithId
            | Opcode::VendorRemoteButtonDown
            | Opcode::VendorRemoteButtonUp
            | Opcode::SetAnalogueTimer
            | Opcode::SetDigitalTimer
            | Opcode::SetExternalTimer
            | Opcode::ClearAnalogueTimer
            | Opcode::ClearDigitalTimer
            | Opcode::ClearExternalTimer
            | Opcode::SetTimerProgramTitle
            | Opcode::TimerClearedStatus
            | Opcode::TimerStatus
            | Opcode::Cdc
    )
}

fn tail(frame: &Frame, offset: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut i = offset;
    while i < frame.len() {
        bytes.push(frame.at(i)?);
        i += 1;
    }
    Ok(bytes)
}

impl Message {
    /// The opcode this message carries on the wire.
    pub fn opcode(&self) -> Opcode {
        match self {
            Message::ActiveSource { .. } => Opcode::ActiveSource,
            Message::ImageViewOn => Opcode::ImageViewOn,
            Message::TextViewOn => Opcode::TextViewOn,
            Message::InactiveSource { .. } => Opcode::InactiveSource,
            Message::RequestActiveSource => Opcode::RequestActiveSource,
            Message::RoutingChange { .. } => Opcode::RoutingChange,
            Message::RoutingInformation { .. } => Opcode::RoutingInformation,
            Message::SetStreamPath { .. } => Opcode::SetStreamPath,
            Message::Standby => Opcode::Standby,
            Message::CecVersion { .. } => Opcode::CecVersion,
            Message::GetCecVersion => Opcode::GetCecVersion,
            Message::GivePhysicalAddress => Opcode::GivePhysicalAddress,
            Message::GetMenuLanguage => Opcode::GetMenuLanguage,
            Message::ReportPhysicalAddress { .. } => Opcode::ReportPhysicalAddress,
            Message::SetMenuLanguage { .. } => Opcode::SetMenuLanguage,
            Message::GiveOsdName => Opcode::GiveOsdName,
            Message::SetOsdName { .. } => Opcode::SetOsdName,
            Message::SetOsdString { .. } => Opcode::SetOsdString,
            Message::GiveDeviceVendorId => Opcode::GiveDeviceVendorId,
            Message::DeviceVendorId { .. } => Opcode::DeviceVendorId,
            Message::GiveDevicePowerStatus => Opcode::GiveDevicePowerStatus,
            Message::ReportPowerStatus { .. } => Opcode::ReportPowerStatus,
            Message::FeatureAbort { .. } => Opcode::FeatureAbort,
            Message::Abort => Opcode::Abort,
            Message::UserControlPressed { .. } => Opcode::UserControlPressed,
            Message::UserControlReleased => Opcode::UserControlReleased,
            Message::GiveAudioStatus => Opcode::GiveAudioStatus,
            Message::ReportAudioStatus { .. } => Opcode::ReportAudioStatus,
            Message::GiveSystemAudioModeStatus => Opcode::GiveSystemAudioModeStatus,
            Message::SetSystemAudioMode { .. } => Opcode::SetSystemAudioMode,
            Message::SystemAudioModeRequest { .. } => Opcode::SystemAudioModeRequest,
            Message::SystemAudioModeStatus { .. } => Opcode::SystemAudioModeStatus,
            Message::RequestShortAudioDescriptor { .. } => Opcode::RequestShortAudioDescriptor,
            Message::ReportShortAudioDescriptor { .. } => Opcode::ReportShortAudioDescriptor,
            Message::InitiateArc => Opcode::InitiateArc,
            Message::ReportArcInitiated => Opcode::ReportArcInitiated,
            Message::ReportArcTerminated => Opcode::ReportArcTerminated,
            Message::RequestArcInitiation => Opcode::RequestArcInitiation,
            Message::RequestArcTermination => Opcode::RequestArcTermination,
            Message::TerminateArc => Opcode::TerminateArc,
            Message::GiveFeatures => Opcode::GiveFeatures,
            Message::ReportFeatures { .. } => Opcode::ReportFeatures,
            Message::RequestCurrentLatency { .. } => Opcode::RequestCurrentLatency,
            Message::ReportCurrentLatency { .. } => Opcode::ReportCurrentLatency,
            Message::Polling => Opcode::Unknown(0),
            Message::Opaque { opcode, .. } => *opcode,
            Message::UnknownOpcode { opcode_byte, .. } => Opcode::Unknown(*opcode_byte),
        }
    }

    /// Appends this message's operand bytes (not the opcode byte) to `frame`.
    pub fn serialize_operands(&self, frame: &mut Frame) -> Result<()> {
        match self {
            Message::ActiveSource { physical_address } => physical_address.serialize(frame),
            Message::ImageViewOn
            | Message::TextViewOn
            | Message::RequestActiveSource
            | Message::Standby
            | Message::GetCecVersion
            | Message::GivePhysicalAddress
            | Message::GetMenuLanguage
            | Message::GiveOsdName
            | Message::GiveDeviceVendorId
            | Message::GiveDevicePowerStatus
            | Message::Abort
            | Message::UserControlReleased
            | Message::InitiateArc
            | Message::ReportArcInitiated
            | Message::ReportArcTerminated
            | Message::RequestArcInitiation
            | Message::RequestArcTermination
            | Message::TerminateArc
            | Message::GiveFeatures
            | Message::GiveAudioStatus
            | Message::GiveSystemAudioModeStatus => Ok(()),
            Message::InactiveSource { physical_address } => physical_address.serialize(frame),
            Message::RoutingChange { from, to } => {
                from.serialize(frame)?;
                to.serialize(frame)
            }
            Message::RoutingInformation { physical_address } => physical_address.serialize(frame),
            Message::SetStreamPath { physical_address } => physical_address.serialize(frame),
            Message::CecVersion { version } => version.serialize(frame),
            Message::ReportPhysicalAddress { physical_address, device_type } => {
                physical_address.serialize(frame)?;
                device_type.serialize(frame)
            }
            Message::SetMenuLanguage { language } => language.serialize(frame),
            Message::SetOsdName { name } => name.serialize(frame),
            Message::SetOsdString { display_control, string } => {
                frame.append(*display_control)?;
                string.serialize(frame)
            }
            Message::DeviceVendorId { vendor_id } => vendor_id.serialize(frame),
            Message::ReportPowerStatus { status } => status.serialize(frame),
            Message::FeatureAbort { feature, reason } => {
                frame.append(feature.to_byte())?;
                reason.serialize(frame)
            }
            Message::UserControlPressed { command } => command.serialize(frame),
            Message::ReportAudioStatus { status } => status.serialize(frame),
            Message::SetSystemAudioMode { status } => status.serialize(frame),
            Message::SystemAudioModeRequest { physical_address }
            | Message::RequestCurrentLatency { physical_address } => {
                if physical_address.is_not_present() {
                    Ok(())
                } else {
                    physical_address.serialize(frame)
                }
            }
            Message::SystemAudioModeStatus { status } => status.serialize(frame),
            Message::RequestShortAudioDescriptor { formats } => {
                for format in formats {
                    format.serialize(frame)?;
                }
                Ok(())
            }
            Message::ReportShortAudioDescriptor { descriptors } => {
                for descriptor in descriptors {
                    descriptor.serialize(frame)?;
                }
                Ok(())
            }
            Message::ReportFeatures { version, all_device_types, rc_profile, device_features } => {
                version.serialize(frame)?;
                all_device_types.serialize(frame)?;
                rc_profile.serialize(frame)?;
                device_features.serialize(frame)
            }
            Message::ReportCurrentLatency {
                physical_address,
                video_latency,
                latency_flags,
                audio_output_delay,
            } => {
                physical_address.serialize(frame)?;
                LatencyInfo::new(*video_latency, *latency_flags, *audio_output_delay).serialize(frame)
            }
            Message::Polling => Ok(()),
            Message::Opaque { body, .. } | Message::UnknownOpcode { body, .. } => {
                frame.append_slice(body)
            }
        }
    }

    /// Decodes the operand bytes of `opcode` starting at `offset` in `frame`.
    pub fn decode(opcode: Opcode, frame: &Frame, offset: usize) -> Result<Message> {
        match opcode {
            Opcode::ActiveSource => Ok(Message::ActiveSource {
                physical_address: PhysicalAddress::from_frame(frame, offset)?,
            }),
            Opcode::ImageViewOn => Ok(Message::ImageViewOn),
            Opcode::TextViewOn => Ok(Message::TextViewOn),
            Opcode::InactiveSource => Ok(Message::InactiveSource {
                physical_address: PhysicalAddress::from_frame(frame, offset)?,
            }),
            Opcode::RequestActiveSource => Ok(Message::RequestActiveSource),
            Opcode::RoutingChange => {
                let from = PhysicalAddress::from_frame(frame, offset)?;
                let to = PhysicalAddress::from_frame(frame, offset + physical_address::MAX_LEN)?;
                Ok(Message::RoutingChange { from, to })
            }
            Opcode::RoutingInformation => Ok(Message::RoutingInformation {
                physical_address: PhysicalAddress::from_frame(frame, offset)?,
            }),
            Opcode::SetStreamPath => Ok(Message::SetStreamPath {
                physical_address: PhysicalAddress::from_frame(frame, offset)?,
            }),
            Opcode::Standby => Ok(Message::Standby),
            Opcode::CecVersion => Ok(Message::CecVersion { version: Version::from_frame(frame, offset)? }),
            Opcode::GetCecVersion => Ok(Message::GetCecVersion),
            Opcode::GivePhysicalAddress => Ok(Message::GivePhysicalAddress),
            Opcode::GetMenuLanguage => Ok(Message::GetMenuLanguage),
            Opcode::ReportPhysicalAddress => {
                let physical_address = PhysicalAddress::from_frame(frame, offset)?;
                let device_type = DeviceType::from_frame(frame, offset + physical_address::MAX_LEN)?;
                Ok(Message::ReportPhysicalAddress { physical_address, device_type })
            }
            Opcode::SetMenuLanguage => Ok(Message::SetMenuLanguage { language: Language::from_frame(frame, offset)? }),
            Opcode::GiveOsdName => Ok(Message::GiveOsdName),
            Opcode::SetOsdName => Ok(Message::SetOsdName { name: OsdName::from_frame(frame, offset)? }),
            Opcode::SetOsdString => {
                let display_control = frame.at(offset)?;
                let string = OsdString::from_frame(frame, offset + 1)?;
                Ok(Message::SetOsdString { display_control, string })
            }
            Opcode::GiveDeviceVendorId => Ok(Message::GiveDeviceVendorId),
            Opcode::DeviceVendorId => Ok(Message::DeviceVendorId { vendor_id: VendorId::from_frame(frame, offset)? }),
            Opcode::GiveDevicePowerStatus => Ok(Message::GiveDevicePowerStatus),
            Opcode::ReportPowerStatus => Ok(Message::ReportPowerStatus { status: PowerStatus::from_frame(frame, offset)? }),
            Opcode::FeatureAbort => {
                let feature = Opcode::from_byte(frame.at(offset)?);
                let reason = AbortReason::from_frame(frame, offset + 1)?;
                Ok(Message::FeatureAbort { feature, reason })
            }
            Opcode::Abort => Ok(Message::Abort),
            Opcode::UserControlPressed => Ok(Message::UserControlPressed { command: UiCommand::from_frame(frame, offset)? }),
            Opcode::UserControlReleased => Ok(Message::UserControlReleased),
            Opcode::GiveAudioStatus => Ok(Message::GiveAudioStatus),
            Opcode::ReportAudioStatus => Ok(Message::ReportAudioStatus { status: AudioStatus::from_frame(frame, offset)? }),
            Opcode::GiveSystemAudioModeStatus => Ok(Message::GiveSystemAudioModeStatus),
            Opcode::SetSystemAudioMode => Ok(Message::SetSystemAudioMode { status: SystemAudioStatus::from_frame(frame, offset)? }),
            Opcode::SystemAudioModeRequest => Ok(Message::SystemAudioModeRequest {
                physical_address: decode_optional_physical_address(frame, offset)?,
            }),
            Opcode::SystemAudioModeStatus => Ok(Message::SystemAudioModeStatus { status: SystemAudioStatus::from_frame(frame, offset)? }),
            Opcode::RequestShortAudioDescriptor => {
                let mut formats = Vec::new();
                let mut pos = offset;
                const MAX_FORMATS: usize = 4;
                while pos < frame.len() && formats.len() < MAX_FORMATS {
                    formats.push(RequestAudioFormat::from_frame(frame, pos)?);
                    pos += RequestAudioFormat::MAX_LEN;
                }
                if formats.is_empty() {
                    return Err(CecError::InvalidParam("request short audio descriptor has no formats"));
                }
                Ok(Message::RequestShortAudioDescriptor { formats })
            }
            Opcode::ReportShortAudioDescriptor => Ok(Message::ReportShortAudioDescriptor {
                descriptors: ShortAudioDescriptor::parse_all(frame, offset)?,
            }),
            Opcode::InitiateArc => Ok(Message::InitiateArc),
            Opcode::ReportArcInitiated => Ok(Message::ReportArcInitiated),
            Opcode::ReportArcTerminated => Ok(Message::ReportArcTerminated),
            Opcode::RequestArcInitiation => Ok(Message::RequestArcInitiation),
            Opcode::RequestArcTermination => Ok(Message::RequestArcTermination),
            Opcode::TerminateArc => Ok(Message::TerminateArc),
            Opcode::GiveFeatures => Ok(Message::GiveFeatures),
            Opcode::ReportFeatures => {
                let version = Version::from_frame(frame, offset)?;
                let all_device_types = AllDeviceTypes::from_frame(frame, offset + 1)?;
                let (rc_profile, rc_len) = RcProfile::from_frame(frame, offset + 2)?;
                let (device_features, _) = DeviceFeatures::from_frame(frame, offset + 2 + rc_len)?;
                Ok(Message::ReportFeatures { version, all_device_types, rc_profile, device_features })
            }
            Opcode::RequestCurrentLatency => Ok(Message::RequestCurrentLatency {
                physical_address: decode_optional_physical_address(frame, offset)?,
            }),
            Opcode::ReportCurrentLatency => {
                let physical_address = PhysicalAddress::from_frame(frame, offset)?;
                let info = LatencyInfo::from_frame(frame, offset + physical_address::MAX_LEN)?;
                Ok(Message::ReportCurrentLatency {
                    physical_address,
                    video_latency: info.video_latency(),
                    latency_flags: info.flags(),
                    audio_output_delay: info.audio_output_delay(),
                })
            }
            other if is_opaque(other) => Ok(Message::Opaque { opcode: other, body: tail(frame, offset)? }),
            Opcode::Unknown(byte) => Ok(Message::UnknownOpcode { opcode_byte: byte, body: tail(frame, offset)? }),
        }
    }
}

fn decode_optional_physical_address(frame: &Frame, offset: usize) -> Result<PhysicalAddress> {
    if offset >= frame.len() {
        Ok(physical_address::NOT_PRESENT)
    } else {
        PhysicalAddress::from_frame(frame, offset)
    }
}

/// Decodes a full wire frame into its header and message.
///
/// A one-byte frame (header only, no opcode) decodes to [`Message::Polling`].
pub fn decode_frame(frame: &Frame) -> Result<(Header, Message)> {
    let header = Header::from_frame(frame)?;
    if frame.len() == 1 {
        return Ok((header, Message::Polling));
    }
    let opcode = Opcode::from_byte(frame.at(1)?);
    let message = Message::decode(opcode, frame, 2)?;
    Ok((header, message))
}

/// Encodes a header and message into a full wire frame.
pub fn encode_frame(header: Header, message: &Message) -> Result<Frame> {
    let mut frame = Frame::new();
    frame.append(header.to_byte())?;
    if matches!(message, Message::Polling) {
        return Ok(frame);
    }
    frame.append(message.opcode().to_byte())?;
    message.serialize_operands(&mut frame)?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logical_address::LogicalAddress;

    #[test]
    fn active_source_round_trips_the_seed_scenario() {
        let header = Header::new(LogicalAddress::TV, LogicalAddress::BROADCAST);
        let message = Message::ActiveSource { physical_address: PhysicalAddress::new(1, 0, 0, 0) };
        let frame = encode_frame(header, &message).unwrap();
        assert_eq!(frame.as_bytes(), &[0x0F, 0x82, 0x10, 0x00]);
        assert_eq!(decode_frame(&frame).unwrap(), (header, message));
    }

    #[test]
    fn report_physical_address_decodes_the_seed_scenario() {
        let frame = Frame::from_bytes(&[0x0F, 0x84, 0x10, 0x00, 0x01]).unwrap();
        let (header, message) = decode_frame(&frame).unwrap();
        assert_eq!(header.from(), LogicalAddress::TV);
        assert_eq!(header.to(), LogicalAddress::BROADCAST);
        assert_eq!(
            message,
            Message::ReportPhysicalAddress {
                physical_address: PhysicalAddress::new(1, 0, 0, 0),
                device_type: DeviceType::RecordingDevice,
            }
        );
    }

    #[test]
    fn feature_abort_round_trips_the_seed_scenario() {
        let header = Header::new(LogicalAddress::AUDIO_SYSTEM, LogicalAddress::TV);
        let message = Message::FeatureAbort {
            feature: Opcode::GiveDeviceVendorId,
            reason: AbortReason::UnrecognizedOpcode,
        };
        let frame = encode_frame(header, &message).unwrap();
        assert_eq!(frame.as_bytes(), &[0x50, 0x00, 0x8C, 0x00]);
    }

    #[test]
    fn system_audio_mode_request_with_sentinel_address_has_no_operand_bytes() {
        let header = Header::new(LogicalAddress::TV, LogicalAddress::BROADCAST);
        let message = Message::SystemAudioModeRequest { physical_address: physical_address::NOT_PRESENT };
        let frame = encode_frame(header, &message).unwrap();
        assert_eq!(frame.as_bytes(), &[0x0F, 0x70]);
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn report_current_latency_round_trips() {
        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::TV);
        let message = Message::ReportCurrentLatency {
            physical_address: PhysicalAddress::new(0, 2, 0, 3),
            video_latency: 1,
            latency_flags: Some(0),
            audio_output_delay: None,
        };
        let frame = encode_frame(header, &message).unwrap();
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn report_current_latency_decodes_the_seed_scenario_with_no_flags_byte() {
        let frame = Frame::from_bytes(&[0x40, 0xA4, 0x02, 0x03, 0x01]).unwrap();
        let (_, decoded) = decode_frame(&frame).unwrap();
        let message = Message::ReportCurrentLatency {
            physical_address: PhysicalAddress::new(0, 2, 0, 3),
            video_latency: 1,
            latency_flags: None,
            audio_output_delay: None,
        };
        assert_eq!(decoded, message);
        assert_eq!(encode_frame(Header::from_frame(&frame).unwrap(), &message).unwrap(), frame);
    }

    #[test]
    fn report_current_latency_carries_delay_only_when_flags_low_bits_are_3() {
        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::TV);
        let with_delay = Message::ReportCurrentLatency {
            physical_address: PhysicalAddress::new(0, 2, 0, 3),
            video_latency: 1,
            latency_flags: Some(0x03),
            audio_output_delay: Some(0x09),
        };
        let frame = encode_frame(header, &with_delay).unwrap();
        assert_eq!(frame.len(), 2 + 2 + 3);
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, with_delay);

        let high_bits_only = Message::ReportCurrentLatency {
            physical_address: PhysicalAddress::new(0, 2, 0, 3),
            video_latency: 1,
            latency_flags: Some(0xC0),
            audio_output_delay: None,
        };
        let frame = encode_frame(header, &high_bits_only).unwrap();
        assert_eq!(frame.len(), 2 + 2 + 2);
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, high_bits_only);
    }

    #[test]
    fn polling_frame_is_header_only() {
        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::TV);
        let frame = encode_frame(header, &Message::Polling).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(decode_frame(&frame).unwrap(), (header, Message::Polling));
    }

    #[test]
    fn unknown_opcode_round_trips_its_raw_tail() {
        let frame = Frame::from_bytes(&[0x40, 0x5A, 0x01, 0x02]).unwrap();
        let (header, message) = decode_frame(&frame).unwrap();
        assert_eq!(message, Message::UnknownOpcode { opcode_byte: 0x5A, body: vec![0x01, 0x02] });
        assert_eq!(encode_frame(header, &message).unwrap(), frame);
    }

    #[test]
    fn opaque_family_opcode_round_trips_its_raw_tail() {
        let frame = Frame::from_bytes(&[0x40, Opcode::VendorCommand.to_byte(), 0x11, 0x22]).unwrap();
        let (header, message) = decode_frame(&frame).unwrap();
        assert_eq!(message, Message::Opaque { opcode: Opcode::VendorCommand, body: vec![0x11, 0x22] });
        assert_eq!(encode_frame(header, &message).unwrap(), frame);
    }

    #[test]
    fn report_features_round_trips_version_and_profiles() {
        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::BROADCAST);
        let message = Message::ReportFeatures {
            version: Version::V2_0,
            all_device_types: AllDeviceTypes::new(false, false, false, true, false, false),
            rc_profile: RcProfile::new(vec![0x02]).unwrap(),
            device_features: DeviceFeatures::new(vec![0x08]).unwrap(),
        };
        let frame = encode_frame(header, &message).unwrap();
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn report_short_audio_descriptor_round_trips_multiple_entries() {
        let header = Header::new(LogicalAddress::AUDIO_SYSTEM, LogicalAddress::TV);
        let message = Message::ReportShortAudioDescriptor {
            descriptors: vec![
                ShortAudioDescriptor::new([0x09, 0x7F, 0x07]),
                ShortAudioDescriptor::new([0x15, 0x07, 0x07]),
            ],
        };
        let frame = encode_frame(header, &message).unwrap();
        let (_, decoded) = decode_frame(&frame).unwrap();
        assert_eq!(decoded, message);
    }
}
