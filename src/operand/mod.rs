//! Operand types carried by CEC messages.
//!
//! Fixed-length operands live in [`fixed`], the two extension-bit
//! variable-length operands in [`variable`], and the repeated/packed
//! Short Audio Descriptor and Latency Info operands in [`audio`].

mod audio;
mod fixed;
mod variable;

pub use audio::{LatencyInfo, ShortAudioDescriptor};
pub use fixed::{
    AbortReason, AllDeviceTypes, AudioStatus, DeviceType, Language, OsdName, OsdString,
    PowerStatus, RequestAudioFormat, SystemAudioStatus, UiCommand, VendorId, Version,
};
pub use variable::{DeviceFeatures, RcProfile};
