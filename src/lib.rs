//! HDMI-CEC message codec and driver shim.
//!
//! Bytes in, typed messages out: [`frame`] and [`header`]/[`opcode`] give
//! the wire shape, [`operand`] and [`message`] give the typed payloads,
//! and [`driver`] wraps a [`native::NativeCec`] backend with the
//! blocking read/write surface and logical-address bookkeeping an
//! application needs to talk CEC.

pub mod address_book;
pub mod driver;
pub mod error;
pub mod frame;
pub mod header;
pub mod logical_address;
pub mod message;
pub mod native;
pub mod opcode;
pub mod operand;
pub mod physical_address;
pub mod queue;

pub use address_book::AddressBook;
pub use driver::DriverShim;
pub use error::{CecError, Result};
pub use frame::Frame;
pub use header::Header;
pub use logical_address::{DeviceTypeClass, LogicalAddress};
pub use message::{decode_frame, encode_frame, Message};
pub use native::NativeCec;
pub use opcode::Opcode;
pub use physical_address::PhysicalAddress;
pub use queue::EventQueue;
