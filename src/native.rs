//! The native line-driver surface the shim depends on.
//!
//! Modeled as a Rust trait rather than a direct FFI binding so the shim
//! is testable without hardware: a `mockall`-generated mock stands in
//! for it in `driver`'s tests, and a real backend binds to an
//! out-of-tree `libcec`-style library at the application's integration
//! boundary, selected by whatever constructs the shim (§10.4).

use crate::error::Result;
use crate::frame::Frame;
use crate::logical_address::LogicalAddress;
use crate::operand::DeviceType;
use crate::physical_address::PhysicalAddress;

/// The result code a native synchronous transmit reports alongside its
/// own `Result`. Bit-exact with the native driver interface's
/// `send_result` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    Success,
    InvalidHandle,
    InvalidArgument,
    LogicalAddressUnavailable,
    SentFailed,
    SentButNotAckd,
    GeneralError,
}

/// The result of a native `add_logical_address` call, alongside its own
/// `Result` for genuine I/O failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressResult {
    Success,
    Unavailable,
}

/// The native CEC line driver: open/close, synchronous/asynchronous
/// transmit, callback registration, and logical/physical address queries.
#[cfg_attr(test, mockall::automock)]
pub trait NativeCec: Send + Sync {
    /// Acquires the native handle. `Err` is translated to [`crate::error::CecError::Io`].
    fn open(&self) -> Result<()>;

    /// Releases the native handle.
    fn close(&self) -> Result<()>;

    /// Synchronous send; blocks until the native driver reports a result.
    fn transmit(&self, frame: &Frame) -> Result<SendResult>;

    /// Hands `frame` to the native async path; result arrives later via
    /// the transmit callback, not this call's return value.
    fn transmit_async(&self, frame: &Frame) -> Result<()>;

    /// Registers the callback the native driver invokes (on its own
    /// thread) when a frame arrives on the bus.
    fn set_receive_callback(&self, callback: Box<dyn Fn(&[u8]) + Send + Sync>);

    /// Registers the callback the native driver invokes after an async
    /// transmit completes.
    fn set_transmit_callback(&self, callback: Box<dyn Fn(SendResult) + Send + Sync>);

    fn add_logical_address(&self, address: LogicalAddress) -> Result<AddressResult>;
    fn remove_logical_address(&self, address: LogicalAddress) -> Result<()>;
    fn get_logical_address(&self, device_type: DeviceType) -> Result<LogicalAddress>;
    fn get_physical_address(&self) -> Result<PhysicalAddress>;
}
