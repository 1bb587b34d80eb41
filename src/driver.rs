//! The driver shim: opens/closes the native line driver, owns the
//! incoming frame queue, and exposes the application-facing read/write
//! operations plus the locally-held logical address book.

use std::sync::{Arc, Mutex};

use crate::address_book::AddressBook;
use crate::error::{CecError, Result};
use crate::frame::Frame;
use crate::header::Header;
use crate::logical_address::LogicalAddress;
use crate::native::{AddressResult, NativeCec, SendResult};
use crate::opcode::Opcode;
use crate::operand::DeviceType;
use crate::physical_address::PhysicalAddress;
use crate::queue::{EventQueue, PopResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Closed,
    Opened,
    Closing,
}

/// Owns one native CEC handle's worth of state. Safe to share across
/// threads behind an `Arc`, the way the teacher hands its `CECConnection`
/// to handlers rather than hiding it behind a global.
pub struct DriverShim {
    native: Arc<dyn NativeCec>,
    state: Mutex<State>,
    addresses: Mutex<AddressBook>,
    queue: Arc<EventQueue<Frame>>,
}

impl DriverShim {
    pub fn new(native: Arc<dyn NativeCec>) -> Self {
        DriverShim {
            native,
            state: Mutex::new(State::Closed),
            addresses: Mutex::new(AddressBook::new()),
            queue: Arc::new(EventQueue::new()),
        }
    }

    fn require_opened(&self) -> Result<()> {
        match *self.state.lock().expect("driver shim mutex poisoned") {
            State::Opened => Ok(()),
            _ => Err(CecError::InvalidState("operation requires the driver shim to be open")),
        }
    }

    /// Idempotent from `Opened`. Acquires the native handle and registers
    /// the receive/transmit callbacks.
    pub fn open(&self) -> Result<()> {
        let mut state = self.state.lock().expect("driver shim mutex poisoned");
        match *state {
            State::Opened => return Ok(()),
            State::Closing => return Err(CecError::InvalidState("cannot open while closing")),
            State::Closed => {}
        }
        self.native.open()?;

        let queue = Arc::clone(&self.queue);
        self.native.set_receive_callback(Box::new(move |bytes| match Frame::from_bytes(bytes) {
            Ok(frame) => queue.push(frame),
            Err(err) => log::warn!("dropping malformed CEC frame from receive callback: {err}"),
        }));
        self.native.set_transmit_callback(Box::new(|result| {
            if result != SendResult::Success {
                log::warn!("asynchronous CEC transmit did not succeed: {result:?}");
            }
        }));

        *state = State::Opened;
        log::info!("CEC driver shim opened");
        Ok(())
    }

    /// Idempotent from `Closed`. Unblocks any waiting `read` before
    /// releasing the native handle.
    pub fn close(&self) -> Result<()> {
        {
            let mut state = self.state.lock().expect("driver shim mutex poisoned");
            if *state == State::Closed {
                return Ok(());
            }
            *state = State::Closing;
        }
        self.queue.close();
        let result = self.native.close();
        *self.state.lock().expect("driver shim mutex poisoned") = State::Closed;
        log::info!("CEC driver shim closed");
        result
    }

    /// Blocks on the incoming queue. Fails with `InvalidState` once the
    /// shim has been closed, after draining whatever was already queued.
    pub fn read(&self, out: &mut Frame) -> Result<()> {
        self.require_opened()?;
        match self.queue.pop() {
            PopResult::Item(frame) => {
                *out = frame;
                Ok(())
            }
            PopResult::Closed => Err(CecError::InvalidState("driver shim is closed")),
        }
    }

    /// Synchronous send, translating the native send result per the
    /// NACK/broadcast rules in the module docs.
    pub fn write(&self, frame: Frame) -> Result<()> {
        self.require_opened()?;
        let send_result = self.native.transmit(&frame)?;
        translate_send_result(&frame, send_result)
    }

    /// Hands off to the native async transmit; result arrives via the
    /// transmit callback registered at `open`, not this call.
    pub fn write_async(&self, frame: Frame) -> Result<()> {
        self.require_opened()?;
        self.native.transmit_async(&frame)
    }

    pub fn add_logical_address(&self, address: LogicalAddress) -> Result<()> {
        self.require_opened()?;
        match self.native.add_logical_address(address)? {
            AddressResult::Success => {
                self.addresses.lock().expect("driver shim mutex poisoned").add(address);
                Ok(())
            }
            AddressResult::Unavailable => Err(CecError::AddressNotAvailable),
        }
    }

    /// No error if `address` was never held.
    pub fn remove_logical_address(&self, address: LogicalAddress) -> Result<()> {
        self.require_opened()?;
        self.addresses.lock().expect("driver shim mutex poisoned").remove(address);
        self.native.remove_logical_address(address)
    }

    pub fn is_valid_logical_address(&self, address: LogicalAddress) -> Result<bool> {
        self.require_opened()?;
        Ok(self.addresses.lock().expect("driver shim mutex poisoned").contains(address))
    }

    pub fn get_logical_address(&self, device_type: DeviceType) -> Result<LogicalAddress> {
        self.require_opened()?;
        self.native.get_logical_address(device_type)
    }

    pub fn get_physical_address(&self) -> Result<PhysicalAddress> {
        self.require_opened()?;
        self.native.get_physical_address()
    }

    /// Builds a single-byte header-only frame and sends it; `NoAck`
    /// means `to` is free, a successful send means it is occupied. The
    /// interpretation is the caller's — this just surfaces the result.
    pub fn poll(&self, from: LogicalAddress, to: LogicalAddress) -> Result<()> {
        self.require_opened()?;
        let mut frame = Frame::new();
        frame.append(Header::new(from, to).to_byte())?;
        self.write(frame)
    }
}

impl Drop for DriverShim {
    fn drop(&mut self) {
        let opened = *self.state.lock().expect("driver shim mutex poisoned") == State::Opened;
        if opened {
            if let Err(err) = self.close() {
                log::warn!("error closing CEC driver shim during drop: {err}");
            }
        }
    }
}

fn translate_send_result(frame: &Frame, send_result: SendResult) -> Result<()> {
    match send_result {
        SendResult::Success => Ok(()),
        SendResult::InvalidHandle
        | SendResult::InvalidArgument
        | SendResult::LogicalAddressUnavailable
        | SendResult::SentFailed
        | SendResult::GeneralError => Err(CecError::Io("native CEC transmit failed")),
        SendResult::SentButNotAckd => {
            let header = Header::from_frame(frame)?;
            if !header.is_broadcast() {
                return Err(CecError::NoAck);
            }
            // CTS 9-3-3: a broadcast Report Physical Address must still be
            // retried once by the caller if it goes unacknowledged.
            let is_report_physical_address =
                frame.len() > 1 && Opcode::from_byte(frame.at(1)?) == Opcode::ReportPhysicalAddress;
            if is_report_physical_address {
                Err(CecError::NoAck)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::MockNativeCec;
    use mockall::predicate::always;

    fn opened_shim(native: MockNativeCec) -> DriverShim {
        let shim = DriverShim::new(Arc::new(native));
        shim.open().unwrap();
        shim
    }

    fn mock_with_open_close() -> MockNativeCec {
        let mut native = MockNativeCec::new();
        native.expect_open().returning(|| Ok(()));
        native.expect_set_receive_callback().returning(|_| ());
        native.expect_set_transmit_callback().returning(|_| ());
        native.expect_close().returning(|| Ok(()));
        native
    }

    #[test]
    fn operations_before_open_fail_with_invalid_state() {
        let shim = DriverShim::new(Arc::new(MockNativeCec::new()));
        let mut frame = Frame::new();
        assert_eq!(shim.read(&mut frame), Err(CecError::InvalidState("operation requires the driver shim to be open")));
        assert_eq!(
            shim.write(Frame::new()),
            Err(CecError::InvalidState("operation requires the driver shim to be open"))
        );
    }

    #[test]
    fn open_is_idempotent() {
        let mut native = mock_with_open_close();
        native.expect_open().times(1).returning(|| Ok(()));
        let shim = DriverShim::new(Arc::new(native));
        shim.open().unwrap();
        shim.open().unwrap();
    }

    #[test]
    fn close_is_idempotent() {
        let shim = opened_shim(mock_with_open_close());
        shim.close().unwrap();
        shim.close().unwrap();
    }

    #[test]
    fn directed_send_not_acked_is_no_ack() {
        let mut native = mock_with_open_close();
        native.expect_transmit().with(always()).returning(|_| Ok(SendResult::SentButNotAckd));
        let shim = opened_shim(native);

        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::TV);
        let mut frame = Frame::new();
        frame.append(header.to_byte()).unwrap();
        assert_eq!(shim.write(frame), Err(CecError::NoAck));
    }

    #[test]
    fn broadcast_not_acked_succeeds_unless_report_physical_address() {
        let mut native = mock_with_open_close();
        native.expect_transmit().with(always()).returning(|_| Ok(SendResult::SentButNotAckd));
        let shim = opened_shim(native);

        let header = Header::new(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::BROADCAST);
        let mut other = Frame::new();
        other.append(header.to_byte()).unwrap();
        other.append(Opcode::ActiveSource.to_byte()).unwrap();
        assert_eq!(shim.write(other), Ok(()));

        let mut report_physical_address = Frame::new();
        report_physical_address.append(header.to_byte()).unwrap();
        report_physical_address.append(Opcode::ReportPhysicalAddress.to_byte()).unwrap();
        assert_eq!(shim.write(report_physical_address), Err(CecError::NoAck));
    }

    #[test]
    fn poll_surfaces_no_ack_for_an_absent_address() {
        let mut native = mock_with_open_close();
        native.expect_transmit().with(always()).returning(|_| Ok(SendResult::SentButNotAckd));
        let shim = opened_shim(native);
        assert_eq!(shim.poll(LogicalAddress::PLAYBACK_DEVICE_1, LogicalAddress::TV), Err(CecError::NoAck));
    }

    #[test]
    fn add_logical_address_tracks_held_addresses_on_success() {
        let mut native = mock_with_open_close();
        native.expect_add_logical_address().returning(|_| Ok(AddressResult::Success));
        let shim = opened_shim(native);
        shim.add_logical_address(LogicalAddress::PLAYBACK_DEVICE_1).unwrap();
        assert!(shim.is_valid_logical_address(LogicalAddress::PLAYBACK_DEVICE_1).unwrap());
    }

    #[test]
    fn add_logical_address_unavailable_does_not_record_it() {
        let mut native = mock_with_open_close();
        native.expect_add_logical_address().returning(|_| Ok(AddressResult::Unavailable));
        let shim = opened_shim(native);
        assert_eq!(
            shim.add_logical_address(LogicalAddress::PLAYBACK_DEVICE_1),
            Err(CecError::AddressNotAvailable)
        );
        assert!(!shim.is_valid_logical_address(LogicalAddress::PLAYBACK_DEVICE_1).unwrap());
    }

    #[test]
    fn read_after_close_fails_with_invalid_state() {
        let shim = opened_shim(mock_with_open_close());
        shim.close().unwrap();
        let mut frame = Frame::new();
        assert_eq!(shim.read(&mut frame), Err(CecError::InvalidState("operation requires the driver shim to be open")));
    }

    #[test]
    fn a_blocked_read_wakes_with_invalid_state_when_closed_from_another_thread() {
        use std::thread;
        use std::time::Duration;

        let shim = Arc::new(opened_shim(mock_with_open_close()));
        let reader = {
            let shim = Arc::clone(&shim);
            thread::spawn(move || {
                let mut frame = Frame::new();
                shim.read(&mut frame)
            })
        };
        thread::sleep(Duration::from_millis(20));
        shim.close().unwrap();
        assert_eq!(reader.join().unwrap(), Err(CecError::InvalidState("driver shim is closed")));
    }
}
