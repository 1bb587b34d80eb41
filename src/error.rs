//! The closed set of error kinds the core ever returns.

/// Everything fallible in this crate returns one of these.
///
/// The variant carries enough context for a caller to `log::warn!` or
/// `log::error!` it usefully without this crate forcing a logging backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CecError {
    /// Malformed frame, out-of-range operand value, out-of-bounds index, or
    /// an operand that does not fit its maximum length.
    InvalidParam(&'static str),
    /// A shim operation was invoked while the shim was not in the state it
    /// requires (e.g. `read` before `open`).
    InvalidState(&'static str),
    /// The native driver reported a failure unrelated to acknowledgment.
    Io(&'static str),
    /// A directed send, or a broadcast Report Physical Address, was sent but
    /// not acknowledged.
    NoAck,
    /// A logical address could not be claimed on the bus.
    AddressNotAvailable,
}

impl std::fmt::Display for CecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CecError::InvalidParam(msg) => write!(f, "invalid CEC parameter: {msg}"),
            CecError::InvalidState(msg) => write!(f, "invalid driver state: {msg}"),
            CecError::Io(msg) => write!(f, "CEC driver I/O error: {msg}"),
            CecError::NoAck => write!(f, "CEC frame sent but not acknowledged"),
            CecError::AddressNotAvailable => write!(f, "logical address not available"),
        }
    }
}

impl std::error::Error for CecError {}

pub type Result<T> = std::result::Result<T, CecError>;
