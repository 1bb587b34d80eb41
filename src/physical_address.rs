//! The 4-nibble topological address of a device under the HDMI tree root.

use crate::error::{CecError, Result};
use crate::frame::Frame;

/// Number of bytes a [`PhysicalAddress`] occupies on the wire.
pub const MAX_LEN: usize = 2;

/// Sentinel meaning "no physical address present", used by
/// `SystemAudioModeRequest` and `RequestCurrentLatency` to mark an
/// omitted operand.
pub const NOT_PRESENT: PhysicalAddress = PhysicalAddress {
    nibbles: [0xF, 0xF, 0xF, 0xF],
};

/// Four 4-bit nibbles packed into two bytes: `[(a<<4)|b, (c<<4)|d]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalAddress {
    nibbles: [u8; 4],
}

impl PhysicalAddress {
    /// Builds an address from four nibbles, masking each to 4 bits so the
    /// invariant "every nibble is `<= 0xF`" holds by construction.
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        PhysicalAddress {
            nibbles: [a & 0xF, b & 0xF, c & 0xF, d & 0xF],
        }
    }

    /// The packed wire bytes: `[(a<<4)|b, (c<<4)|d]`.
    pub fn bytes(self) -> [u8; 2] {
        [
            (self.nibbles[0] << 4) | self.nibbles[1],
            (self.nibbles[2] << 4) | self.nibbles[3],
        ]
    }

    /// The `index`-th nibble (0=a, 1=b, 2=c, 3=d).
    pub fn nibble(self, index: usize) -> u8 {
        self.nibbles[index]
    }

    pub fn is_not_present(self) -> bool {
        self == NOT_PRESENT
    }

    /// Parses the dotted hex form `"a.b.c.d"`, e.g. `"1.0.0.0"`.
    pub fn parse(addr: &str) -> Result<Self> {
        if addr.len() != 7 {
            return Err(CecError::InvalidParam(
                "physical address string must have length 7",
            ));
        }
        let mut nibbles = [0u8; 4];
        for (i, part) in addr.split('.').enumerate() {
            if i >= 4 {
                return Err(CecError::InvalidParam("too many components in physical address"));
            }
            nibbles[i] = u8::from_str_radix(part, 16)
                .map_err(|_| CecError::InvalidParam("non-hex component in physical address"))?;
            if nibbles[i] > 0xF {
                return Err(CecError::InvalidParam("physical address nibble out of range"));
            }
        }
        Ok(PhysicalAddress { nibbles })
    }

    /// Parses from a frame slice starting at `offset`.
    pub fn from_frame(frame: &Frame, offset: usize) -> Result<Self> {
        let b0 = frame.at(offset)?;
        let b1 = frame.at(offset + 1)?;
        Ok(PhysicalAddress::new(b0 >> 4, b0 & 0xF, b1 >> 4, b1 & 0xF))
    }

    /// Appends the packed bytes to `frame`.
    pub fn serialize(self, frame: &mut Frame) -> Result<()> {
        frame.append_slice(&self.bytes())
    }
}

impl std::fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:x}.{:x}.{:x}.{:x}",
            self.nibbles[0], self.nibbles[1], self.nibbles[2], self.nibbles[3]
        )
    }
}

impl std::str::FromStr for PhysicalAddress {
    type Err = CecError;

    fn from_str(s: &str) -> Result<Self> {
        PhysicalAddress::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_nibbles_into_bytes() {
        let addr = PhysicalAddress::new(1, 0, 0, 0);
        assert_eq!(addr.bytes(), [0x10, 0x00]);
        let addr = PhysicalAddress::new(0xA, 0xB, 0xC, 0xD);
        assert_eq!(addr.bytes(), [0xAB, 0xCD]);
    }

    #[test]
    fn get_nibble_returns_each_component() {
        let addr = PhysicalAddress::new(1, 2, 3, 4);
        assert_eq!(addr.nibble(0), 1);
        assert_eq!(addr.nibble(1), 2);
        assert_eq!(addr.nibble(2), 3);
        assert_eq!(addr.nibble(3), 4);
    }

    #[test]
    fn parse_dotted_form() {
        assert_eq!(
            PhysicalAddress::parse("1.2.3.4").unwrap(),
            PhysicalAddress::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(PhysicalAddress::parse("1.2.3").is_err());
        assert!(PhysicalAddress::parse("1.2.3.4.5").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(PhysicalAddress::parse("g.0.0.0").is_err());
    }

    #[test]
    fn round_trips_through_frame() {
        let addr = PhysicalAddress::new(1, 0, 0, 0);
        let mut frame = Frame::new();
        addr.serialize(&mut frame).unwrap();
        assert_eq!(PhysicalAddress::from_frame(&frame, 0).unwrap(), addr);
    }

    #[test]
    fn sentinel_is_all_f() {
        assert_eq!(NOT_PRESENT, PhysicalAddress::new(0xF, 0xF, 0xF, 0xF));
        assert!(NOT_PRESENT.is_not_present());
    }

    #[test]
    fn nibbles_are_masked_by_construction() {
        let addr = PhysicalAddress::new(0xFF, 0x1F, 0, 0);
        assert_eq!(addr.nibble(0), 0xF);
        assert_eq!(addr.nibble(1), 0xF);
    }
}
