/*! AX.25 address field codec.

An AX.25 address is a callsign, an SSID (0-15), and three control bits
packed into a fixed seven-octet on-air field: six octets of callsign
text shifted left by one bit, followed by one octet carrying the C/H
bit, the two reserved bits, the SSID, and the End-of-Address marker.

<https://www.tapr.org/pub_ax25.html>, section 3.12.
*/
use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// Length in octets of an encoded AX.25 address field.
pub const ADDRESS_LEN: usize = 7;

/// A single AX.25 address: a callsign, SSID, and the control bits that
/// give it meaning in a particular slot of a [`crate::frame::Frame`].
///
/// `is_repeater` and `has_been_repeated` are only meaningful for an
/// address in the repeater path (`via`); `is_command_response` is only
/// meaningful for `dst`/`src`. The same physical bit backs both
/// `has_been_repeated` and `is_command_response` on the wire (see
/// [`Address::encode`]) — which one applies is purely a function of
/// the address's position in the frame, not something this type
/// enforces.
///
/// Because they share one wire bit, a byte-exact round trip
/// (`decode_frame(encode_frame(f)) == f`) requires the *non-applicable*
/// field to already equal the applicable one when `f` is built by hand
/// — e.g. for a `dst`/`src` address, `has_been_repeated` should be set
/// to whatever `is_command_response` is. `decode_address` always
/// produces them equal, since it has only the one bit to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Address {
    /// 1-6 uppercase ASCII letters or digits, left-justified.
    pub callsign: String,

    /// Secondary Station Identifier, 0-15.
    pub ssid: u8,

    /// Whether this address occupies a repeater-path slot.
    pub is_repeater: bool,

    /// The "H" bit: set once a digipeater in the path has repeated the
    /// frame. Only meaningful when `is_repeater` is true.
    pub has_been_repeated: bool,

    /// The "C" bit: command/response, per AX.25 v2.2 section 6.1.2.
    /// Only meaningful for `dst`/`src`.
    pub is_command_response: bool,
}

impl Address {
    /// Build an address with default (false) control bits.
    ///
    /// Validates the callsign and SSID the same way [`FromStr`] does.
    pub fn new(callsign: &str, ssid: u8) -> Result<Self, AddressError> {
        validate_callsign(callsign, ssid)?;
        Ok(Self {
            callsign: callsign.to_ascii_uppercase(),
            ssid,
            is_repeater: false,
            has_been_repeated: false,
            is_command_response: false,
        })
    }

    /// Encode this address into its 7-octet on-air form.
    ///
    /// `end_of_address` sets the `E` bit; it is the frame codec's job
    /// (not this type's) to know which address in a frame is last.
    pub(crate) fn encode(&self, end_of_address: bool) -> [u8; ADDRESS_LEN] {
        let mut out = [0u8; ADDRESS_LEN];
        let padded = pad_ascii(&self.callsign, 6);
        for (i, b) in padded.bytes().enumerate() {
            out[i] = b << 1;
        }
        let c_bit = if self.is_repeater {
            self.has_been_repeated
        } else {
            self.is_command_response
        };
        let mut ssid_octet: u8 = 0b0110_0000; // reserved bits always set
        if c_bit {
            ssid_octet |= 0x80;
        }
        ssid_octet |= (self.ssid & 0x0F) << 1;
        if end_of_address {
            ssid_octet |= 0x01;
        }
        out[6] = ssid_octet;
        out
    }

    /// Decode a 7-octet on-air address field.
    ///
    /// Returns the address (with `is_repeater` defaulted to `false` —
    /// the frame codec sets it based on position) and the `E` bit, so
    /// the caller knows whether this was the last address in the list.
    pub(crate) fn decode(bytes: &[u8]) -> Result<(Self, bool), AddressError> {
        debug_assert_eq!(bytes.len(), ADDRESS_LEN);
        let mut callsign = String::with_capacity(6);
        for &b in &bytes[0..6] {
            let unshifted = b >> 1;
            if !unshifted.is_ascii() {
                return Err(AddressError::InvalidAddress {
                    reason: format!("non-ASCII byte 0x{b:02x} in callsign field"),
                });
            }
            callsign.push(unshifted as char);
        }
        let trimmed = callsign.trim_end_matches(' ').to_string();
        if trimmed.is_empty() {
            return Err(AddressError::InvalidAddress {
                reason: "callsign field is all spaces".to_string(),
            });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AddressError::InvalidAddress {
                reason: format!("callsign {trimmed:?} contains non-alphanumeric characters"),
            });
        }
        let ssid_octet = bytes[6];
        let ssid = (ssid_octet >> 1) & 0x0F;
        let c_bit = ssid_octet & 0x80 != 0;
        let e_bit = ssid_octet & 0x01 != 0;
        Ok((
            Self {
                callsign: trimmed,
                ssid,
                is_repeater: false,
                has_been_repeated: c_bit,
                is_command_response: c_bit,
            },
            e_bit,
        ))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.callsign)?;
        if self.ssid != 0 {
            write!(f, "-{}", self.ssid)?;
        }
        if self.has_been_repeated {
            write!(f, "*")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (core, has_been_repeated) = match s.strip_suffix('*') {
            Some(core) => (core, true),
            None => (s, false),
        };
        let core = core.to_ascii_uppercase();
        let (callsign, ssid) = match core.split_once('-') {
            Some((call, ssid_str)) => {
                let ssid = ssid_str.parse::<u8>().map_err(|_| AddressError::InvalidCallsign {
                    callsign: s.to_string(),
                    reason: format!("SSID {ssid_str:?} is not a number 0-15"),
                })?;
                (call, ssid)
            }
            None => (core.as_str(), 0),
        };
        validate_callsign(callsign, ssid).map_err(|_| AddressError::InvalidCallsign {
            callsign: s.to_string(),
            reason: "callsign must be 1-6 alphanumeric characters, SSID 0-15".to_string(),
        })?;
        Ok(Self {
            callsign: callsign.to_string(),
            ssid,
            is_repeater: false,
            has_been_repeated,
            is_command_response: false,
        })
    }
}

fn validate_callsign(callsign: &str, ssid: u8) -> Result<(), AddressError> {
    if callsign.is_empty() || callsign.len() > 6 {
        return Err(AddressError::InvalidCallsign {
            callsign: callsign.to_string(),
            reason: format!("length {} not in 1..=6", callsign.len()),
        });
    }
    if !callsign.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AddressError::InvalidCallsign {
            callsign: callsign.to_string(),
            reason: "must be ASCII letters/digits only".to_string(),
        });
    }
    if ssid > 15 {
        return Err(AddressError::InvalidCallsign {
            callsign: callsign.to_string(),
            reason: format!("SSID {ssid} out of range 0-15"),
        });
    }
    Ok(())
}

/// Right-pad `s` with ASCII spaces to `width` characters.
///
/// Shared with the NET/ROM mnemonic fields, which use the same
/// fixed-width ASCII convention.
pub(crate) fn pad_ascii(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    while out.len() < width {
        out.push(' ');
    }
    out
}

/// Parse a textual address `CALL[-SSID][*]` into an [`Address`].
///
/// Equivalent to `s.parse()`.
pub fn parse_address(s: &str) -> Result<Address, AddressError> {
    s.parse()
}

/// Render an [`Address`] in its canonical `CALL[-SSID][*]` text form.
///
/// Equivalent to `address.to_string()`.
pub fn format_address(address: &Address) -> String {
    address.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let a: Address = "KC3TSS".parse().unwrap();
        assert_eq!(a.callsign, "KC3TSS");
        assert_eq!(a.ssid, 0);
        assert!(!a.has_been_repeated);
    }

    #[test]
    fn parse_with_ssid_and_star() {
        let a: Address = "klprc3-3*".parse().unwrap();
        assert_eq!(a.callsign, "KLPRC3");
        assert_eq!(a.ssid, 3);
        assert!(a.has_been_repeated);
    }

    #[test]
    fn format_round_trips() {
        for s in ["KC3TSS", "N6TSS-5", "KLPRC3-1*"] {
            let a: Address = s.parse().unwrap();
            assert_eq!(a.to_string(), s.to_ascii_uppercase());
        }
    }

    #[test]
    fn rejects_bad_callsign() {
        assert!("TOOLONGCALL".parse::<Address>().is_err());
        assert!("AB-16".parse::<Address>().is_err());
        assert!("AB_CD".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn encode_decode_round_trip() {
        let mut a = Address::new("N6TSS", 5).unwrap();
        a.is_command_response = true;
        let bytes = a.encode(true);
        let (decoded, e_bit) = Address::decode(&bytes).unwrap();
        assert!(e_bit);
        assert_eq!(decoded.callsign, "N6TSS");
        assert_eq!(decoded.ssid, 5);
        assert!(decoded.is_command_response);
    }

    #[test]
    fn encode_sets_reserved_bits() {
        let a = Address::new("A", 0).unwrap();
        let bytes = a.encode(false);
        assert_eq!(bytes[6] & 0b0110_0000, 0b0110_0000);
    }

    #[test]
    fn encode_pads_with_shifted_spaces() {
        let a = Address::new("A", 0).unwrap();
        let bytes = a.encode(false);
        assert_eq!(bytes[1], b' ' << 1);
    }

    #[test]
    fn decode_rejects_all_spaces() {
        let bytes = [b' ' << 1; 7];
        assert!(Address::decode(&bytes).is_err());
    }

    #[test]
    fn decode_ignores_reserved_bit_value() {
        let a = Address::new("KC3TSS", 0).unwrap();
        let mut bytes = a.encode(true);
        bytes[6] &= !0b0110_0000; // clear reserved bits; decoder must still accept
        let (decoded, e_bit) = Address::decode(&bytes).unwrap();
        assert!(e_bit);
        assert_eq!(decoded.callsign, "KC3TSS");
    }
}
