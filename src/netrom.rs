/*! NET/ROM routing-broadcast codec.

NET/ROM is an amateur-radio network-layer protocol carried as the
payload of an AX.25 UI frame with PID `0xCF` ([`crate::pid::Pid::NETROM`]).
A routing broadcast advertises a station's known destinations and the
best next-hop neighbour/quality for each.
*/
use log::debug;

use crate::address::{pad_ascii, Address};
use crate::control::{Control, FrameType, UnnumberedKind};
use crate::error::{AddressError, NetromError};
use crate::frame::Frame;
use crate::pid::Pid;

const SIGNATURE: u8 = 0xFF;
const MNEMONIC_LEN: usize = 6;
const RECORD_LEN: usize = 7 + MNEMONIC_LEN + 7 + 1;

/// One advertised destination in a routing broadcast.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Destination {
    /// The destination's own callsign/SSID.
    pub callsign: Address,
    /// 6-character ASCII mnemonic, space-padded.
    pub mnemonic: String,
    /// Callsign/SSID of the best next-hop neighbour towards it.
    pub best_neighbor: Address,
    /// Link quality towards `best_neighbor`, 0-255 (higher is better).
    pub best_quality: u8,
}

/// A NET/ROM routing broadcast: a sender mnemonic plus its destination
/// table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoutingBroadcast {
    /// 6-character ASCII mnemonic of the broadcasting station,
    /// space-padded.
    pub sender: String,
    /// Ordered destination records.
    pub destinations: Vec<Destination>,
}

fn validate_mnemonic(s: &str) -> Result<(), NetromError> {
    if s.len() > MNEMONIC_LEN || !s.is_ascii() {
        return Err(NetromError::InvalidMnemonic {
            mnemonic: s.to_string(),
        });
    }
    Ok(())
}

fn encode_plain_address(a: &Address) -> [u8; 7] {
    let mut a = a.clone();
    a.is_repeater = false;
    a.is_command_response = false;
    a.encode(false)
}

fn decode_plain_address(bytes: &[u8]) -> Result<Address, AddressError> {
    let (mut a, _end_of_address) = Address::decode(bytes)?;
    a.is_command_response = false;
    a.has_been_repeated = false;
    Ok(a)
}

/// Encode a [`RoutingBroadcast`] into its NET/ROM wire payload.
pub fn encode_routing_broadcast(r: &RoutingBroadcast) -> Result<Vec<u8>, NetromError> {
    validate_mnemonic(&r.sender)?;
    let mut out = Vec::with_capacity(1 + MNEMONIC_LEN + RECORD_LEN * r.destinations.len());
    out.push(SIGNATURE);
    out.extend(pad_ascii(&r.sender, MNEMONIC_LEN).into_bytes());
    for d in &r.destinations {
        validate_mnemonic(&d.mnemonic)?;
        out.extend_from_slice(&encode_plain_address(&d.callsign));
        out.extend(pad_ascii(&d.mnemonic, MNEMONIC_LEN).into_bytes());
        out.extend_from_slice(&encode_plain_address(&d.best_neighbor));
        out.push(d.best_quality);
    }
    Ok(out)
}

/// Decode a NET/ROM routing-broadcast wire payload.
pub fn decode_routing_broadcast(bytes: &[u8]) -> Result<RoutingBroadcast, NetromError> {
    let got = bytes.first().copied().unwrap_or(0);
    if got != SIGNATURE {
        debug!("decode_routing_broadcast: bad signature 0x{got:02x}");
        return Err(NetromError::InvalidNetromSignature { got });
    }
    if bytes.len() < 1 + MNEMONIC_LEN {
        return Err(NetromError::TruncatedNetromRecord {
            body_len: bytes.len().saturating_sub(1),
        });
    }
    let sender: String = bytes[1..1 + MNEMONIC_LEN].iter().map(|&b| b as char).collect();
    let body = &bytes[1 + MNEMONIC_LEN..];
    if !body.len().is_multiple_of(RECORD_LEN) {
        return Err(NetromError::TruncatedNetromRecord {
            body_len: body.len(),
        });
    }
    let mut destinations = Vec::with_capacity(body.len() / RECORD_LEN);
    for record in body.chunks_exact(RECORD_LEN) {
        let callsign = decode_plain_address(&record[0..7])?;
        let mnemonic: String = record[7..7 + MNEMONIC_LEN].iter().map(|&b| b as char).collect();
        let best_neighbor = decode_plain_address(&record[7 + MNEMONIC_LEN..7 + MNEMONIC_LEN + 7])?;
        let best_quality = record[RECORD_LEN - 1];
        destinations.push(Destination {
            callsign,
            mnemonic,
            best_neighbor,
            best_quality,
        });
    }
    Ok(RoutingBroadcast { sender, destinations })
}

impl RoutingBroadcast {
    /// Build the UI [`Frame`] that carries this routing broadcast,
    /// with PID [`Pid::NETROM`].
    pub fn into_frame(self, dst: Address, src: Address, via: Vec<Address>) -> Result<Frame, NetromError> {
        Ok(Frame {
            dst,
            src,
            via,
            control: Control::U {
                kind: UnnumberedKind::Ui,
                poll_final: false,
            },
            pid: Some(Pid::NETROM),
            data: Some(encode_routing_broadcast(&self)?),
        })
    }

    /// Extract a [`RoutingBroadcast`] from a UI frame with PID
    /// [`Pid::NETROM`].
    pub fn from_frame(frame: &Frame) -> Result<Self, NetromError> {
        if frame.control.frame_type() != FrameType::Ui || frame.pid != Some(Pid::NETROM) {
            return Err(NetromError::NotRoutingBroadcast);
        }
        let data = frame.data.as_deref().unwrap_or(&[]);
        decode_routing_broadcast(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(callsign: &str, ssid: u8) -> Address {
        Address::new(callsign, ssid).unwrap()
    }

    #[test]
    fn s5_routing_broadcast() {
        let r = RoutingBroadcast {
            sender: "PAC   ".to_string(),
            destinations: vec![Destination {
                callsign: addr("KF6ANX", 5),
                mnemonic: "HILL  ".to_string(),
                best_neighbor: addr("KF6ANX", 5),
                best_quality: 192,
            }],
        };
        let bytes = encode_routing_broadcast(&r).unwrap();
        assert_eq!(bytes.len(), 28);
        assert_eq!(bytes[0], 0xFF);
        let decoded = decode_routing_broadcast(&bytes).unwrap();
        assert_eq!(decoded, r);
    }

    #[test]
    fn empty_destination_list_is_valid() {
        let r = RoutingBroadcast {
            sender: "PAC".to_string(),
            destinations: vec![],
        };
        let bytes = encode_routing_broadcast(&r).unwrap();
        assert_eq!(bytes.len(), 7);
        let decoded = decode_routing_broadcast(&bytes).unwrap();
        assert_eq!(decoded.sender, "PAC   ");
        assert!(decoded.destinations.is_empty());
    }

    #[test]
    fn bad_signature_rejected() {
        let bytes = [0x00u8; 7];
        assert!(matches!(
            decode_routing_broadcast(&bytes),
            Err(NetromError::InvalidNetromSignature { got: 0 })
        ));
    }

    #[test]
    fn truncated_record_rejected() {
        let mut bytes = vec![0xFFu8];
        bytes.extend(b"PAC   ");
        bytes.extend([0u8; 20]); // one byte short of a full 21-byte record
        assert!(matches!(
            decode_routing_broadcast(&bytes),
            Err(NetromError::TruncatedNetromRecord { body_len: 20 })
        ));
    }

    #[test]
    fn over_long_mnemonic_rejected_on_encode() {
        let r = RoutingBroadcast {
            sender: "TOOLONGSENDER".to_string(),
            destinations: vec![],
        };
        assert!(matches!(
            encode_routing_broadcast(&r),
            Err(NetromError::InvalidMnemonic { .. })
        ));
    }

    #[test]
    fn cr_and_h_bits_cleared_on_encode() {
        let mut callsign = addr("KF6ANX", 5);
        callsign.is_command_response = true;
        let r = RoutingBroadcast {
            sender: "PAC".to_string(),
            destinations: vec![Destination {
                callsign,
                mnemonic: "HILL".to_string(),
                best_neighbor: addr("KF6ANX", 5),
                best_quality: 1,
            }],
        };
        let bytes = encode_routing_broadcast(&r).unwrap();
        // Destination callsign SSID octet: C bit cleared, E bit 0.
        assert_eq!(bytes[7 + 6] & 0x81, 0x60 & 0x81);
        let decoded = decode_routing_broadcast(&bytes).unwrap();
        assert!(!decoded.destinations[0].callsign.is_command_response);
    }

    #[test]
    fn into_frame_and_from_frame_round_trip() {
        let r = RoutingBroadcast {
            sender: "PAC   ".to_string(),
            destinations: vec![Destination {
                callsign: addr("KF6ANX", 5),
                mnemonic: "HILL  ".to_string(),
                best_neighbor: addr("KF6ANX", 5),
                best_quality: 192,
            }],
        };
        let frame = r
            .clone()
            .into_frame(addr("DEST", 0), addr("SRC", 0), vec![])
            .unwrap();
        assert_eq!(frame.pid, Some(Pid::NETROM));
        let round_tripped = RoutingBroadcast::from_frame(&frame).unwrap();
        assert_eq!(round_tripped, r);
    }

    #[test]
    fn from_frame_rejects_non_netrom() {
        let frame = Frame {
            dst: addr("DEST", 0),
            src: addr("SRC", 0),
            via: vec![],
            control: Control::U {
                kind: UnnumberedKind::Ui,
                poll_final: false,
            },
            pid: Some(Pid::NO_LAYER3),
            data: Some(vec![]),
        };
        assert!(matches!(
            RoutingBroadcast::from_frame(&frame),
            Err(NetromError::NotRoutingBroadcast)
        ));
    }
}
