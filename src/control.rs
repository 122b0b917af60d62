/*! AX.25 control-field codec (modulo-8 only).

One octet, dispatched by its low bit(s) into one of three frame
families. Bit numbering below follows the spec: bit 7 is the MSB, bit
0 the LSB, matching how AX.25 v2.2 section 4.2 lays the fields out.

Modulo-128 (extended) control fields are out of scope — see the design
notes on why no variant is added here for them.
*/
use crate::error::ControlError;

/// Supervisory (S) frame kind, encoded in bits 3-2 of the control octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SupervisoryKind {
    /// Receive Ready.
    Rr,
    /// Receive Not Ready.
    Rnr,
    /// Reject.
    Rej,
    /// Selective Reject.
    Srej,
}

/// Unnumbered (U) frame kind, encoded in the five scattered M bits
/// (bits 7, 6, 5, 3, 2) of the control octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnnumberedKind {
    /// Set Asynchronous Balanced Mode.
    Sabm,
    /// Disconnect.
    Disc,
    /// Disconnected Mode.
    Dm,
    /// Unnumbered Acknowledge.
    Ua,
    /// Frame Reject.
    Frmr,
    /// Unnumbered Information.
    Ui,
    /// Exchange Identification.
    Xid,
    /// Test.
    Test,
}

const SABM: u8 = 0x2F;
const DISC: u8 = 0x43;
const DM: u8 = 0x0F;
const UA: u8 = 0x63;
const FRMR: u8 = 0x87;
const UI: u8 = 0x03;
const XID: u8 = 0xAF;
const TEST: u8 = 0xE3;

/// P/F bit position within a U-frame control octet; masking it off
/// leaves the base value that identifies the kind (see `SABM` etc.).
const U_POLL_FINAL_BIT: u8 = 0x10;

impl UnnumberedKind {
    fn base_octet(self) -> u8 {
        match self {
            Self::Sabm => SABM,
            Self::Disc => DISC,
            Self::Dm => DM,
            Self::Ua => UA,
            Self::Frmr => FRMR,
            Self::Ui => UI,
            Self::Xid => XID,
            Self::Test => TEST,
        }
    }

    fn from_base_octet(base: u8) -> Option<Self> {
        Some(match base {
            SABM => Self::Sabm,
            DISC => Self::Disc,
            DM => Self::Dm,
            UA => Self::Ua,
            FRMR => Self::Frmr,
            UI => Self::Ui,
            XID => Self::Xid,
            TEST => Self::Test,
            _ => return None,
        })
    }
}

/// The specific leaf frame kind, derived from a [`Control`] value.
///
/// Exactly one of [`Control::is_i`], [`Control::is_s`], [`Control::is_u`]
/// is true for any `Control`, and `frame_type` names which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FrameType {
    /// Information transfer frame.
    I,
    /// Receive Ready.
    Rr,
    /// Receive Not Ready.
    Rnr,
    /// Reject.
    Rej,
    /// Selective Reject.
    Srej,
    /// Set Asynchronous Balanced Mode.
    Sabm,
    /// Disconnect.
    Disc,
    /// Disconnected Mode.
    Dm,
    /// Unnumbered Acknowledge.
    Ua,
    /// Frame Reject.
    Frmr,
    /// Unnumbered Information.
    Ui,
    /// Exchange Identification.
    Xid,
    /// Test.
    Test,
}

/// A decoded AX.25 control field, modulo-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Control {
    /// Information transfer frame.
    I {
        /// N(S): send sequence number, 0-7.
        send_seqno: u8,
        /// N(R): receive sequence number, 0-7.
        recv_seqno: u8,
        /// Poll bit.
        poll: bool,
    },
    /// Supervisory frame.
    S {
        /// Which supervisory function.
        kind: SupervisoryKind,
        /// N(R): receive sequence number, 0-7.
        recv_seqno: u8,
        /// Poll/Final bit.
        poll_final: bool,
    },
    /// Unnumbered frame.
    U {
        /// Which unnumbered function.
        kind: UnnumberedKind,
        /// Poll/Final bit.
        poll_final: bool,
    },
}

impl Control {
    /// True if this is an Information transfer frame.
    pub fn is_i(&self) -> bool {
        matches!(self, Control::I { .. })
    }

    /// True if this is a Supervisory frame.
    pub fn is_s(&self) -> bool {
        matches!(self, Control::S { .. })
    }

    /// True if this is an Unnumbered frame.
    pub fn is_u(&self) -> bool {
        matches!(self, Control::U { .. })
    }

    /// The specific leaf kind of this control field.
    pub fn frame_type(&self) -> FrameType {
        match self {
            Control::I { .. } => FrameType::I,
            Control::S { kind, .. } => match kind {
                SupervisoryKind::Rr => FrameType::Rr,
                SupervisoryKind::Rnr => FrameType::Rnr,
                SupervisoryKind::Rej => FrameType::Rej,
                SupervisoryKind::Srej => FrameType::Srej,
            },
            Control::U { kind, .. } => match kind {
                UnnumberedKind::Sabm => FrameType::Sabm,
                UnnumberedKind::Disc => FrameType::Disc,
                UnnumberedKind::Dm => FrameType::Dm,
                UnnumberedKind::Ua => FrameType::Ua,
                UnnumberedKind::Frmr => FrameType::Frmr,
                UnnumberedKind::Ui => FrameType::Ui,
                UnnumberedKind::Xid => FrameType::Xid,
                UnnumberedKind::Test => FrameType::Test,
            },
        }
    }

    /// True if a frame carrying this control field also carries a PID
    /// and payload, i.e. this is `I` or `U`/`Ui`.
    pub(crate) fn carries_payload(&self) -> bool {
        matches!(self.frame_type(), FrameType::I | FrameType::Ui)
    }

    /// Encode to the on-air control octet.
    pub fn encode(&self) -> u8 {
        match *self {
            Control::I {
                send_seqno,
                recv_seqno,
                poll,
            } => ((recv_seqno & 7) << 5) | ((poll as u8) << 4) | ((send_seqno & 7) << 1),
            Control::S {
                kind,
                recv_seqno,
                poll_final,
            } => {
                let ss = match kind {
                    SupervisoryKind::Rr => 0b00,
                    SupervisoryKind::Rnr => 0b01,
                    SupervisoryKind::Rej => 0b10,
                    SupervisoryKind::Srej => 0b11,
                };
                ((recv_seqno & 7) << 5) | ((poll_final as u8) << 4) | (ss << 2) | 0b01
            }
            Control::U { kind, poll_final } => {
                kind.base_octet() | if poll_final { U_POLL_FINAL_BIT } else { 0 }
            }
        }
    }

    /// Decode an on-air control octet.
    pub fn decode(octet: u8) -> Result<Self, ControlError> {
        if octet & 0x01 == 0 {
            // I frame: bit0 is always 0; bit1 is N(S)'s LSB, not a
            // dispatch bit.
            let recv_seqno = (octet >> 5) & 0x07;
            let poll = (octet >> 4) & 1 != 0;
            let send_seqno = (octet >> 1) & 0x07;
            return Ok(Control::I {
                send_seqno,
                recv_seqno,
                poll,
            });
        }
        if octet & 0x02 == 0 {
            // S frame: bits 1,0 == 0,1.
            let recv_seqno = (octet >> 5) & 0x07;
            let poll_final = (octet >> 4) & 1 != 0;
            let kind = match (octet >> 2) & 0x03 {
                0b00 => SupervisoryKind::Rr,
                0b01 => SupervisoryKind::Rnr,
                0b10 => SupervisoryKind::Rej,
                0b11 => SupervisoryKind::Srej,
                _ => unreachable!(),
            };
            return Ok(Control::S {
                kind,
                recv_seqno,
                poll_final,
            });
        }
        // U frame: bits 1,0 == 1,1.
        let poll_final = octet & U_POLL_FINAL_BIT != 0;
        let base = octet & !U_POLL_FINAL_BIT;
        let kind = UnnumberedKind::from_base_octet(base)
            .ok_or(ControlError::InvalidControl { octet })?;
        Ok(Control::U { kind, poll_final })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_frame_s3() {
        let c = Control::I {
            send_seqno: 3,
            recv_seqno: 5,
            poll: true,
        };
        assert_eq!(c.encode(), 0xB6);
        let d = Control::decode(0xB6).unwrap();
        assert_eq!(
            d,
            Control::I {
                send_seqno: 3,
                recv_seqno: 5,
                poll: true,
            }
        );
        assert!(d.is_i());
        assert_eq!(d.frame_type(), FrameType::I);
    }

    #[test]
    fn sabm_s4() {
        let d = Control::decode(0x2F).unwrap();
        assert_eq!(
            d,
            Control::U {
                kind: UnnumberedKind::Sabm,
                poll_final: false
            }
        );
        let d = Control::decode(0x3F).unwrap();
        assert_eq!(
            d,
            Control::U {
                kind: UnnumberedKind::Sabm,
                poll_final: true
            }
        );
    }

    #[test]
    fn all_unnumbered_kinds_round_trip() {
        for (octet, kind) in [
            (SABM, UnnumberedKind::Sabm),
            (DISC, UnnumberedKind::Disc),
            (DM, UnnumberedKind::Dm),
            (UA, UnnumberedKind::Ua),
            (FRMR, UnnumberedKind::Frmr),
            (UI, UnnumberedKind::Ui),
            (XID, UnnumberedKind::Xid),
            (TEST, UnnumberedKind::Test),
        ] {
            let d = Control::decode(octet).unwrap();
            assert_eq!(
                d,
                Control::U {
                    kind,
                    poll_final: false
                }
            );
            assert_eq!(d.encode(), octet);
        }
    }

    #[test]
    fn unknown_u_kind_rejected() {
        // low two bits 11 (U), P/F cleared base not in the known set.
        assert!(Control::decode(0x13).is_err());
    }

    #[test]
    fn supervisory_round_trip() {
        for kind in [
            SupervisoryKind::Rr,
            SupervisoryKind::Rnr,
            SupervisoryKind::Rej,
            SupervisoryKind::Srej,
        ] {
            let c = Control::S {
                kind,
                recv_seqno: 6,
                poll_final: true,
            };
            let octet = c.encode();
            assert_eq!(octet & 0x03, 0b01);
            assert_eq!(Control::decode(octet).unwrap(), c);
        }
    }

    #[test]
    fn frame_type_predicates_are_exclusive() {
        for octet in 0u8..=255 {
            let Ok(c) = Control::decode(octet) else {
                continue;
            };
            let count = [c.is_i(), c.is_s(), c.is_u()].into_iter().filter(|b| *b).count();
            assert_eq!(count, 1, "octet 0x{octet:02x} matched {count} families");
        }
    }

    #[test]
    fn ui_carries_payload_but_other_u_does_not() {
        assert!(
            Control::U {
                kind: UnnumberedKind::Ui,
                poll_final: false
            }
            .carries_payload()
        );
        assert!(
            !Control::U {
                kind: UnnumberedKind::Sabm,
                poll_final: false
            }
            .carries_payload()
        );
        assert!(
            Control::I {
                send_seqno: 0,
                recv_seqno: 0,
                poll: false
            }
            .carries_payload()
        );
    }
}
