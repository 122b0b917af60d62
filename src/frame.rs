/*! Whole-frame AX.25 codec: addresses, repeater path, control, PID, payload.

Assembles/parses a complete frame per AX.25 v2.2 section 2.2, on top of
the address codec (`crate::address`) and control codec (`crate::control`).
The physical layer's flags and FCS are assumed already stripped; see
`HdlcDeframer` in the host SDR framework for where that happens upstream
of this codec.
*/
use log::{debug, trace};

use crate::address::Address;
use crate::control::Control;
use crate::error::FrameError;

/// Maximum number of repeater (digipeater) addresses in a path.
pub const MAX_REPEATERS: usize = 8;

/// A fully decoded (or to-be-encoded) AX.25 frame.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Destination address.
    pub dst: Address,
    /// Source address.
    pub src: Address,
    /// Ordered repeater (digipeater) path, 0-8 entries.
    pub via: Vec<Address>,
    /// The control field.
    pub control: Control,
    /// Protocol Identifier, present iff `control` is `I` or `UI`.
    pub pid: Option<u8>,
    /// Payload, present iff `control` is `I` or `UI`. May be empty.
    pub data: Option<Vec<u8>>,
}

/// The command/response sense of a frame, derived from the `dst`/`src`
/// command-response bits per AX.25 v2.2 section 6.1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CommandResponse {
    /// `dst.is_command_response = true`, `src.is_command_response = false`.
    Command,
    /// `dst.is_command_response = false`, `src.is_command_response = true`.
    Response,
    /// Both set or both clear: legacy AX.25 v2.0 framing.
    LegacyV20,
}

impl Frame {
    /// Derive the command/response sense of this frame.
    pub fn command_response(&self) -> CommandResponse {
        match (self.dst.is_command_response, self.src.is_command_response) {
            (true, false) => CommandResponse::Command,
            (false, true) => CommandResponse::Response,
            _ => CommandResponse::LegacyV20,
        }
    }
}

/// Encode a [`Frame`] to its on-air byte representation.
///
/// Repeater count over [`MAX_REPEATERS`] is treated as a programmer
/// error and refused rather than silently truncated.
pub fn encode_frame(frame: &Frame) -> Result<Vec<u8>, FrameError> {
    if frame.via.len() > MAX_REPEATERS {
        return Err(FrameError::TooManyRepeaters {
            count: frame.via.len(),
        });
    }
    let no_repeaters = frame.via.is_empty();

    let mut out = Vec::with_capacity(14 + 7 * frame.via.len() + 2 + frame.data_len());

    let mut dst = frame.dst.clone();
    dst.is_repeater = false;
    out.extend_from_slice(&dst.encode(false));

    let mut src = frame.src.clone();
    src.is_repeater = false;
    out.extend_from_slice(&src.encode(no_repeaters));

    let last_via = frame.via.len().saturating_sub(1);
    for (i, rep) in frame.via.iter().enumerate() {
        let mut rep = rep.clone();
        rep.is_repeater = true;
        out.extend_from_slice(&rep.encode(i == last_via));
    }

    out.push(frame.control.encode());

    if frame.control.carries_payload() {
        out.push(frame.pid.unwrap_or(0));
        if let Some(data) = &frame.data {
            out.extend_from_slice(data);
        }
    }

    trace!("encode_frame: {} byte(s)", out.len());
    Ok(out)
}

impl Frame {
    fn data_len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

/// Decode a complete on-air AX.25 frame.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, FrameError> {
    let mut addrs = Vec::new();
    let mut offset = 0usize;
    loop {
        if offset + 7 > bytes.len() {
            debug!("decode_frame: truncated address list at offset {offset}");
            return Err(FrameError::TruncatedFrame);
        }
        let (addr, end_of_address) = Address::decode(&bytes[offset..offset + 7])?;
        addrs.push(addr);
        offset += 7;
        // dst + src + up to MAX_REPEATERS repeaters.
        if addrs.len() > 2 + MAX_REPEATERS {
            return Err(FrameError::TooManyRepeaters {
                count: addrs.len() - 2,
            });
        }
        if end_of_address {
            break;
        }
    }
    let mut addrs = addrs.into_iter();
    let dst = addrs.next().ok_or(FrameError::TruncatedFrame)?;
    let src = addrs.next().ok_or(FrameError::TruncatedFrame)?;
    let via: Vec<Address> = addrs
        .map(|mut a| {
            a.is_repeater = true;
            a
        })
        .collect();

    if offset >= bytes.len() {
        debug!("decode_frame: truncated before control field");
        return Err(FrameError::TruncatedFrame);
    }
    let control = Control::decode(bytes[offset])?;
    offset += 1;

    if control.carries_payload() {
        if offset >= bytes.len() {
            debug!("decode_frame: truncated before PID field");
            return Err(FrameError::TruncatedFrame);
        }
        let pid = bytes[offset];
        offset += 1;
        let data = bytes[offset..].to_vec();
        trace!(
            "decode_frame: {:?} dst={dst} src={src} via={} pid=0x{pid:02x} {} byte(s)",
            control.frame_type(),
            via.len(),
            data.len()
        );
        Ok(Frame {
            dst,
            src,
            via,
            control,
            pid: Some(pid),
            data: Some(data),
        })
    } else {
        if offset != bytes.len() {
            return Err(FrameError::UnexpectedTrailer {
                extra: bytes.len() - offset,
            });
        }
        trace!(
            "decode_frame: {:?} dst={dst} src={src} via={}",
            control.frame_type(),
            via.len()
        );
        Ok(Frame {
            dst,
            src,
            via,
            control,
            pid: None,
            data: None,
        })
    }
}
