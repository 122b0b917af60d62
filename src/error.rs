//! Error types for the AX.25/NET/ROM codec.
//!
//! Each codec boundary (address, control, frame, NET/ROM) has its own
//! error enum rather than one crate-wide catch-all, so callers can match
//! on exactly the failures a given decoder can produce.

use thiserror::Error;

/// Errors from parsing or decoding an [`crate::address::Address`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A textual callsign (as passed to [`std::str::FromStr`] or
    /// [`crate::parse_address`]) was not a legal `CALL[-SSID][*]` form.
    #[error("invalid callsign {callsign:?}: {reason}")]
    InvalidCallsign {
        /// The offending input string.
        callsign: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A 7-octet on-air address field did not decode to a legal
    /// callsign/SSID.
    #[error("invalid address field: {reason}")]
    InvalidAddress {
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors from decoding a one-octet AX.25 control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The control octet did not match any known I/S/U bit pattern
    /// (only unnumbered frames can fail this way; I and S are fully
    /// dense over the low two bits).
    #[error("invalid control octet 0x{octet:02x}")]
    InvalidControl {
        /// The rejected octet.
        octet: u8,
    },
}

/// Errors from packing or unpacking a whole [`crate::frame::Frame`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// An address in `dst`/`src`/`via` failed to encode or decode.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The control octet failed to decode.
    #[error(transparent)]
    Control(#[from] ControlError),

    /// The buffer ended before an End-of-Address octet, or before the
    /// control field that must follow it.
    #[error("truncated frame: no End-of-Address terminator found")]
    TruncatedFrame,

    /// More than 8 repeater addresses were present.
    #[error("too many repeaters: {count} (max 8)")]
    TooManyRepeaters {
        /// The number of repeaters found or supplied.
        count: usize,
    },

    /// A frame type that carries no payload (S, or U other than UI) had
    /// bytes remaining after the control octet.
    #[error("unexpected trailing bytes after control field: {extra} byte(s)")]
    UnexpectedTrailer {
        /// Number of bytes left over.
        extra: usize,
    },
}

/// Errors from packing or unpacking a NET/ROM routing broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetromError {
    /// An address embedded in a destination record failed to decode.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The first octet of the payload was not `0xFF`.
    #[error("invalid NET/ROM signature byte: 0x{got:02x} (want 0xff)")]
    InvalidNetromSignature {
        /// The byte actually found.
        got: u8,
    },

    /// The body (after signature + sender mnemonic) was not a multiple
    /// of 21 octets.
    #[error("truncated NET/ROM destination record: body is {body_len} byte(s), not a multiple of 21")]
    TruncatedNetromRecord {
        /// Length of the destination-record region.
        body_len: usize,
    },

    /// A mnemonic supplied for encoding was longer than 6 ASCII
    /// characters, or contained non-ASCII bytes.
    #[error("invalid NET/ROM mnemonic {mnemonic:?}: must be at most 6 ASCII characters")]
    InvalidMnemonic {
        /// The offending mnemonic.
        mnemonic: String,
    },

    /// [`crate::netrom::RoutingBroadcast::from_frame`] was called on a
    /// frame that isn't a UI frame with PID `0xCF`.
    #[error("frame is not a NET/ROM routing broadcast (not UI, or PID != 0xcf)")]
    NotRoutingBroadcast,
}
