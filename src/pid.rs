//! AX.25 Protocol Identifier (PID) byte registry.
//!
//! The PID is a single octet carried by I and UI frames that identifies
//! the layer-3 protocol of `data`. The codec treats any `u8` as a
//! structurally legal PID (see [`crate::frame::Frame`]); this module is
//! just a lookup table of the well-known values, not a validating
//! boundary.

/// Well-known AX.25 PID values.
///
/// Mirrors the PID registry that [AX.25 v2.2] assigns, the same
/// registry `il2p_deframer::Pids` documents under IL2P's own numbering.
///
/// [AX.25 v2.2]: https://www.tapr.org/pub_ax25.html
pub struct Pid;

impl Pid {
    /// ISO 8208 / CCITT X.25 PLP.
    pub const ISO_8208_CCITT_X25_PLP: u8 = 0x01;

    /// Compressed TCP/IP (Van Jacobson, RFC 1144).
    pub const COMPRESSED_TCPIP: u8 = 0x06;

    /// Uncompressed TCP/IP.
    pub const UNCOMPRESSED_TCPIP: u8 = 0x07;

    /// Segmentation fragment.
    pub const SEGMENTATION_FRAGMENT: u8 = 0x08;

    /// TEXNET datagram protocol.
    pub const TEXNET_DATAGRAM: u8 = 0xC3;

    /// Link Quality Protocol.
    pub const LINK_QUALITY_PROTOCOL: u8 = 0xC4;

    /// Appletalk.
    pub const APPLETALK: u8 = 0xCA;

    /// Appletalk ARP.
    pub const APPLETALK_ARP: u8 = 0xCB;

    /// ARPA Internet Protocol.
    pub const ARPA_INTERNET_PROTOCOL: u8 = 0xCC;

    /// ARPA Address Resolution.
    pub const ARPA_ADDRESS_RESOLUTION: u8 = 0xCD;

    /// FlexNet.
    pub const FLEXNET: u8 = 0xCE;

    /// NET/ROM, routed over a UI frame. See [`crate::netrom`].
    pub const NETROM: u8 = 0xCF;

    /// No layer 3 (i.e. text).
    pub const NO_LAYER3: u8 = 0xF0;

    /// Escape to a following layer-3 identifier byte.
    ///
    /// Left unhandled by design: the codec treats PID as exactly one
    /// octet unconditionally, 0xFF included, and passes the frame
    /// through unchanged on decode. See the open question in the
    /// design notes.
    pub const ESCAPE: u8 = 0xFF;
}
