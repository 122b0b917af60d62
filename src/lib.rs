#![warn(missing_docs)]
/*! A codec for the AX.25 v2.2 amateur packet-radio link layer, plus
the NET/ROM routing-broadcast protocol that rides on top of it.

This crate does not talk to a radio, a TNC, or a socket. It converts
between on-air byte sequences and typed Rust values; what carries
those bytes (KISS over a serial port, an SDR demodulator, a file) is
someone else's problem.

# Architecture overview

The codec is layered the way the protocol itself is:

```text
[ Frame ]                     whole frame: addresses + control + PID + payload
    |
    +-- [ Address ]           one 7-octet callsign/SSID/bits field (dst, src, via...)
    +-- [ Control ]           one control octet: I / S / U frame family
    +-- [ Pid ]                well-known protocol-identifier byte values

[ RoutingBroadcast ]          NET/ROM payload carried inside a UI [`Frame`]
    |
    +-- [ Destination ]       one advertised route: callsign, mnemonic, neighbour, quality
```

[`encode_frame`] and [`decode_frame`] are the whole-frame entry points;
[`RoutingBroadcast::into_frame`]/[`RoutingBroadcast::from_frame`] bridge
between a decoded frame's payload and the NET/ROM types.

# Examples

```
use ax25::{Address, Control, Frame, UnnumberedKind, encode_frame, decode_frame};

let frame = Frame {
    dst: Address::new("KC3TRS", 0).unwrap(),
    src: Address::new("NE6TRS", 0).unwrap(),
    via: vec![],
    control: Control::U {
        kind: UnnumberedKind::Ui,
        poll_final: false,
    },
    pid: Some(0xF0),
    data: Some(b"hello".to_vec()),
};
let bytes = encode_frame(&frame).unwrap();
let decoded = decode_frame(&bytes).unwrap();
assert_eq!(decoded, frame);
```
*/

pub mod address;
pub mod control;
pub mod error;
pub mod frame;
pub mod netrom;
pub mod pid;

pub use address::{format_address, parse_address, Address, ADDRESS_LEN};
pub use control::{Control, FrameType, SupervisoryKind, UnnumberedKind};
pub use error::{AddressError, ControlError, FrameError, NetromError};
pub use frame::{decode_frame, encode_frame, CommandResponse, Frame, MAX_REPEATERS};
pub use netrom::{decode_routing_broadcast, encode_routing_broadcast, Destination, RoutingBroadcast};
pub use pid::Pid;
