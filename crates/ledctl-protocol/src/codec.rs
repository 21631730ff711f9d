//! Datagram payload codec.
//!
//! Each datagram carries exactly one label and nothing else. The console
//! only ever encodes; decoding is used by the device side (and the monitor)
//! to turn a received payload back into the LED it addresses.

use bytes::{BufMut, Bytes, BytesMut};

use crate::commands::Led;
use crate::error::{ProtocolError, ProtocolResult};

/// Prefix shared by every LED label.
pub const LABEL_PREFIX: &str = "LED-";

/// Length of the longest payload the protocol defines.
pub const MAX_PAYLOAD_LEN: usize = 5;

/// Encoder/decoder for LED datagram payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadCodec;

impl PayloadCodec {
    /// Encode the datagram payload that toggles `led`.
    pub fn encode(led: Led) -> Bytes {
        let label = led.label();
        let mut buf = BytesMut::with_capacity(label.len());
        buf.put_slice(label.as_bytes());
        buf.freeze()
    }

    /// Decode a received datagram payload.
    ///
    /// The whole payload must be a label; trailing bytes such as a newline
    /// make it unknown.
    pub fn decode(payload: &[u8]) -> ProtocolResult<Led> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(ProtocolError::TooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let text = std::str::from_utf8(payload).map_err(|_| ProtocolError::InvalidUtf8)?;

        Led::ALL
            .into_iter()
            .find(|led| led.label() == text)
            .ok_or_else(|| ProtocolError::UnknownLabel(text.to_string()))
    }
}
