//! Protocol error types.

use bancho_wire::WireError;
use thiserror::Error;

/// Errors that can occur while framing, translating or decoding packets.
///
/// Errors are returned, never caught-and-continued: after a read error the
/// stream position is unspecified, and after a write error a partial frame
/// may sit in the sink. Callers are expected to drop the stream.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("packet {packet_id} (raw id {raw_id}) is not supported by this client")]
    UnsupportedPacket { raw_id: u16, packet_id: u16 },

    #[error("client does not implement {capability}")]
    UnimplementedCapability { capability: &'static str },

    #[error("negative payload length: {0}")]
    NegativeLength(i32),

    #[error("malformed packet: {0}")]
    Malformed(&'static str),

    #[error("{field} out of range: {value}")]
    ValueOutOfRange { field: &'static str, value: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
