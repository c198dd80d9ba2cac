//! b291: adds the get-attention and announcement packets.

use super::b282;
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use bancho_wire::WireWrite;
use bytes::BytesMut;
use std::io::Write;

pub fn codec() -> BanchoCodec {
    let mut codec = b282::codec();
    codec
        .supported
        .extend([packet::BANCHO_GET_ATTENTION, packet::BANCHO_ANNOUNCE]);
    codec.writers.get_attention = write_get_attention;
    codec.writers.announcement = write_announcement;
    codec.writers.restart = write_restart;
    codec
}

fn write_get_attention(codec: &BanchoCodec, stream: &mut dyn Write) -> Result<(), ProtocolError> {
    codec.write_packet(stream, packet::BANCHO_GET_ATTENTION, &[])
}

fn write_announcement(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    message: &str,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_string(message);
    codec.write_packet(stream, packet::BANCHO_ANNOUNCE, &payload)
}

fn write_restart(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    _retry_ms: i32,
) -> Result<(), ProtocolError> {
    // Backport of the restart packet: the client only gets told in chat.
    (codec.writers.announcement)(codec, stream, "Bancho is restarting, please wait...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_is_supported() {
        let codec = codec();
        assert!(codec.implements_packet(packet::BANCHO_ANNOUNCE));
        assert!(codec.implements_packet(packet::BANCHO_GET_ATTENTION));

        let mut out = Vec::new();
        codec.write_announcement(&mut out, "maintenance soon").unwrap();
        assert_eq!(
            u16::from_le_bytes([out[0], out[1]]),
            codec.logical_to_raw(packet::BANCHO_ANNOUNCE)
        );
    }

    #[test]
    fn test_restart_is_backported_to_announcement() {
        let codec = codec();
        let mut out = Vec::new();
        codec.write_restart(&mut out, 5000).unwrap();
        assert_eq!(
            u16::from_le_bytes([out[0], out[1]]),
            codec.logical_to_raw(packet::BANCHO_ANNOUNCE)
        );
    }

    #[test]
    fn test_base_build_skips_announcement() {
        let codec = b282::codec();
        let mut out = Vec::new();
        codec.write_announcement(&mut out, "maintenance soon").unwrap();
        assert!(out.is_empty());
    }
}
