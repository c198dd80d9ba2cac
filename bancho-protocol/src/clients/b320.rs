//! b320: messages carry an explicit target, enabling multiple channels.

use super::b312;
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use crate::types::Message;
use bancho_wire::{WireRead, WireWrite};
use bytes::BytesMut;
use std::io::Write;

pub fn codec() -> BanchoCodec {
    let mut codec = b312::codec();
    codec.writers.message = write_message;
    codec.fields.read_message = read_message;
    codec.fields.read_private_message = Some(read_message);
    codec
}

fn write_message(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    message: &Message,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_string(&message.sender);
    payload.put_string(&message.content);
    payload.put_string(&message.target);
    codec.write_packet(stream, packet::BANCHO_SEND_MESSAGE, &payload)
}

pub(super) fn read_message(
    _codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Message, ProtocolError> {
    Ok(Message {
        sender: buf.try_get_string()?,
        sender_id: 0,
        content: buf.try_get_string()?,
        target: buf.try_get_string()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PacketData;

    #[test]
    fn test_message_roundtrip_keeps_target() {
        let codec = codec();
        let message = Message {
            sender: "peppy".into(),
            sender_id: 0,
            content: "welcome".into(),
            target: "#lobby".into(),
        };

        let mut payload = BytesMut::new();
        payload.put_string(&message.sender);
        payload.put_string(&message.content);
        payload.put_string(&message.target);

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_SEND_IRC_MESSAGE, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.data, Some(PacketData::Message(message)));
    }

    #[test]
    fn test_private_messages_share_the_channel_layout() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_string("sender");
        payload.put_string("psst");
        payload.put_string("receiver");

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_SEND_IRC_MESSAGE_PRIVATE, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        match packet.data {
            Some(PacketData::Message(message)) => {
                assert_eq!(message.target, "receiver");
                assert_eq!(message.sender, "sender");
            }
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn test_non_osu_targets_reach_the_wire() {
        let codec = codec();
        let message = Message {
            sender: "a".into(),
            content: "b".into(),
            target: "#somewhere".into(),
            ..Message::default()
        };

        let mut out = Vec::new();
        codec.write_message(&mut out, &message).unwrap();
        assert!(!out.is_empty());
    }
}
