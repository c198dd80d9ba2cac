//! b294: private messages, plus score frames appended to spectator frame
//! bundles.

use super::{b282, b291};
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use crate::readers;
use crate::types::{Message, ReplayFrameBundle, ScoreFrame};
use bancho_wire::{WireRead, WireWrite};
use bytes::{BufMut, BytesMut};
use std::io::Write;

pub fn codec() -> BanchoCodec {
    let mut codec = b291::codec();
    codec
        .supported
        .push(packet::OSU_SEND_IRC_MESSAGE_PRIVATE);
    codec.readers.insert(
        packet::OSU_SEND_IRC_MESSAGE_PRIVATE,
        readers::read_private_message as _,
    );
    codec.writers.message = write_message;
    codec.writers.spectate_frames = write_spectate_frames;
    codec.fields.read_private_message = Some(read_private_message);
    codec.fields.read_frame_bundle = read_frame_bundle;
    codec.fields.read_score_frame = Some(read_score_frame);
    codec.fields.put_score_frame = Some(put_score_frame);
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

    let is_direct = message.target != "#osu";
    payload.put_bool(is_direct);

    codec.write_packet(stream, packet::BANCHO_SEND_MESSAGE, &payload)
}

fn read_private_message(
    _codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Message, ProtocolError> {
    let target = buf.try_get_string()?;
    let content = buf.try_get_string()?;
    let is_direct = buf.try_get_bool()?;

    if !is_direct {
        return Err(ProtocolError::Malformed(
            "expected direct message, got channel message",
        ));
    }

    Ok(Message {
        sender: String::new(),
        sender_id: 0,
        content,
        target,
    })
}

pub(super) fn write_spectate_frames(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    bundle: &ReplayFrameBundle,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    b282::put_replay_frames(&mut payload, bundle);

    if let (Some(frame), Some(put_score_frame)) =
        (&bundle.score_frame, codec.fields.put_score_frame)
    {
        put_score_frame(codec, &mut payload, frame);
    }

    codec.write_packet(stream, packet::BANCHO_SPECTATE_FRAMES, &payload)
}

pub(super) fn read_frame_bundle(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<ReplayFrameBundle, ProtocolError> {
    let count = buf.try_get_u16_le()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push((codec.fields.read_replay_frame)(codec, buf)?);
    }

    let action = buf.try_get_u8()?;

    // The trailing score frame has no presence marker; a failed read means
    // it was never sent.
    let score_frame = codec
        .fields
        .read_score_frame
        .and_then(|read| read(codec, buf).ok());

    Ok(ReplayFrameBundle {
        frames,
        action,
        score_frame,
    })
}

fn put_score_frame(_codec: &BanchoCodec, payload: &mut BytesMut, frame: &ScoreFrame) {
    payload.put_string(&frame.checksum());
    payload.put_u8(frame.id);
    payload.put_u16_le(frame.total_300);
    payload.put_u16_le(frame.total_100);
    payload.put_u16_le(frame.total_50);
    payload.put_u16_le(frame.total_geki);
    payload.put_u16_le(frame.total_katu);
    payload.put_u16_le(frame.total_miss);
    payload.put_u32_le(frame.total_score);
    payload.put_u16_le(frame.max_combo);
    payload.put_u16_le(frame.current_combo);
    payload.put_bool(frame.perfect);
    payload.put_u8(frame.hp);
}

fn read_score_frame(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<ScoreFrame, ProtocolError> {
    let _checksum = buf.try_get_string()?;

    Ok(ScoreFrame {
        // Not on this wire yet.
        time: 0,
        id: buf.try_get_u8()?,
        total_300: buf.try_get_u16_le()?,
        total_100: buf.try_get_u16_le()?,
        total_50: buf.try_get_u16_le()?,
        total_geki: buf.try_get_u16_le()?,
        total_katu: buf.try_get_u16_le()?,
        total_miss: buf.try_get_u16_le()?,
        total_score: buf.try_get_u32_le()?,
        max_combo: buf.try_get_u16_le()?,
        current_combo: buf.try_get_u16_le()?,
        perfect: buf.try_get_bool()?,
        hp: buf.try_get_u8()?,
        tag_byte: 0,
    })
}
