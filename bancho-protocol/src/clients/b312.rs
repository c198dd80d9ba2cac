//! b312: match start and score updates, plus the `in_progress` flag in the
//! match descriptor.

use super::b298::{read_slots, slot_lists};
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use crate::readers;
use crate::types::{Match, ScoreFrame};
use bancho_wire::{WireRead, WireWrite};
use bytes::{BufMut, BytesMut};
use std::io::Write;

pub fn codec() -> BanchoCodec {
    let mut codec = super::b298::codec();
    codec.supported.extend([
        packet::OSU_MATCH_START,
        packet::BANCHO_MATCH_START,
        packet::OSU_MATCH_SCORE_UPDATE,
        packet::BANCHO_MATCH_SCORE_UPDATE,
        packet::OSU_MATCH_COMPLETE,
    ]);

    codec.readers.insert(packet::OSU_MATCH_START, readers::read_empty as _);
    codec
        .readers
        .insert(packet::OSU_MATCH_SCORE_UPDATE, readers::read_score_frame as _);
    codec.readers.insert(packet::OSU_MATCH_COMPLETE, readers::read_empty as _);

    codec.writers.match_start = write_match_start;
    codec.writers.match_score_update = write_match_score_update;

    codec.fields.encode_match = Some(encode_match);
    codec.fields.read_match = Some(read_match);

    codec
}

fn write_match_start(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    _match_info: &Match,
) -> Result<(), ProtocolError> {
    // The client reuses its current match state; the packet is a bare signal.
    codec.write_packet(stream, packet::BANCHO_MATCH_START, &[])
}

fn write_match_score_update(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    frame: &ScoreFrame,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    match codec.fields.put_score_frame {
        Some(put) => put(codec, &mut payload, frame),
        None => {
            return Err(ProtocolError::UnimplementedCapability {
                capability: "put_score_frame",
            })
        }
    }
    codec.write_packet(stream, packet::BANCHO_MATCH_SCORE_UPDATE, &payload)
}

fn encode_match(codec: &BanchoCodec, match_info: &Match) -> BytesMut {
    let slot_count = codec.match_slot_size();
    let (open, used, ready) = slot_lists(match_info, slot_count);

    let mut payload = BytesMut::new();
    payload.put_u8(match_info.id as u8);
    payload.put_bool(match_info.in_progress);
    payload.put_u8(match_info.match_type);
    payload.put_string(&match_info.name);
    payload.put_string(&match_info.beatmap_text);
    payload.put_i32_le(match_info.beatmap_id);
    payload.put_string(&match_info.beatmap_checksum);
    payload.put_bool_list(&open);
    payload.put_bool_list(&used);
    payload.put_bool_list(&ready);

    for slot in match_info.slots.iter().take(slot_count) {
        if slot.has_player() {
            payload.put_i32_le(slot.user_id);
        }
    }

    payload
}

fn read_match(codec: &BanchoCodec, buf: &mut &[u8]) -> Result<Match, ProtocolError> {
    let slot_count = codec.match_slot_size();

    let match_id = buf.try_get_u8()?;
    let in_progress = buf.try_get_bool()?;
    let match_type = buf.try_get_u8()?;
    let name = buf.try_get_string()?;
    let beatmap_text = buf.try_get_string()?;
    let beatmap_id = buf.try_get_i32_le()?;
    let beatmap_checksum = buf.try_get_string()?;

    let open = buf.try_get_bool_list(slot_count)?;
    let used = buf.try_get_bool_list(slot_count)?;
    let ready = buf.try_get_bool_list(slot_count)?;
    let slots = read_slots(buf, &open, &used, &ready)?;

    Ok(Match {
        id: match_id as i32,
        in_progress,
        match_type,
        name,
        beatmap_text,
        beatmap_id,
        beatmap_checksum,
        slots,
        ..Match::default()
    })
}
