//! b298: partial multiplayer support and fellow spectators.

use super::b296;
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use crate::readers;
use crate::types::{Match, MatchJoin, MatchSlot, SlotStatus};
use bancho_wire::{WireRead, WireWrite};
use bytes::{BufMut, BytesMut};
use std::io::Write;
use tracing::debug;

pub fn codec() -> BanchoCodec {
    let mut codec = b296::codec();
    codec.supported.extend([
        packet::BANCHO_MATCH_UPDATE,
        packet::BANCHO_MATCH_NEW,
        packet::BANCHO_MATCH_DISBAND,
        packet::OSU_LOBBY_PART,
        packet::OSU_LOBBY_JOIN,
        packet::OSU_MATCH_CREATE,
        packet::OSU_MATCH_JOIN,
        packet::OSU_MATCH_PART,
        packet::BANCHO_LOBBY_JOIN,
        packet::BANCHO_LOBBY_PART,
        packet::BANCHO_MATCH_JOIN_SUCCESS,
        packet::BANCHO_MATCH_JOIN_FAIL,
        packet::OSU_MATCH_CHANGE_SLOT,
        packet::OSU_MATCH_READY,
        packet::OSU_MATCH_LOCK,
        packet::OSU_MATCH_CHANGE_SETTINGS,
        packet::BANCHO_FELLOW_SPECTATOR_JOINED,
        packet::BANCHO_FELLOW_SPECTATOR_LEFT,
    ]);

    codec.readers.insert(packet::OSU_LOBBY_JOIN, readers::read_empty as _);
    codec.readers.insert(packet::OSU_LOBBY_PART, readers::read_empty as _);
    codec.readers.insert(packet::OSU_MATCH_CREATE, readers::read_match as _);
    codec.readers.insert(packet::OSU_MATCH_JOIN, readers::read_match_join as _);
    codec.readers.insert(packet::OSU_MATCH_PART, readers::read_empty as _);
    codec
        .readers
        .insert(packet::OSU_MATCH_CHANGE_SLOT, readers::read_match_change_slot as _);
    codec.readers.insert(packet::OSU_MATCH_READY, readers::read_empty as _);
    codec.readers.insert(packet::OSU_MATCH_LOCK, readers::read_match_lock as _);
    codec
        .readers
        .insert(packet::OSU_MATCH_CHANGE_SETTINGS, readers::read_match as _);

    codec.writers.match_update = write_match_update;
    codec.writers.match_new = write_match_new;
    codec.writers.match_disband = write_match_disband;
    codec.writers.lobby_join = write_lobby_join;
    codec.writers.lobby_part = write_lobby_part;
    codec.writers.match_join_success = write_match_join_success;
    codec.writers.match_join_fail = write_match_join_fail;
    codec.writers.fellow_spectator_joined = write_fellow_spectator_joined;
    codec.writers.fellow_spectator_left = write_fellow_spectator_left;

    codec.fields.read_match = Some(read_match);
    codec.fields.encode_match = Some(encode_match);
    codec.fields.read_match_join = Some(read_match_join);
    codec.fields.read_match_change_slot = Some(read_slot_id);
    codec.fields.read_match_lock = Some(read_slot_id);

    codec
}

fn match_payload(codec: &BanchoCodec, match_info: &Match) -> Result<BytesMut, ProtocolError> {
    match codec.fields.encode_match {
        Some(encode) => Ok(encode(codec, match_info)),
        None => Err(ProtocolError::UnimplementedCapability {
            capability: "encode_match",
        }),
    }
}

pub(super) fn write_match_update(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    match_info: &Match,
) -> Result<(), ProtocolError> {
    if match_info.id > 0xff {
        // The id is a single byte on this wire; larger matches are invisible
        // to these clients.
        debug!(match_id = match_info.id, "dropping match update");
        return Ok(());
    }
    let payload = match_payload(codec, match_info)?;
    codec.write_packet(stream, packet::BANCHO_MATCH_UPDATE, &payload)
}

pub(super) fn write_match_new(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    match_info: &Match,
) -> Result<(), ProtocolError> {
    if match_info.id > 0xff {
        debug!(match_id = match_info.id, "dropping new match");
        return Ok(());
    }
    let payload = match_payload(codec, match_info)?;
    codec.write_packet(stream, packet::BANCHO_MATCH_NEW, &payload)
}

fn write_match_disband(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    match_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(match_id);
    codec.write_packet(stream, packet::BANCHO_MATCH_DISBAND, &payload)
}

fn write_lobby_join(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_LOBBY_JOIN, &payload)
}

fn write_lobby_part(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_LOBBY_PART, &payload)
}

fn write_match_join_success(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    match_info: &Match,
) -> Result<(), ProtocolError> {
    let payload = match_payload(codec, match_info)?;
    codec.write_packet(stream, packet::BANCHO_MATCH_JOIN_SUCCESS, &payload)
}

fn write_match_join_fail(codec: &BanchoCodec, stream: &mut dyn Write) -> Result<(), ProtocolError> {
    codec.write_packet(stream, packet::BANCHO_MATCH_JOIN_FAIL, &[])
}

fn write_fellow_spectator_joined(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_FELLOW_SPECTATOR_JOINED, &payload)
}

fn write_fellow_spectator_left(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_FELLOW_SPECTATOR_LEFT, &payload)
}

/// Slot occupancy flattened to the three wire bool lists.
pub(super) fn slot_lists(match_info: &Match, slot_count: usize) -> (Vec<bool>, Vec<bool>, Vec<bool>) {
    let mut open = vec![false; slot_count];
    let mut used = vec![false; slot_count];
    let mut ready = vec![false; slot_count];

    for (i, slot) in match_info.slots.iter().take(slot_count).enumerate() {
        open[i] = slot.status == SlotStatus::OPEN;
        used[i] = slot.has_player();
        ready[i] = slot.status == SlotStatus::READY;
    }

    (open, used, ready)
}

/// Rebuilds slot statuses from the three wire bool lists, reading a user id
/// for every occupied slot.
pub(super) fn read_slots(
    buf: &mut &[u8],
    open: &[bool],
    used: &[bool],
    ready: &[bool],
) -> Result<Vec<MatchSlot>, ProtocolError> {
    let mut slots = Vec::with_capacity(open.len());

    for i in 0..open.len() {
        let mut slot = MatchSlot {
            status: if open[i] {
                SlotStatus::OPEN
            } else {
                SlotStatus::LOCKED
            },
            ..MatchSlot::default()
        };

        if used[i] {
            slot.status = SlotStatus::NOT_READY;
        }
        if ready[i] {
            slot.status = SlotStatus::READY;
        }

        if slot.has_player() {
            slot.user_id = buf.try_get_i32_le()?;
        }

        slots.push(slot);
    }

    Ok(slots)
}

fn encode_match(codec: &BanchoCodec, match_info: &Match) -> BytesMut {
    let slot_count = codec.match_slot_size();
    let (open, used, ready) = slot_lists(match_info, slot_count);

    let mut payload = BytesMut::new();
    payload.put_u8(match_info.id as u8);
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
        match_type,
        name,
        beatmap_text,
        beatmap_id,
        beatmap_checksum,
        slots,
        ..Match::default()
    })
}

fn read_match_join(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<MatchJoin, ProtocolError> {
    Ok(MatchJoin {
        match_id: buf.try_get_i32_le()?,
        password: String::new(),
    })
}

fn read_slot_id(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<i32, ProtocolError> {
    Ok(buf.try_get_i32_le()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PacketData;

    fn sample_match() -> Match {
        let mut match_info = Match::with_slot_count(8);
        match_info.id = 7;
        match_info.match_type = 1;
        match_info.name = "house of cards".into();
        match_info.beatmap_text = "artist - title".into();
        match_info.beatmap_id = 811;
        match_info.beatmap_checksum = "f0f0".into();
        match_info.slots[0] = MatchSlot {
            status: SlotStatus::NOT_READY,
            user_id: 100,
            ..MatchSlot::default()
        };
        match_info.slots[1] = MatchSlot {
            status: SlotStatus::READY,
            user_id: 101,
            ..MatchSlot::default()
        };
        match_info.slots[3] = MatchSlot {
            status: SlotStatus::NOT_READY,
            user_id: 103,
            ..MatchSlot::default()
        };
        match_info.slots[5].status = SlotStatus::LOCKED;
        match_info
    }

    #[test]
    fn test_match_roundtrip() {
        let codec = codec();
        let match_info = sample_match();

        let mut frame = Vec::new();
        codec
            .write_packet(
                &mut frame,
                packet::OSU_MATCH_CREATE,
                &encode_match(&codec, &match_info),
            )
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        match packet.data {
            Some(PacketData::Match(decoded)) => {
                assert_eq!(decoded.id, 7);
                assert_eq!(decoded.name, "house of cards");
                assert_eq!(decoded.beatmap_id, 811);
                assert_eq!(decoded.slots.len(), 8);
                assert_eq!(decoded.slots[0].status, SlotStatus::NOT_READY);
                assert_eq!(decoded.slots[0].user_id, 100);
                assert_eq!(decoded.slots[1].status, SlotStatus::READY);
                assert_eq!(decoded.slots[1].user_id, 101);
                assert_eq!(decoded.slots[2].status, SlotStatus::OPEN);
                assert_eq!(decoded.slots[3].user_id, 103);
                assert_eq!(decoded.slots[5].status, SlotStatus::LOCKED);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_match_id_is_dropped() {
        let codec = codec();
        let mut match_info = sample_match();
        match_info.id = 256;

        let mut out = Vec::new();
        codec.write_match_update(&mut out, &match_info).unwrap();
        assert!(out.is_empty());

        let mut out = Vec::new();
        codec.write_match_new(&mut out, &match_info).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_join_success_has_no_id_guard() {
        // Only update and new carry the guard; join success is always sent.
        let codec = codec();
        let mut match_info = sample_match();
        match_info.id = 300;

        let mut out = Vec::new();
        codec.write_match_join_success(&mut out, &match_info).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_match_join_decode() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_i32_le(42);

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_MATCH_JOIN, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(
            packet.data,
            Some(PacketData::MatchJoin(MatchJoin {
                match_id: 42,
                password: String::new(),
            }))
        );
    }

    #[test]
    fn test_change_slot_decode() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_i32_le(3);

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_MATCH_CHANGE_SLOT, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.data, Some(PacketData::Int(3)));
    }

    #[test]
    fn test_lobby_join_has_empty_payload_reader() {
        let codec = codec();
        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_LOBBY_JOIN, &[])
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.id, packet::OSU_LOBBY_JOIN);
        assert!(packet.data.is_none());
    }
}
