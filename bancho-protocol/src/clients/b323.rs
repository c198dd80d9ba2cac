//! b323: reworked user stats layout and the match-change-beatmap packet.

use super::b320;
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::packet;
use crate::readers;
use crate::translate::IdTranslation;
use crate::types::UserInfo;
use bancho_wire::WireWrite;
use bytes::{BufMut, BytesMut};
use std::io::Write;

pub fn codec() -> BanchoCodec {
    let mut codec = b320::codec();
    codec.supported.push(packet::OSU_MATCH_CHANGE_BEATMAP);
    codec
        .readers
        .insert(packet::OSU_MATCH_CHANGE_BEATMAP, readers::read_match as _);
    codec.translation = IdTranslation::from_rules(logical_to_raw, raw_to_logical);
    codec.writers.user_stats = write_user_stats;
    codec.writers.user_presence = write_user_presence;
    codec
}

// Raw 50 now belongs to the beatmap-change packet, and the ids above it no
// longer shift.
fn raw_to_logical(id: u16) -> u16 {
    match id {
        11 => packet::BANCHO_HANDLE_IRC_JOIN,
        50 => packet::OSU_MATCH_CHANGE_BEATMAP,
        id if id > 11 && id <= 45 => id - 1,
        id => id,
    }
}

fn logical_to_raw(id: u16) -> u16 {
    match id {
        packet::BANCHO_HANDLE_IRC_JOIN => 11,
        packet::OSU_MATCH_CHANGE_BEATMAP => 50,
        id if (11..45).contains(&id) => id + 1,
        id => id,
    }
}

fn write_user_stats(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    info: &UserInfo,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();

    if info.presence.is_irc {
        payload.put_string(&info.name);
        return codec.write_packet(stream, packet::BANCHO_HANDLE_IRC_JOIN, &payload);
    }

    let write_stats = info.status.update_stats;

    payload.put_u32_le(info.id as u32);
    payload.put_bool(write_stats);

    if write_stats {
        payload.put_string(&info.name);
        payload.put_u64_le(info.stats.ranked_score);
        payload.put_f32_le(info.stats.accuracy as f32);
        payload.put_u32_le(info.stats.playcount as u32);
        payload.put_u64_le(info.stats.total_score);
        payload.put_i32_le(info.stats.rank);
        payload.put_string(&info.avatar_filename());
        payload.put_u8(info.presence.timezone.wrapping_add(24) as u8);
        payload.put_string(&info.presence.location());
    }

    (codec.fields.put_status)(codec, &mut payload, &info.status);
    codec.write_packet(stream, packet::BANCHO_HANDLE_OSU_UPDATE, &payload)
}

fn write_user_presence(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    info: &UserInfo,
) -> Result<(), ProtocolError> {
    if info.presence.is_irc {
        let mut payload = BytesMut::new();
        payload.put_string(&info.name);
        return codec.write_packet(stream, packet::BANCHO_HANDLE_IRC_JOIN, &payload);
    }

    // The client has no separate presence packet; send the stats block
    // twice, once with and once without the refresh flag.
    let mut with_stats = info.clone();
    with_stats.status.update_stats = true;
    (codec.writers.user_stats)(codec, stream, &with_stats)?;

    let mut without_stats = info.clone();
    without_stats.status.update_stats = false;
    (codec.writers.user_stats)(codec, stream, &without_stats)
}
