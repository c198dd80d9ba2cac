//! b282: the initial protocol implementation. Every later build is
//! constructed on top of this codec.

use crate::codec::{BanchoCodec, FieldCodecs, ReaderMap, Writers, DEFAULT_SLOT_COUNT};
use crate::error::ProtocolError;
use crate::packet;
use crate::readers;
use crate::translate::IdTranslation;
use crate::types::{
    status, ButtonState, Message, ReplayFrame, ReplayFrameBundle, UserInfo, UserQuit, UserStatus,
    QuitState,
};
use bancho_wire::{WireRead, WireWrite};
use bytes::{BufMut, BytesMut};
use std::io::Write;
use std::sync::atomic::{AtomicI32, AtomicUsize};

pub fn codec() -> BanchoCodec {
    let mut reader_map = ReaderMap::new();
    reader_map.insert(packet::OSU_SEND_USER_STATUS, readers::read_status as _);
    reader_map.insert(packet::OSU_SEND_IRC_MESSAGE, readers::read_message as _);
    reader_map.insert(packet::OSU_START_SPECTATING, readers::read_int as _);
    reader_map.insert(packet::OSU_SPECTATE_FRAMES, readers::read_frame_bundle as _);
    reader_map.insert(packet::OSU_ERROR_REPORT, readers::read_string as _);

    let supported = vec![
        packet::OSU_SEND_USER_STATUS,
        packet::OSU_SEND_IRC_MESSAGE,
        packet::OSU_EXIT,
        packet::OSU_REQUEST_STATUS_UPDATE,
        packet::OSU_PONG,
        packet::BANCHO_LOGIN_REPLY,
        packet::BANCHO_COMMAND_ERROR,
        packet::BANCHO_SEND_MESSAGE,
        packet::BANCHO_PING,
        packet::BANCHO_HANDLE_IRC_CHANGE_USERNAME,
        packet::BANCHO_HANDLE_IRC_QUIT,
        packet::BANCHO_HANDLE_OSU_UPDATE,
        packet::BANCHO_HANDLE_OSU_QUIT,
        packet::BANCHO_SPECTATOR_JOINED,
        packet::BANCHO_SPECTATOR_LEFT,
        packet::BANCHO_SPECTATE_FRAMES,
        packet::OSU_START_SPECTATING,
        packet::OSU_STOP_SPECTATING,
        packet::OSU_SPECTATE_FRAMES,
        packet::BANCHO_VERSION_UPDATE,
        packet::OSU_ERROR_REPORT,
        packet::OSU_CANT_SPECTATE,
        packet::BANCHO_SPECTATOR_CANT_SPECTATE,
    ];

    BanchoCodec {
        protocol_version: AtomicI32::new(0),
        slot_count: AtomicUsize::new(DEFAULT_SLOT_COUNT),
        supported,
        translation: IdTranslation::from_rules(logical_to_raw, raw_to_logical),
        readers: reader_map,
        fields: FieldCodecs {
            read_status,
            put_status,
            put_stats,
            read_message,
            read_private_message: None,
            read_replay_frame,
            read_frame_bundle,
            read_score_frame: None,
            put_score_frame: None,
            read_match: None,
            encode_match: None,
            read_match_join: None,
            read_match_change_slot: None,
            read_match_lock: None,
        },
        writers: Writers {
            login_reply: write_login_reply,
            message: write_message,
            ping: write_ping,
            irc_change_username: write_irc_change_username,
            user_stats: write_user_stats,
            user_quit: write_user_quit,
            spectator_joined: write_spectator_joined,
            spectator_left: write_spectator_left,
            spectate_frames: write_spectate_frames,
            version_update: write_version_update,
            spectator_cant_spectate: write_spectator_cant_spectate,
            user_presence: write_user_presence,
            user_presence_single: write_user_presence_single,
            user_presence_bundle: write_user_presence_bundle,
            ..Writers::unimplemented()
        },
    }
}

// On this wire, raw 11 is the IrcJoin packet, and everything the stable
// numbering later re-used its slot for sits one id higher.
fn raw_to_logical(id: u16) -> u16 {
    match id {
        11 => packet::BANCHO_HANDLE_IRC_JOIN,
        id if id > 11 && id <= 45 => id - 1,
        id if id > 50 => id - 1,
        id => id,
    }
}

fn logical_to_raw(id: u16) -> u16 {
    match id {
        packet::BANCHO_HANDLE_IRC_JOIN => 11,
        id if (11..45).contains(&id) => id + 1,
        id if id > 50 => id + 1,
        id => id,
    }
}

fn write_login_reply(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    reply: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(reply);
    codec.write_packet(stream, packet::BANCHO_LOGIN_REPLY, &payload)
}

fn write_message(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    message: &Message,
) -> Result<(), ProtocolError> {
    if message.target != "#osu" {
        // Private messages and other channels do not exist yet.
        return Ok(());
    }

    let mut payload = BytesMut::new();
    payload.put_string(&message.sender);
    payload.put_string(&message.content);
    codec.write_packet(stream, packet::BANCHO_SEND_MESSAGE, &payload)
}

fn write_ping(codec: &BanchoCodec, stream: &mut dyn Write) -> Result<(), ProtocolError> {
    codec.write_packet(stream, packet::BANCHO_PING, &[])
}

fn write_irc_change_username(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    old_name: &str,
    new_name: &str,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_string(&format!("{old_name}>>>>{new_name}"));
    codec.write_packet(stream, packet::BANCHO_HANDLE_IRC_CHANGE_USERNAME, &payload)
}

pub(super) fn write_user_stats(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    info: &UserInfo,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();

    if info.presence.is_irc {
        payload.put_string(&info.name);
        return codec.write_packet(stream, packet::BANCHO_HANDLE_IRC_JOIN, &payload);
    }

    (codec.fields.put_stats)(codec, &mut payload, info);
    codec.write_packet(stream, packet::BANCHO_HANDLE_OSU_UPDATE, &payload)
}

fn write_user_quit(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    quit: &UserQuit,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();

    if quit.info.presence.is_irc && quit.state != QuitState::IrcRemaining {
        payload.put_string(&quit.info.name);
        return codec.write_packet(stream, packet::BANCHO_HANDLE_IRC_QUIT, &payload);
    }

    if quit.state == QuitState::OsuRemaining {
        return Ok(());
    }

    (codec.fields.put_stats)(codec, &mut payload, &quit.info);
    codec.write_packet(stream, packet::BANCHO_HANDLE_OSU_QUIT, &payload)
}

fn write_spectator_joined(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_SPECTATOR_JOINED, &payload)
}

fn write_spectator_left(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_SPECTATOR_LEFT, &payload)
}

pub(super) fn put_replay_frames(payload: &mut BytesMut, bundle: &ReplayFrameBundle) {
    payload.put_u16_le(bundle.frames.len() as u16);

    for frame in &bundle.frames {
        // This wire only knows two mouse buttons.
        let left = frame
            .button_state
            .intersects(ButtonState::LEFT1 | ButtonState::LEFT2);
        let right = frame
            .button_state
            .intersects(ButtonState::RIGHT1 | ButtonState::RIGHT2);

        payload.put_bool(left);
        payload.put_bool(right);
        payload.put_f32_le(frame.mouse_x);
        payload.put_f32_le(frame.mouse_y);
        payload.put_i32_le(frame.time);
    }

    payload.put_u8(bundle.action);
}

fn write_spectate_frames(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    bundle: &ReplayFrameBundle,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    put_replay_frames(&mut payload, bundle);
    codec.write_packet(stream, packet::BANCHO_SPECTATE_FRAMES, &payload)
}

fn write_version_update(codec: &BanchoCodec, stream: &mut dyn Write) -> Result<(), ProtocolError> {
    codec.write_packet(stream, packet::BANCHO_VERSION_UPDATE, &[])
}

fn write_spectator_cant_spectate(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    user_id: i32,
) -> Result<(), ProtocolError> {
    let mut payload = BytesMut::new();
    payload.put_i32_le(user_id);
    codec.write_packet(stream, packet::BANCHO_SPECTATOR_CANT_SPECTATE, &payload)
}

// Presence does not exist as its own packet yet; peers learn about users
// through stats updates.
fn write_user_presence(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    info: &UserInfo,
) -> Result<(), ProtocolError> {
    (codec.writers.user_stats)(codec, stream, info)
}

fn write_user_presence_single(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    info: &UserInfo,
) -> Result<(), ProtocolError> {
    (codec.writers.user_presence)(codec, stream, info)
}

fn write_user_presence_bundle(
    codec: &BanchoCodec,
    stream: &mut dyn Write,
    infos: &[UserInfo],
) -> Result<(), ProtocolError> {
    for info in infos {
        (codec.writers.user_presence)(codec, stream, info)?;
    }
    Ok(())
}

pub(super) fn put_status(_codec: &BanchoCodec, payload: &mut BytesMut, user_status: &UserStatus) {
    let mut action = user_status.action;

    if user_status.update_stats {
        // Asks the client to refresh the user's stats block.
        action = status::STATS_UPDATE;
    }

    payload.put_u8(action);

    if action != status::UNKNOWN {
        payload.put_string(&user_status.text);
        payload.put_string(&user_status.beatmap_checksum);
        payload.put_u16_le(user_status.mods as u16);
    }
}

fn put_stats(codec: &BanchoCodec, payload: &mut BytesMut, info: &UserInfo) {
    payload.put_i32_le(info.id);
    payload.put_string(&info.name);
    payload.put_u64_le(info.stats.ranked_score);
    payload.put_f64_le(info.stats.accuracy);
    payload.put_i32_le(info.stats.playcount);
    payload.put_u64_le(info.stats.total_score);
    payload.put_i32_le(info.stats.rank);
    payload.put_string(&info.avatar_filename());
    (codec.fields.put_status)(codec, payload, &info.status);
    payload.put_u8(info.presence.timezone.wrapping_add(24) as u8);
    payload.put_string(&info.presence.location());
}

fn read_status(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<UserStatus, ProtocolError> {
    let mut user_status = UserStatus {
        action: buf.try_get_u8()?,
        ..UserStatus::default()
    };

    if user_status.action != status::UNKNOWN {
        user_status.text = buf.try_get_string()?;
        user_status.beatmap_checksum = buf.try_get_string()?;
        user_status.mods = buf.try_get_u16_le()? as u32;
    }

    Ok(user_status)
}

fn read_message(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<Message, ProtocolError> {
    // Inbound chat carries only the text; everything goes to #osu.
    Ok(Message {
        sender: String::new(),
        sender_id: 0,
        content: buf.try_get_string()?,
        target: "#osu".to_string(),
    })
}

fn read_replay_frame(_codec: &BanchoCodec, buf: &mut &[u8]) -> Result<ReplayFrame, ProtocolError> {
    let left = buf.try_get_bool()?;
    let right = buf.try_get_bool()?;
    let mouse_x = buf.try_get_f32_le()?;
    let mouse_y = buf.try_get_f32_le()?;
    let time = buf.try_get_i32_le()?;

    let mut button_state = ButtonState::empty();
    if left {
        button_state |= ButtonState::LEFT1;
    }
    if right {
        button_state |= ButtonState::RIGHT1;
    }

    Ok(ReplayFrame {
        button_state,
        mouse_x,
        mouse_y,
        time,
    })
}

fn read_frame_bundle(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<ReplayFrameBundle, ProtocolError> {
    let count = buf.try_get_u16_le()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push((codec.fields.read_replay_frame)(codec, buf)?);
    }

    let action = buf.try_get_u8()?;

    Ok(ReplayFrameBundle {
        frames,
        action,
        score_frame: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PacketData, UserPresence};

    #[test]
    fn test_non_osu_channel_is_dropped() {
        let codec = codec();
        let message = Message {
            sender: "peppy".into(),
            content: "hi".into(),
            target: "#other".into(),
            ..Message::default()
        };

        let mut out = Vec::new();
        codec.write_message(&mut out, &message).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_osu_channel_message_is_written() {
        let codec = codec();
        let message = Message {
            sender: "peppy".into(),
            content: "hi".into(),
            target: "#osu".into(),
            ..Message::default()
        };

        let mut out = Vec::new();
        codec.write_message(&mut out, &message).unwrap();
        assert!(!out.is_empty());
        assert_eq!(
            u16::from_le_bytes([out[0], out[1]]),
            codec.logical_to_raw(packet::BANCHO_SEND_MESSAGE)
        );
    }

    #[test]
    fn test_inbound_message_decodes_to_osu_channel() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_string("hi everyone");

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_SEND_IRC_MESSAGE, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.id, packet::OSU_SEND_IRC_MESSAGE);
        assert_eq!(
            packet.data,
            Some(PacketData::Message(Message {
                sender: String::new(),
                sender_id: 0,
                content: "hi everyone".into(),
                target: "#osu".into(),
            }))
        );
    }

    #[test]
    fn test_irc_user_stats_become_irc_join() {
        let codec = codec();
        let info = UserInfo {
            id: 3,
            name: "irc-user".into(),
            presence: UserPresence {
                is_irc: true,
                ..UserPresence::default()
            },
            ..UserInfo::default()
        };

        let mut out = Vec::new();
        codec.write_user_stats(&mut out, &info).unwrap();
        // IrcJoin lives at raw id 11 on this wire.
        assert_eq!(u16::from_le_bytes([out[0], out[1]]), 11);
    }

    #[test]
    fn test_user_quit_variants() {
        let codec = codec();
        let osu_user = UserInfo {
            id: 5,
            name: "player".into(),
            ..UserInfo::default()
        };

        let mut out = Vec::new();
        codec
            .write_user_quit(
                &mut out,
                &UserQuit {
                    info: osu_user.clone(),
                    state: QuitState::Gone,
                },
            )
            .unwrap();
        assert_eq!(
            u16::from_le_bytes([out[0], out[1]]),
            codec.logical_to_raw(packet::BANCHO_HANDLE_OSU_QUIT)
        );

        // A client staying online via osu! produces nothing.
        let mut out = Vec::new();
        codec
            .write_user_quit(
                &mut out,
                &UserQuit {
                    info: osu_user,
                    state: QuitState::OsuRemaining,
                },
            )
            .unwrap();
        assert!(out.is_empty());

        let irc_user = UserInfo {
            name: "irc-user".into(),
            presence: UserPresence {
                is_irc: true,
                ..UserPresence::default()
            },
            ..UserInfo::default()
        };
        let mut out = Vec::new();
        codec
            .write_user_quit(
                &mut out,
                &UserQuit {
                    info: irc_user,
                    state: QuitState::Gone,
                },
            )
            .unwrap();
        assert_eq!(
            u16::from_le_bytes([out[0], out[1]]),
            codec.logical_to_raw(packet::BANCHO_HANDLE_IRC_QUIT)
        );
    }

    #[test]
    fn test_status_update_stats_flag_rides_the_action_byte() {
        let codec = codec();
        let user_status = UserStatus {
            action: status::IDLE,
            update_stats: true,
            ..UserStatus::default()
        };

        let mut payload = BytesMut::new();
        put_status(&codec, &mut payload, &user_status);
        assert_eq!(payload[0], status::STATS_UPDATE);
    }

    #[test]
    fn test_status_unknown_carries_no_detail() {
        let codec = codec();
        let user_status = UserStatus {
            action: status::UNKNOWN,
            text: "ignored".into(),
            ..UserStatus::default()
        };

        let mut payload = BytesMut::new();
        put_status(&codec, &mut payload, &user_status);
        assert_eq!(&payload[..], &[status::UNKNOWN]);
    }

    #[test]
    fn test_status_decode() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_u8(status::PLAYING);
        payload.put_string("a song");
        payload.put_string("0a1b2c");
        payload.put_u16_le(72);

        let mut cursor: &[u8] = &payload;
        let decoded = read_status(&codec, &mut cursor).unwrap();
        assert_eq!(
            decoded,
            UserStatus {
                action: status::PLAYING,
                text: "a song".into(),
                beatmap_checksum: "0a1b2c".into(),
                mods: 72,
                update_stats: false,
            }
        );
    }

    #[test]
    fn test_frame_bundle_roundtrip() {
        let codec = codec();
        let bundle = ReplayFrameBundle {
            frames: vec![
                ReplayFrame {
                    button_state: ButtonState::LEFT1,
                    mouse_x: 100.5,
                    mouse_y: 200.25,
                    time: 4000,
                },
                ReplayFrame {
                    button_state: ButtonState::empty(),
                    mouse_x: 0.0,
                    mouse_y: -1.0,
                    time: 4016,
                },
            ],
            action: 1,
            score_frame: None,
        };

        let mut payload = BytesMut::new();
        put_replay_frames(&mut payload, &bundle);

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_SPECTATE_FRAMES, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.data, Some(PacketData::FrameBundle(bundle)));
    }

    #[test]
    fn test_second_mouse_buttons_collapse_to_first() {
        let codec = codec();
        let bundle = ReplayFrameBundle {
            frames: vec![ReplayFrame {
                button_state: ButtonState::LEFT2 | ButtonState::RIGHT2,
                mouse_x: 1.0,
                mouse_y: 2.0,
                time: 10,
            }],
            action: 0,
            score_frame: None,
        };

        let mut payload = BytesMut::new();
        put_replay_frames(&mut payload, &bundle);

        let mut cursor: &[u8] = &payload;
        let decoded = read_frame_bundle(&codec, &mut cursor).unwrap();
        assert_eq!(
            decoded.frames[0].button_state,
            ButtonState::LEFT1 | ButtonState::RIGHT1
        );
    }

    #[test]
    fn test_error_report_decodes_as_string() {
        let codec = codec();
        let mut payload = BytesMut::new();
        payload.put_string("Object reference not set");

        let mut frame = Vec::new();
        codec
            .write_packet(&mut frame, packet::OSU_ERROR_REPORT, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut frame.as_slice()).unwrap();
        assert_eq!(
            packet.data,
            Some(PacketData::Str("Object reference not set".into()))
        );
    }
}
