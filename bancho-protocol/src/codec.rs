//! The per-build packet codec.
//!
//! Frame layout (6 byte header + compressed payload):
//!
//! ```text
//! +----------+--------------+------------------------+
//! | raw id   | payload len  | gzip-compressed payload|
//! | 2 bytes  | 4 bytes      | payload len bytes      |
//! +----------+--------------+------------------------+
//! ```
//!
//! All header fields are little-endian. The raw id is the build-specific
//! wire id; [`IdTranslation`] maps it to the logical id surfaced to the
//! application.
//!
//! A [`BanchoCodec`] is a value: its behavior lives in tables of plain
//! function pointers ([`Writers`] for outbound packets, [`FieldCodecs`] for
//! the shared field layouts, and a reader registry for inbound dispatch).
//! A newer build is constructed by taking the previous build's codec and
//! replacing only the entries that changed. Every reader and writer receives
//! the assembled codec, so an entry registered by an old build picks up any
//! field codec a newer build swapped in.

use crate::error::ProtocolError;
use crate::translate::IdTranslation;
use crate::types::{
    BanchoPacket, BeatmapInfoReply, Channel, Match, MatchJoin, Message, PacketData,
    ReplayFrame, ReplayFrameBundle, ScoreFrame, TitleUpdate, UserInfo, UserQuit, UserStatus,
};
use bancho_wire::{compress, decompress, WireError};
use bytes::{BufMut, BytesMut};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

/// Size of the frame header: u16 raw id + u32 payload length.
pub const HEADER_SIZE: usize = 6;

/// Slot count of the oldest multiplayer-capable builds.
pub const DEFAULT_SLOT_COUNT: usize = 8;

/// Largest slot count any build can be overridden to.
pub const MAX_SLOT_COUNT: usize = 64;

/// Decoder for one inbound logical packet.
pub(crate) type ReaderFn = fn(&BanchoCodec, &mut &[u8]) -> Result<Option<PacketData>, ProtocolError>;

/// Registry of inbound decoders, keyed by logical packet id.
pub(crate) type ReaderMap = HashMap<u16, ReaderFn>;

// Field codecs: the layouts that differ between builds and are shared by
// several packets.
pub(crate) type ReadStatusFn = fn(&BanchoCodec, &mut &[u8]) -> Result<UserStatus, ProtocolError>;
pub(crate) type PutStatusFn = fn(&BanchoCodec, &mut BytesMut, &UserStatus);
pub(crate) type PutStatsFn = fn(&BanchoCodec, &mut BytesMut, &UserInfo);
pub(crate) type ReadMessageFn = fn(&BanchoCodec, &mut &[u8]) -> Result<Message, ProtocolError>;
pub(crate) type ReadReplayFrameFn =
    fn(&BanchoCodec, &mut &[u8]) -> Result<ReplayFrame, ProtocolError>;
pub(crate) type ReadBundleFn =
    fn(&BanchoCodec, &mut &[u8]) -> Result<ReplayFrameBundle, ProtocolError>;
pub(crate) type ReadScoreFrameFn =
    fn(&BanchoCodec, &mut &[u8]) -> Result<ScoreFrame, ProtocolError>;
pub(crate) type PutScoreFrameFn = fn(&BanchoCodec, &mut BytesMut, &ScoreFrame);
pub(crate) type ReadMatchFn = fn(&BanchoCodec, &mut &[u8]) -> Result<Match, ProtocolError>;
pub(crate) type EncodeMatchFn = fn(&BanchoCodec, &Match) -> BytesMut;
pub(crate) type ReadMatchJoinFn = fn(&BanchoCodec, &mut &[u8]) -> Result<MatchJoin, ProtocolError>;
pub(crate) type ReadSlotFn = fn(&BanchoCodec, &mut &[u8]) -> Result<i32, ProtocolError>;

/// Per-build field layout table. Entries are `None` for capabilities a
/// build predates; dispatching a reader onto a missing capability yields
/// [`ProtocolError::UnimplementedCapability`].
#[derive(Clone)]
pub(crate) struct FieldCodecs {
    pub read_status: ReadStatusFn,
    pub put_status: PutStatusFn,
    pub put_stats: PutStatsFn,
    pub read_message: ReadMessageFn,
    pub read_private_message: Option<ReadMessageFn>,
    pub read_replay_frame: ReadReplayFrameFn,
    pub read_frame_bundle: ReadBundleFn,
    pub read_score_frame: Option<ReadScoreFrameFn>,
    pub put_score_frame: Option<PutScoreFrameFn>,
    pub read_match: Option<ReadMatchFn>,
    pub encode_match: Option<EncodeMatchFn>,
    pub read_match_join: Option<ReadMatchJoinFn>,
    pub read_match_change_slot: Option<ReadSlotFn>,
    pub read_match_lock: Option<ReadSlotFn>,
}

// Outbound writer shapes.
pub(crate) type WriteEmptyFn = fn(&BanchoCodec, &mut dyn Write) -> Result<(), ProtocolError>;
pub(crate) type WriteIntFn = fn(&BanchoCodec, &mut dyn Write, i32) -> Result<(), ProtocolError>;
pub(crate) type WriteUintFn = fn(&BanchoCodec, &mut dyn Write, u32) -> Result<(), ProtocolError>;
pub(crate) type WriteTextFn = fn(&BanchoCodec, &mut dyn Write, &str) -> Result<(), ProtocolError>;
pub(crate) type WriteRenameFn =
    fn(&BanchoCodec, &mut dyn Write, &str, &str) -> Result<(), ProtocolError>;
pub(crate) type WriteMessageFn =
    fn(&BanchoCodec, &mut dyn Write, &Message) -> Result<(), ProtocolError>;
pub(crate) type WriteUserFn =
    fn(&BanchoCodec, &mut dyn Write, &UserInfo) -> Result<(), ProtocolError>;
pub(crate) type WriteUserListFn =
    fn(&BanchoCodec, &mut dyn Write, &[UserInfo]) -> Result<(), ProtocolError>;
pub(crate) type WriteQuitFn =
    fn(&BanchoCodec, &mut dyn Write, &UserQuit) -> Result<(), ProtocolError>;
pub(crate) type WriteBundleFn =
    fn(&BanchoCodec, &mut dyn Write, &ReplayFrameBundle) -> Result<(), ProtocolError>;
pub(crate) type WriteMatchFn =
    fn(&BanchoCodec, &mut dyn Write, &Match) -> Result<(), ProtocolError>;
pub(crate) type WriteScoreFrameFn =
    fn(&BanchoCodec, &mut dyn Write, &ScoreFrame) -> Result<(), ProtocolError>;
pub(crate) type WriteChannelFn =
    fn(&BanchoCodec, &mut dyn Write, &Channel) -> Result<(), ProtocolError>;
pub(crate) type WriteBeatmapReplyFn =
    fn(&BanchoCodec, &mut dyn Write, &BeatmapInfoReply) -> Result<(), ProtocolError>;
pub(crate) type WriteTitleFn =
    fn(&BanchoCodec, &mut dyn Write, &TitleUpdate) -> Result<(), ProtocolError>;
pub(crate) type WriteIdListFn =
    fn(&BanchoCodec, &mut dyn Write, &[i32]) -> Result<(), ProtocolError>;

/// One entry per outbound logical packet. Builds that predate a packet keep
/// the silent no-op default, mirroring how the live servers simply skip
/// packets a client cannot understand.
#[derive(Clone)]
pub(crate) struct Writers {
    pub login_reply: WriteIntFn,
    pub message: WriteMessageFn,
    pub ping: WriteEmptyFn,
    pub irc_change_username: WriteRenameFn,
    pub user_stats: WriteUserFn,
    pub user_quit: WriteQuitFn,
    pub spectator_joined: WriteIntFn,
    pub spectator_left: WriteIntFn,
    pub spectate_frames: WriteBundleFn,
    pub version_update: WriteEmptyFn,
    pub spectator_cant_spectate: WriteIntFn,
    pub get_attention: WriteEmptyFn,
    pub announcement: WriteTextFn,
    pub match_update: WriteMatchFn,
    pub match_new: WriteMatchFn,
    pub match_disband: WriteIntFn,
    pub lobby_join: WriteIntFn,
    pub lobby_part: WriteIntFn,
    pub match_join_success: WriteMatchFn,
    pub match_join_fail: WriteEmptyFn,
    pub fellow_spectator_joined: WriteIntFn,
    pub fellow_spectator_left: WriteIntFn,
    pub match_start: WriteMatchFn,
    pub match_score_update: WriteScoreFrameFn,
    pub match_transfer_host: WriteEmptyFn,
    pub match_all_players_loaded: WriteEmptyFn,
    pub match_player_failed: WriteUintFn,
    pub match_complete: WriteEmptyFn,
    pub match_skip: WriteEmptyFn,
    pub unauthorized: WriteEmptyFn,
    pub channel_join_success: WriteTextFn,
    pub channel_revoked: WriteTextFn,
    pub channel_available: WriteChannelFn,
    pub channel_available_autojoin: WriteChannelFn,
    pub beatmap_info_reply: WriteBeatmapReplyFn,
    pub login_permissions: WriteUintFn,
    pub friends_list: WriteIdListFn,
    pub protocol_negotiation: WriteIntFn,
    pub title_update: WriteTitleFn,
    pub monitor: WriteEmptyFn,
    pub match_player_skipped: WriteIntFn,
    pub user_presence: WriteUserFn,
    pub restart: WriteIntFn,
    pub invite: WriteMessageFn,
    pub channel_info_complete: WriteEmptyFn,
    pub match_change_password: WriteTextFn,
    pub silence_info: WriteIntFn,
    pub user_silenced: WriteUintFn,
    pub user_presence_single: WriteUserFn,
    pub user_presence_bundle: WriteUserListFn,
    pub user_dms_blocked: WriteTextFn,
    pub target_is_silenced: WriteTextFn,
    pub version_update_forced: WriteEmptyFn,
    pub switch_server: WriteIntFn,
    pub account_restricted: WriteEmptyFn,
    pub rtx: WriteTextFn,
    pub match_abort: WriteEmptyFn,
    pub switch_tournament_server: WriteTextFn,
}

mod noop {
    use super::*;

    pub(crate) fn empty(_: &BanchoCodec, _: &mut dyn Write) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn int(_: &BanchoCodec, _: &mut dyn Write, _: i32) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn uint(_: &BanchoCodec, _: &mut dyn Write, _: u32) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn text(_: &BanchoCodec, _: &mut dyn Write, _: &str) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn rename(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &str,
        _: &str,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn message(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &Message,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn user(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &UserInfo,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn user_list(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &[UserInfo],
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn quit(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &UserQuit,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn bundle(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &ReplayFrameBundle,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn match_info(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &Match,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn score_frame(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &ScoreFrame,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn channel(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &Channel,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn beatmap_reply(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &BeatmapInfoReply,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn title(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &TitleUpdate,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
    pub(crate) fn id_list(
        _: &BanchoCodec,
        _: &mut dyn Write,
        _: &[i32],
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
}

impl Writers {
    /// A writer table where every packet is silently skipped. Build
    /// constructors start here and fill in what their wire supports.
    pub(crate) fn unimplemented() -> Self {
        Self {
            login_reply: noop::int,
            message: noop::message,
            ping: noop::empty,
            irc_change_username: noop::rename,
            user_stats: noop::user,
            user_quit: noop::quit,
            spectator_joined: noop::int,
            spectator_left: noop::int,
            spectate_frames: noop::bundle,
            version_update: noop::empty,
            spectator_cant_spectate: noop::int,
            get_attention: noop::empty,
            announcement: noop::text,
            match_update: noop::match_info,
            match_new: noop::match_info,
            match_disband: noop::int,
            lobby_join: noop::int,
            lobby_part: noop::int,
            match_join_success: noop::match_info,
            match_join_fail: noop::empty,
            fellow_spectator_joined: noop::int,
            fellow_spectator_left: noop::int,
            match_start: noop::match_info,
            match_score_update: noop::score_frame,
            match_transfer_host: noop::empty,
            match_all_players_loaded: noop::empty,
            match_player_failed: noop::uint,
            match_complete: noop::empty,
            match_skip: noop::empty,
            unauthorized: noop::empty,
            channel_join_success: noop::text,
            channel_revoked: noop::text,
            channel_available: noop::channel,
            channel_available_autojoin: noop::channel,
            beatmap_info_reply: noop::beatmap_reply,
            login_permissions: noop::uint,
            friends_list: noop::id_list,
            protocol_negotiation: noop::int,
            title_update: noop::title,
            monitor: noop::empty,
            match_player_skipped: noop::int,
            user_presence: noop::user,
            restart: noop::int,
            invite: noop::message,
            channel_info_complete: noop::empty,
            match_change_password: noop::text,
            silence_info: noop::int,
            user_silenced: noop::uint,
            user_presence_single: noop::user,
            user_presence_bundle: noop::user_list,
            user_dms_blocked: noop::text,
            target_is_silenced: noop::text,
            version_update_forced: noop::empty,
            switch_server: noop::int,
            account_restricted: noop::empty,
            rtx: noop::text,
            match_abort: noop::empty,
            switch_tournament_server: noop::text,
        }
    }
}

/// Codec for a single historical client build.
///
/// Constructed once at startup and registered with the version registry.
/// Immutable afterwards, except for the two override knobs which go through
/// atomics so a registered (shared) codec can still be adjusted.
pub struct BanchoCodec {
    pub(crate) protocol_version: AtomicI32,
    pub(crate) slot_count: AtomicUsize,
    pub(crate) supported: Vec<u16>,
    pub(crate) translation: IdTranslation,
    pub(crate) readers: ReaderMap,
    pub(crate) fields: FieldCodecs,
    pub(crate) writers: Writers,
}

impl BanchoCodec {
    /// Logical packet ids this build can exchange.
    pub fn supported_packets(&self) -> &[u16] {
        &self.supported
    }

    /// Whether the build knows the given logical packet id.
    pub fn implements_packet(&self, packet_id: u16) -> bool {
        self.supported.contains(&packet_id)
    }

    /// Protocol version number exposed to peers.
    pub fn protocol_version(&self) -> i32 {
        self.protocol_version.load(Ordering::Relaxed)
    }

    pub fn override_protocol_version(&self, version: i32) {
        self.protocol_version.store(version, Ordering::Relaxed);
    }

    /// Number of multiplayer slots read and written by this build.
    pub fn match_slot_size(&self) -> usize {
        self.slot_count.load(Ordering::Relaxed)
    }

    pub fn override_match_slot_size(&self, amount: usize) -> Result<(), ProtocolError> {
        if !(1..=MAX_SLOT_COUNT).contains(&amount) {
            return Err(ProtocolError::ValueOutOfRange {
                field: "match slot size",
                value: amount as i64,
            });
        }
        self.slot_count.store(amount, Ordering::Relaxed);
        Ok(())
    }

    /// Maps a logical packet id to this build's wire id.
    pub fn logical_to_raw(&self, packet_id: u16) -> u16 {
        self.translation.logical_to_raw(packet_id)
    }

    /// Maps one of this build's wire ids to the logical id.
    pub fn raw_to_logical(&self, raw_id: u16) -> u16 {
        self.translation.raw_to_logical(raw_id)
    }

    /// Frames and writes one packet: translated id, compressed length,
    /// gzipped payload, flushed to the stream in a single write.
    pub fn write_packet(
        &self,
        stream: &mut dyn Write,
        packet_id: u16,
        payload: &[u8],
    ) -> Result<(), ProtocolError> {
        let raw_id = self.translation.logical_to_raw(packet_id);
        let compressed = compress(payload)?;

        let mut frame = BytesMut::with_capacity(HEADER_SIZE + compressed.len());
        frame.put_u16_le(raw_id);
        frame.put_u32_le(compressed.len() as u32);
        frame.put_slice(&compressed);

        stream.write_all(&frame)?;
        Ok(())
    }

    /// Reads one packet from the stream and decodes its payload.
    ///
    /// Packets whose translated id is outside the supported set are refused
    /// before the length header is consumed. Packets without a registered
    /// decoder surface with `data: None`; a zero-length payload is treated
    /// the same as an absent one.
    pub fn read_packet(&self, stream: &mut dyn Read) -> Result<BanchoPacket, ProtocolError> {
        let raw_id = read_u16_le(stream)?;
        let packet_id = self.translation.raw_to_logical(raw_id);

        if !self.implements_packet(packet_id) {
            return Err(ProtocolError::UnsupportedPacket { raw_id, packet_id });
        }

        let length = read_i32_le(stream)?;
        if length < 0 {
            return Err(ProtocolError::NegativeLength(length));
        }

        let mut compressed = vec![0u8; length as usize];
        stream.read_exact(&mut compressed).map_err(map_eof)?;
        let payload = decompress(&compressed)?;

        let data = match self.readers.get(&packet_id) {
            Some(reader) => {
                let mut cursor: &[u8] = &payload;
                reader(self, &mut cursor)?
            }
            None => None,
        };

        Ok(BanchoPacket {
            id: packet_id,
            data,
        })
    }

    // Outbound packet writers. Each dispatches through the writer table so a
    // build only defines the packets whose layout it owns.

    pub fn write_login_reply(&self, stream: &mut dyn Write, reply: i32) -> Result<(), ProtocolError> {
        (self.writers.login_reply)(self, stream, reply)
    }

    pub fn write_message(
        &self,
        stream: &mut dyn Write,
        message: &Message,
    ) -> Result<(), ProtocolError> {
        (self.writers.message)(self, stream, message)
    }

    pub fn write_ping(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.ping)(self, stream)
    }

    pub fn write_irc_change_username(
        &self,
        stream: &mut dyn Write,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.irc_change_username)(self, stream, old_name, new_name)
    }

    pub fn write_user_stats(
        &self,
        stream: &mut dyn Write,
        info: &UserInfo,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_stats)(self, stream, info)
    }

    pub fn write_user_quit(
        &self,
        stream: &mut dyn Write,
        quit: &UserQuit,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_quit)(self, stream, quit)
    }

    pub fn write_spectator_joined(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.spectator_joined)(self, stream, user_id)
    }

    pub fn write_spectator_left(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.spectator_left)(self, stream, user_id)
    }

    pub fn write_spectate_frames(
        &self,
        stream: &mut dyn Write,
        bundle: &ReplayFrameBundle,
    ) -> Result<(), ProtocolError> {
        (self.writers.spectate_frames)(self, stream, bundle)
    }

    pub fn write_version_update(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.version_update)(self, stream)
    }

    pub fn write_spectator_cant_spectate(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.spectator_cant_spectate)(self, stream, user_id)
    }

    pub fn write_get_attention(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.get_attention)(self, stream)
    }

    pub fn write_announcement(
        &self,
        stream: &mut dyn Write,
        message: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.announcement)(self, stream, message)
    }

    pub fn write_match_update(
        &self,
        stream: &mut dyn Write,
        match_info: &Match,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_update)(self, stream, match_info)
    }

    pub fn write_match_new(
        &self,
        stream: &mut dyn Write,
        match_info: &Match,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_new)(self, stream, match_info)
    }

    pub fn write_match_disband(
        &self,
        stream: &mut dyn Write,
        match_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_disband)(self, stream, match_id)
    }

    pub fn write_lobby_join(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.lobby_join)(self, stream, user_id)
    }

    pub fn write_lobby_part(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.lobby_part)(self, stream, user_id)
    }

    pub fn write_match_join_success(
        &self,
        stream: &mut dyn Write,
        match_info: &Match,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_join_success)(self, stream, match_info)
    }

    pub fn write_match_join_fail(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.match_join_fail)(self, stream)
    }

    pub fn write_fellow_spectator_joined(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.fellow_spectator_joined)(self, stream, user_id)
    }

    pub fn write_fellow_spectator_left(
        &self,
        stream: &mut dyn Write,
        user_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.fellow_spectator_left)(self, stream, user_id)
    }

    pub fn write_match_start(
        &self,
        stream: &mut dyn Write,
        match_info: &Match,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_start)(self, stream, match_info)
    }

    pub fn write_match_score_update(
        &self,
        stream: &mut dyn Write,
        frame: &ScoreFrame,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_score_update)(self, stream, frame)
    }

    pub fn write_match_transfer_host(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.match_transfer_host)(self, stream)
    }

    pub fn write_match_all_players_loaded(
        &self,
        stream: &mut dyn Write,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_all_players_loaded)(self, stream)
    }

    pub fn write_match_player_failed(
        &self,
        stream: &mut dyn Write,
        slot_id: u32,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_player_failed)(self, stream, slot_id)
    }

    pub fn write_match_complete(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.match_complete)(self, stream)
    }

    pub fn write_match_skip(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.match_skip)(self, stream)
    }

    pub fn write_unauthorized(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.unauthorized)(self, stream)
    }

    pub fn write_channel_join_success(
        &self,
        stream: &mut dyn Write,
        channel: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.channel_join_success)(self, stream, channel)
    }

    pub fn write_channel_revoked(
        &self,
        stream: &mut dyn Write,
        channel: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.channel_revoked)(self, stream, channel)
    }

    pub fn write_channel_available(
        &self,
        stream: &mut dyn Write,
        channel: &Channel,
    ) -> Result<(), ProtocolError> {
        (self.writers.channel_available)(self, stream, channel)
    }

    pub fn write_channel_available_autojoin(
        &self,
        stream: &mut dyn Write,
        channel: &Channel,
    ) -> Result<(), ProtocolError> {
        (self.writers.channel_available_autojoin)(self, stream, channel)
    }

    pub fn write_beatmap_info_reply(
        &self,
        stream: &mut dyn Write,
        reply: &BeatmapInfoReply,
    ) -> Result<(), ProtocolError> {
        (self.writers.beatmap_info_reply)(self, stream, reply)
    }

    pub fn write_login_permissions(
        &self,
        stream: &mut dyn Write,
        permissions: u32,
    ) -> Result<(), ProtocolError> {
        (self.writers.login_permissions)(self, stream, permissions)
    }

    pub fn write_friends_list(
        &self,
        stream: &mut dyn Write,
        user_ids: &[i32],
    ) -> Result<(), ProtocolError> {
        (self.writers.friends_list)(self, stream, user_ids)
    }

    pub fn write_protocol_negotiation(
        &self,
        stream: &mut dyn Write,
        version: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.protocol_negotiation)(self, stream, version)
    }

    pub fn write_title_update(
        &self,
        stream: &mut dyn Write,
        update: &TitleUpdate,
    ) -> Result<(), ProtocolError> {
        (self.writers.title_update)(self, stream, update)
    }

    pub fn write_monitor(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.monitor)(self, stream)
    }

    pub fn write_match_player_skipped(
        &self,
        stream: &mut dyn Write,
        slot_id: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_player_skipped)(self, stream, slot_id)
    }

    pub fn write_user_presence(
        &self,
        stream: &mut dyn Write,
        info: &UserInfo,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_presence)(self, stream, info)
    }

    pub fn write_restart(
        &self,
        stream: &mut dyn Write,
        retry_ms: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.restart)(self, stream, retry_ms)
    }

    pub fn write_invite(
        &self,
        stream: &mut dyn Write,
        message: &Message,
    ) -> Result<(), ProtocolError> {
        (self.writers.invite)(self, stream, message)
    }

    pub fn write_channel_info_complete(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.channel_info_complete)(self, stream)
    }

    pub fn write_match_change_password(
        &self,
        stream: &mut dyn Write,
        password: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.match_change_password)(self, stream, password)
    }

    pub fn write_silence_info(
        &self,
        stream: &mut dyn Write,
        time_remaining: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.silence_info)(self, stream, time_remaining)
    }

    pub fn write_user_silenced(
        &self,
        stream: &mut dyn Write,
        user_id: u32,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_silenced)(self, stream, user_id)
    }

    pub fn write_user_presence_single(
        &self,
        stream: &mut dyn Write,
        info: &UserInfo,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_presence_single)(self, stream, info)
    }

    pub fn write_user_presence_bundle(
        &self,
        stream: &mut dyn Write,
        infos: &[UserInfo],
    ) -> Result<(), ProtocolError> {
        (self.writers.user_presence_bundle)(self, stream, infos)
    }

    pub fn write_user_dms_blocked(
        &self,
        stream: &mut dyn Write,
        target_name: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.user_dms_blocked)(self, stream, target_name)
    }

    pub fn write_target_is_silenced(
        &self,
        stream: &mut dyn Write,
        target_name: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.target_is_silenced)(self, stream, target_name)
    }

    pub fn write_version_update_forced(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.version_update_forced)(self, stream)
    }

    pub fn write_switch_server(
        &self,
        stream: &mut dyn Write,
        target: i32,
    ) -> Result<(), ProtocolError> {
        (self.writers.switch_server)(self, stream, target)
    }

    pub fn write_account_restricted(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.account_restricted)(self, stream)
    }

    pub fn write_rtx(&self, stream: &mut dyn Write, message: &str) -> Result<(), ProtocolError> {
        (self.writers.rtx)(self, stream, message)
    }

    pub fn write_match_abort(&self, stream: &mut dyn Write) -> Result<(), ProtocolError> {
        (self.writers.match_abort)(self, stream)
    }

    pub fn write_switch_tournament_server(
        &self,
        stream: &mut dyn Write,
        ip: &str,
    ) -> Result<(), ProtocolError> {
        (self.writers.switch_tournament_server)(self, stream, ip)
    }
}

impl std::fmt::Debug for BanchoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BanchoCodec")
            .field("protocol_version", &self.protocol_version())
            .field("slot_count", &self.match_slot_size())
            .field("supported", &self.supported.len())
            .finish()
    }
}

fn map_eof(err: std::io::Error) -> ProtocolError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        WireError::UnexpectedEof.into()
    } else {
        err.into()
    }
}

fn read_u16_le(stream: &mut dyn Read) -> Result<u16, ProtocolError> {
    let mut raw = [0u8; 2];
    stream.read_exact(&mut raw).map_err(map_eof)?;
    Ok(u16::from_le_bytes(raw))
}

fn read_i32_le(stream: &mut dyn Read) -> Result<i32, ProtocolError> {
    let mut raw = [0u8; 4];
    stream.read_exact(&mut raw).map_err(map_eof)?;
    Ok(i32::from_le_bytes(raw))
}
