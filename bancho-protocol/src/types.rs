//! Version-independent logical packet payloads.
//!
//! Decoders produce these values and encoders consume them; the structs are
//! the same for every client build, while the per-build codecs decide which
//! fields actually reach the wire and in what layout.

use bitflags::bitflags;

/// Action codes carried in [`UserStatus::action`].
pub mod status {
    pub const IDLE: u8 = 0;
    pub const AFK: u8 = 1;
    pub const PLAYING: u8 = 2;
    pub const EDITING: u8 = 3;
    pub const MODDING: u8 = 4;
    pub const MULTIPLAYER: u8 = 5;
    pub const WATCHING: u8 = 6;
    /// Sentinel: no detail fields follow on the wire.
    pub const UNKNOWN: u8 = 7;
    pub const TESTING: u8 = 8;
    pub const SUBMITTING: u8 = 9;
    pub const PAUSED: u8 = 10;
    pub const LOBBY: u8 = 11;
    pub const MULTIPLAYING: u8 = 12;
    pub const OSU_DIRECT: u8 = 13;
    /// Sentinel substituted on the wire by legacy builds when a stats
    /// refresh is being requested.
    pub const STATS_UPDATE: u8 = 14;
}

/// What a user is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStatus {
    pub action: u8,
    pub text: String,
    pub beatmap_checksum: String,
    pub mods: u32,
    /// Transient request flag: asks the peer to refresh the stats block.
    /// Not itself a wire field in every build.
    pub update_stats: bool,
}

/// Gameplay statistics for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStats {
    pub ranked_score: u64,
    pub accuracy: f64,
    pub playcount: i32,
    pub total_score: u64,
    pub rank: i32,
}

/// Non-statistical user info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPresence {
    pub is_irc: bool,
    /// UTC offset in hours; carried on the wire as `u8` biased by +24.
    pub timezone: i8,
    pub city: String,
    pub country: String,
}

impl UserPresence {
    /// Display string sent in place of structured location data.
    pub fn location(&self) -> String {
        match (self.city.is_empty(), self.country.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.country),
            (false, true) => self.city.clone(),
            (true, false) => self.country.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Everything a client may need to know about one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub stats: UserStats,
    pub presence: UserPresence,
    pub status: UserStatus,
}

impl UserInfo {
    /// Avatar filename as derived by the client from the user id.
    pub fn avatar_filename(&self) -> String {
        format!("{}_000.png", self.id)
    }
}

/// How much of a user remains online after a quit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitState {
    Gone,
    OsuRemaining,
    IrcRemaining,
}

/// A user leaving the server (or one half of it).
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuit {
    pub info: UserInfo,
    pub state: QuitState,
}

/// A chat message. Targets starting with `#` are channels, anything else is
/// a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub sender_id: i32,
    pub content: String,
    pub target: String,
}

bitflags! {
    /// Buttons held during a replay frame.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ButtonState: u8 {
        const LEFT1 = 1;
        const RIGHT1 = 2;
        const LEFT2 = 4;
        const RIGHT2 = 8;
        const SMOKE = 16;
    }
}

/// One sampled input frame during spectating.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReplayFrame {
    pub button_state: ButtonState,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub time: i32,
}

/// A batch of replay frames, with an optional score frame in builds that
/// added it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayFrameBundle {
    pub frames: Vec<ReplayFrame>,
    pub action: u8,
    pub score_frame: Option<ScoreFrame>,
}

/// Periodic gameplay state snapshot, sent while spectating and in
/// multiplayer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreFrame {
    pub time: i32,
    pub id: u8,
    pub total_300: u16,
    pub total_100: u16,
    pub total_50: u16,
    pub total_geki: u16,
    pub total_katu: u16,
    pub total_miss: u16,
    pub total_score: u32,
    pub max_combo: u16,
    pub current_combo: u16,
    pub perfect: bool,
    pub hp: u8,
    pub tag_byte: u8,
}

impl ScoreFrame {
    /// Digest transmitted as the leading wire field. Peers recompute and
    /// compare; this implementation only has to be deterministic.
    pub fn checksum(&self) -> String {
        let plain = format!(
            "{}false{}{}{}{}{}{}{}{}{}{}{}{}",
            self.time,
            self.id,
            self.total_300,
            self.total_100,
            self.total_50,
            self.total_geki,
            self.total_katu,
            self.total_miss,
            self.total_score,
            self.max_combo,
            self.current_combo,
            self.perfect,
            self.hp,
        );
        format!("{:x}", md5::compute(plain))
    }
}

bitflags! {
    /// State of one multiplayer slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SlotStatus: u8 {
        const OPEN = 1;
        const LOCKED = 2;
        const NOT_READY = 4;
        const READY = 8;
        const NO_MAP = 16;
        const PLAYING = 32;
        const COMPLETE = 64;
        const QUIT = 128;
        /// Any status implying the slot is occupied.
        const HAS_PLAYER = Self::NOT_READY.bits()
            | Self::READY.bits()
            | Self::NO_MAP.bits()
            | Self::PLAYING.bits()
            | Self::COMPLETE.bits();
    }
}

/// A fixed position inside a multiplayer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSlot {
    pub status: SlotStatus,
    pub user_id: i32,
    pub team: u8,
    pub mods: u32,
}

impl MatchSlot {
    pub fn has_player(&self) -> bool {
        self.status.intersects(SlotStatus::HAS_PLAYER)
    }
}

impl Default for MatchSlot {
    fn default() -> Self {
        Self {
            status: SlotStatus::OPEN,
            user_id: 0,
            team: 0,
            mods: 0,
        }
    }
}

/// A multiplayer match descriptor.
///
/// The model carries the union of all historical fields; each build codec
/// serializes the subset its wire defines (e.g. `in_progress` is absent
/// before b312, `password` through `seed` belong to later eras).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub id: i32,
    pub in_progress: bool,
    pub match_type: u8,
    pub name: String,
    pub password: String,
    pub beatmap_text: String,
    pub beatmap_id: i32,
    pub beatmap_checksum: String,
    pub slots: Vec<MatchSlot>,
    pub host_id: i32,
    pub mode: u8,
    pub scoring_type: u8,
    pub team_type: u8,
    pub mods: u32,
    pub freemod: bool,
    pub seed: i32,
}

impl Match {
    /// A match with `count` open slots.
    pub fn with_slot_count(count: usize) -> Self {
        Self {
            slots: vec![MatchSlot::default(); count],
            ..Self::default()
        }
    }
}

/// A request to join a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchJoin {
    pub match_id: i32,
    pub password: String,
}

/// A chat channel advertisement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub topic: String,
    pub owner: String,
    pub user_count: i16,
}

/// Beatmap metadata row inside a [`BeatmapInfoReply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeatmapInfo {
    pub index: i16,
    pub beatmap_id: i32,
    pub beatmap_set_id: i32,
    pub thread_id: i32,
    pub ranked_status: u8,
    pub osu_rank: u8,
    pub taiko_rank: u8,
    pub fruits_rank: u8,
    pub mania_rank: u8,
    pub checksum: String,
}

/// Reply to a client beatmap info request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeatmapInfoReply {
    pub beatmaps: Vec<BeatmapInfo>,
}

/// Main menu banner update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleUpdate {
    pub image_url: String,
    pub redirect_url: String,
}

/// Decoded payload of an inbound packet.
#[derive(Debug, Clone, PartialEq)]
pub enum PacketData {
    Status(UserStatus),
    Message(Message),
    Int(i32),
    Str(String),
    FrameBundle(ReplayFrameBundle),
    Match(Match),
    MatchJoin(MatchJoin),
    ScoreFrame(ScoreFrame),
}

/// One packet as surfaced to the application: the logical id plus the
/// decoded payload, when a decoder exists for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BanchoPacket {
    pub id: u16,
    pub data: Option<PacketData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_filename() {
        let info = UserInfo {
            id: 2,
            ..Default::default()
        };
        assert_eq!(info.avatar_filename(), "2_000.png");
    }

    #[test]
    fn test_location_formats() {
        let mut presence = UserPresence::default();
        assert_eq!(presence.location(), "");

        presence.city = "Tokyo".into();
        assert_eq!(presence.location(), "Tokyo");

        presence.country = "Japan".into();
        assert_eq!(presence.location(), "Tokyo, Japan");

        presence.city.clear();
        assert_eq!(presence.location(), "Japan");
    }

    #[test]
    fn test_slot_occupancy() {
        let mut slot = MatchSlot::default();
        assert!(!slot.has_player());

        slot.status = SlotStatus::LOCKED;
        assert!(!slot.has_player());

        for status in [
            SlotStatus::NOT_READY,
            SlotStatus::READY,
            SlotStatus::NO_MAP,
            SlotStatus::PLAYING,
            SlotStatus::COMPLETE,
        ] {
            slot.status = status;
            assert!(slot.has_player(), "{status:?} should imply occupancy");
        }
    }

    #[test]
    fn test_score_frame_checksum_is_deterministic() {
        let frame = ScoreFrame {
            time: 1000,
            total_300: 42,
            ..Default::default()
        };
        let checksum = frame.checksum();
        assert_eq!(checksum.len(), 32);
        assert_eq!(checksum, frame.checksum());

        let other = ScoreFrame {
            time: 1001,
            total_300: 42,
            ..Default::default()
        };
        assert_ne!(checksum, other.checksum());
    }

    #[test]
    fn test_match_with_slot_count() {
        let match_ = Match::with_slot_count(8);
        assert_eq!(match_.slots.len(), 8);
        assert!(match_.slots.iter().all(|s| s.status == SlotStatus::OPEN));
    }
}
