//! Logical packet identifiers.
//!
//! These ids are a closed, version-independent enumeration following the
//! stable protocol numbering. Historical clients renumber packets on the
//! wire; each client codec owns the translation between these logical ids
//! and its raw wire ids, so application code only ever sees the constants
//! below.
//!
//! Two packets exist only in the legacy builds and have no slot in the
//! stable numbering; they are appended after it (`BANCHO_HANDLE_IRC_JOIN`,
//! `OSU_MATCH_CHANGE_BEATMAP`).

/// A logical packet identifier.
pub type PacketId = u16;

pub const OSU_SEND_USER_STATUS: PacketId = 0;
pub const OSU_SEND_IRC_MESSAGE: PacketId = 1;
pub const OSU_EXIT: PacketId = 2;
pub const OSU_REQUEST_STATUS_UPDATE: PacketId = 3;
pub const OSU_PONG: PacketId = 4;
pub const BANCHO_LOGIN_REPLY: PacketId = 5;
pub const BANCHO_COMMAND_ERROR: PacketId = 6;
pub const BANCHO_SEND_MESSAGE: PacketId = 7;
pub const BANCHO_PING: PacketId = 8;
pub const BANCHO_HANDLE_IRC_CHANGE_USERNAME: PacketId = 9;
pub const BANCHO_HANDLE_IRC_QUIT: PacketId = 10;
pub const BANCHO_HANDLE_OSU_UPDATE: PacketId = 11;
pub const BANCHO_HANDLE_OSU_QUIT: PacketId = 12;
pub const BANCHO_SPECTATOR_JOINED: PacketId = 13;
pub const BANCHO_SPECTATOR_LEFT: PacketId = 14;
pub const BANCHO_SPECTATE_FRAMES: PacketId = 15;
pub const OSU_START_SPECTATING: PacketId = 16;
pub const OSU_STOP_SPECTATING: PacketId = 17;
pub const OSU_SPECTATE_FRAMES: PacketId = 18;
pub const BANCHO_VERSION_UPDATE: PacketId = 19;
pub const OSU_ERROR_REPORT: PacketId = 20;
pub const OSU_CANT_SPECTATE: PacketId = 21;
pub const BANCHO_SPECTATOR_CANT_SPECTATE: PacketId = 22;
pub const BANCHO_GET_ATTENTION: PacketId = 23;
pub const BANCHO_ANNOUNCE: PacketId = 24;
pub const OSU_SEND_IRC_MESSAGE_PRIVATE: PacketId = 25;
pub const BANCHO_MATCH_UPDATE: PacketId = 26;
pub const BANCHO_MATCH_NEW: PacketId = 27;
pub const BANCHO_MATCH_DISBAND: PacketId = 28;
pub const OSU_LOBBY_PART: PacketId = 29;
pub const OSU_LOBBY_JOIN: PacketId = 30;
pub const OSU_MATCH_CREATE: PacketId = 31;
pub const OSU_MATCH_JOIN: PacketId = 32;
pub const OSU_MATCH_PART: PacketId = 33;
pub const BANCHO_LOBBY_JOIN: PacketId = 34;
pub const BANCHO_LOBBY_PART: PacketId = 35;
pub const BANCHO_MATCH_JOIN_SUCCESS: PacketId = 36;
pub const BANCHO_MATCH_JOIN_FAIL: PacketId = 37;
pub const OSU_MATCH_CHANGE_SLOT: PacketId = 38;
pub const OSU_MATCH_READY: PacketId = 39;
pub const OSU_MATCH_LOCK: PacketId = 40;
pub const OSU_MATCH_CHANGE_SETTINGS: PacketId = 41;
pub const BANCHO_FELLOW_SPECTATOR_JOINED: PacketId = 42;
pub const BANCHO_FELLOW_SPECTATOR_LEFT: PacketId = 43;
pub const OSU_MATCH_START: PacketId = 44;
pub const BANCHO_MATCH_START: PacketId = 46;
pub const OSU_MATCH_SCORE_UPDATE: PacketId = 47;
pub const BANCHO_MATCH_SCORE_UPDATE: PacketId = 48;
pub const OSU_MATCH_COMPLETE: PacketId = 49;
pub const BANCHO_MATCH_TRANSFER_HOST: PacketId = 50;
pub const OSU_MATCH_CHANGE_MODS: PacketId = 51;
pub const OSU_MATCH_LOAD_COMPLETE: PacketId = 52;
pub const BANCHO_MATCH_ALL_PLAYERS_LOADED: PacketId = 53;
pub const OSU_MATCH_NO_BEATMAP: PacketId = 54;
pub const OSU_MATCH_NOT_READY: PacketId = 55;
pub const OSU_MATCH_FAILED: PacketId = 56;
pub const BANCHO_MATCH_PLAYER_FAILED: PacketId = 57;
pub const BANCHO_MATCH_COMPLETE: PacketId = 58;
pub const OSU_MATCH_HAS_BEATMAP: PacketId = 59;
pub const OSU_MATCH_SKIP_REQUEST: PacketId = 60;
pub const BANCHO_MATCH_SKIP: PacketId = 61;
pub const BANCHO_UNAUTHORIZED: PacketId = 62;
pub const OSU_CHANNEL_JOIN: PacketId = 63;
pub const BANCHO_CHANNEL_JOIN_SUCCESS: PacketId = 64;
pub const BANCHO_CHANNEL_AVAILABLE: PacketId = 65;
pub const BANCHO_CHANNEL_REVOKED: PacketId = 66;
pub const BANCHO_CHANNEL_AVAILABLE_AUTOJOIN: PacketId = 67;
pub const OSU_BEATMAP_INFO_REQUEST: PacketId = 68;
pub const BANCHO_BEATMAP_INFO_REPLY: PacketId = 69;
pub const OSU_MATCH_TRANSFER_HOST: PacketId = 70;
pub const BANCHO_LOGIN_PERMISSIONS: PacketId = 71;
pub const BANCHO_FRIENDS_LIST: PacketId = 72;
pub const OSU_FRIEND_ADD: PacketId = 73;
pub const OSU_FRIEND_REMOVE: PacketId = 74;
pub const BANCHO_PROTOCOL_NEGOTIATION: PacketId = 75;
pub const BANCHO_TITLE_UPDATE: PacketId = 76;
pub const OSU_MATCH_CHANGE_TEAM: PacketId = 77;
pub const OSU_CHANNEL_LEAVE: PacketId = 78;
pub const OSU_RECEIVE_UPDATES: PacketId = 79;
pub const BANCHO_MONITOR: PacketId = 80;
pub const BANCHO_MATCH_PLAYER_SKIPPED: PacketId = 81;
pub const OSU_SET_IRC_AWAY_MESSAGE: PacketId = 82;
pub const BANCHO_USER_PRESENCE: PacketId = 83;
pub const OSU_IRC_ONLY: PacketId = 84;
pub const OSU_USER_STATS_REQUEST: PacketId = 85;
pub const BANCHO_RESTART: PacketId = 86;
pub const OSU_MATCH_INVITE: PacketId = 87;
pub const BANCHO_INVITE: PacketId = 88;
pub const BANCHO_CHANNEL_INFO_COMPLETE: PacketId = 89;
pub const OSU_MATCH_CHANGE_PASSWORD: PacketId = 90;
pub const BANCHO_MATCH_CHANGE_PASSWORD: PacketId = 91;
pub const BANCHO_SILENCE_INFO: PacketId = 92;
pub const OSU_TOURNAMENT_MATCH_INFO_REQUEST: PacketId = 93;
pub const BANCHO_USER_SILENCED: PacketId = 94;
pub const BANCHO_USER_PRESENCE_SINGLE: PacketId = 95;
pub const BANCHO_USER_PRESENCE_BUNDLE: PacketId = 96;
pub const OSU_USER_PRESENCE_REQUEST: PacketId = 97;
pub const OSU_USER_PRESENCE_REQUEST_ALL: PacketId = 98;
pub const OSU_TOGGLE_BLOCK_NON_FRIEND_DMS: PacketId = 99;
pub const BANCHO_USER_DMS_BLOCKED: PacketId = 100;
pub const BANCHO_TARGET_IS_SILENCED: PacketId = 101;
pub const BANCHO_VERSION_UPDATE_FORCED: PacketId = 102;
pub const BANCHO_SWITCH_SERVER: PacketId = 103;
pub const BANCHO_ACCOUNT_RESTRICTED: PacketId = 104;
pub const BANCHO_RTX: PacketId = 105;
pub const BANCHO_MATCH_ABORT: PacketId = 106;
pub const BANCHO_SWITCH_TOURNAMENT_SERVER: PacketId = 107;
pub const OSU_TOURNAMENT_JOIN_MATCH_CHANNEL: PacketId = 108;
pub const OSU_TOURNAMENT_LEAVE_MATCH_CHANNEL: PacketId = 109;

// Legacy-only packets, appended after the stable numbering.
pub const BANCHO_HANDLE_IRC_JOIN: PacketId = 110;
pub const OSU_MATCH_CHANGE_BEATMAP: PacketId = 111;

/// Highest assigned logical packet id.
pub const MAX_PACKET_ID: PacketId = OSU_MATCH_CHANGE_BEATMAP;

/// Human-readable name of a logical packet id, for diagnostics.
pub fn name(id: PacketId) -> &'static str {
    match id {
        OSU_SEND_USER_STATUS => "OsuSendUserStatus",
        OSU_SEND_IRC_MESSAGE => "OsuSendIrcMessage",
        OSU_EXIT => "OsuExit",
        OSU_REQUEST_STATUS_UPDATE => "OsuRequestStatusUpdate",
        OSU_PONG => "OsuPong",
        BANCHO_LOGIN_REPLY => "BanchoLoginReply",
        BANCHO_COMMAND_ERROR => "BanchoCommandError",
        BANCHO_SEND_MESSAGE => "BanchoSendMessage",
        BANCHO_PING => "BanchoPing",
        BANCHO_HANDLE_IRC_CHANGE_USERNAME => "BanchoHandleIrcChangeUsername",
        BANCHO_HANDLE_IRC_QUIT => "BanchoHandleIrcQuit",
        BANCHO_HANDLE_OSU_UPDATE => "BanchoHandleOsuUpdate",
        BANCHO_HANDLE_OSU_QUIT => "BanchoHandleOsuQuit",
        BANCHO_SPECTATOR_JOINED => "BanchoSpectatorJoined",
        BANCHO_SPECTATOR_LEFT => "BanchoSpectatorLeft",
        BANCHO_SPECTATE_FRAMES => "BanchoSpectateFrames",
        OSU_START_SPECTATING => "OsuStartSpectating",
        OSU_STOP_SPECTATING => "OsuStopSpectating",
        OSU_SPECTATE_FRAMES => "OsuSpectateFrames",
        BANCHO_VERSION_UPDATE => "BanchoVersionUpdate",
        OSU_ERROR_REPORT => "OsuErrorReport",
        OSU_CANT_SPECTATE => "OsuCantSpectate",
        BANCHO_SPECTATOR_CANT_SPECTATE => "BanchoSpectatorCantSpectate",
        BANCHO_GET_ATTENTION => "BanchoGetAttention",
        BANCHO_ANNOUNCE => "BanchoAnnounce",
        OSU_SEND_IRC_MESSAGE_PRIVATE => "OsuSendIrcMessagePrivate",
        BANCHO_MATCH_UPDATE => "BanchoMatchUpdate",
        BANCHO_MATCH_NEW => "BanchoMatchNew",
        BANCHO_MATCH_DISBAND => "BanchoMatchDisband",
        OSU_LOBBY_PART => "OsuLobbyPart",
        OSU_LOBBY_JOIN => "OsuLobbyJoin",
        OSU_MATCH_CREATE => "OsuMatchCreate",
        OSU_MATCH_JOIN => "OsuMatchJoin",
        OSU_MATCH_PART => "OsuMatchPart",
        BANCHO_LOBBY_JOIN => "BanchoLobbyJoin",
        BANCHO_LOBBY_PART => "BanchoLobbyPart",
        BANCHO_MATCH_JOIN_SUCCESS => "BanchoMatchJoinSuccess",
        BANCHO_MATCH_JOIN_FAIL => "BanchoMatchJoinFail",
        OSU_MATCH_CHANGE_SLOT => "OsuMatchChangeSlot",
        OSU_MATCH_READY => "OsuMatchReady",
        OSU_MATCH_LOCK => "OsuMatchLock",
        OSU_MATCH_CHANGE_SETTINGS => "OsuMatchChangeSettings",
        BANCHO_FELLOW_SPECTATOR_JOINED => "BanchoFellowSpectatorJoined",
        BANCHO_FELLOW_SPECTATOR_LEFT => "BanchoFellowSpectatorLeft",
        OSU_MATCH_START => "OsuMatchStart",
        BANCHO_MATCH_START => "BanchoMatchStart",
        OSU_MATCH_SCORE_UPDATE => "OsuMatchScoreUpdate",
        BANCHO_MATCH_SCORE_UPDATE => "BanchoMatchScoreUpdate",
        OSU_MATCH_COMPLETE => "OsuMatchComplete",
        BANCHO_MATCH_TRANSFER_HOST => "BanchoMatchTransferHost",
        OSU_MATCH_CHANGE_MODS => "OsuMatchChangeMods",
        OSU_MATCH_LOAD_COMPLETE => "OsuMatchLoadComplete",
        BANCHO_MATCH_ALL_PLAYERS_LOADED => "BanchoMatchAllPlayersLoaded",
        OSU_MATCH_NO_BEATMAP => "OsuMatchNoBeatmap",
        OSU_MATCH_NOT_READY => "OsuMatchNotReady",
        OSU_MATCH_FAILED => "OsuMatchFailed",
        BANCHO_MATCH_PLAYER_FAILED => "BanchoMatchPlayerFailed",
        BANCHO_MATCH_COMPLETE => "BanchoMatchComplete",
        OSU_MATCH_HAS_BEATMAP => "OsuMatchHasBeatmap",
        OSU_MATCH_SKIP_REQUEST => "OsuMatchSkipRequest",
        BANCHO_MATCH_SKIP => "BanchoMatchSkip",
        BANCHO_UNAUTHORIZED => "BanchoUnauthorized",
        OSU_CHANNEL_JOIN => "OsuChannelJoin",
        BANCHO_CHANNEL_JOIN_SUCCESS => "BanchoChannelJoinSuccess",
        BANCHO_CHANNEL_AVAILABLE => "BanchoChannelAvailable",
        BANCHO_CHANNEL_REVOKED => "BanchoChannelRevoked",
        BANCHO_CHANNEL_AVAILABLE_AUTOJOIN => "BanchoChannelAvailableAutojoin",
        OSU_BEATMAP_INFO_REQUEST => "OsuBeatmapInfoRequest",
        BANCHO_BEATMAP_INFO_REPLY => "BanchoBeatmapInfoReply",
        OSU_MATCH_TRANSFER_HOST => "OsuMatchTransferHost",
        BANCHO_LOGIN_PERMISSIONS => "BanchoLoginPermissions",
        BANCHO_FRIENDS_LIST => "BanchoFriendsList",
        OSU_FRIEND_ADD => "OsuFriendAdd",
        OSU_FRIEND_REMOVE => "OsuFriendRemove",
        BANCHO_PROTOCOL_NEGOTIATION => "BanchoProtocolNegotiation",
        BANCHO_TITLE_UPDATE => "BanchoTitleUpdate",
        OSU_MATCH_CHANGE_TEAM => "OsuMatchChangeTeam",
        OSU_CHANNEL_LEAVE => "OsuChannelLeave",
        OSU_RECEIVE_UPDATES => "OsuReceiveUpdates",
        BANCHO_MONITOR => "BanchoMonitor",
        BANCHO_MATCH_PLAYER_SKIPPED => "BanchoMatchPlayerSkipped",
        OSU_SET_IRC_AWAY_MESSAGE => "OsuSetIrcAwayMessage",
        BANCHO_USER_PRESENCE => "BanchoUserPresence",
        OSU_IRC_ONLY => "OsuIrcOnly",
        OSU_USER_STATS_REQUEST => "OsuUserStatsRequest",
        BANCHO_RESTART => "BanchoRestart",
        OSU_MATCH_INVITE => "OsuMatchInvite",
        BANCHO_INVITE => "BanchoInvite",
        BANCHO_CHANNEL_INFO_COMPLETE => "BanchoChannelInfoComplete",
        OSU_MATCH_CHANGE_PASSWORD => "OsuMatchChangePassword",
        BANCHO_MATCH_CHANGE_PASSWORD => "BanchoMatchChangePassword",
        BANCHO_SILENCE_INFO => "BanchoSilenceInfo",
        OSU_TOURNAMENT_MATCH_INFO_REQUEST => "OsuTournamentMatchInfoRequest",
        BANCHO_USER_SILENCED => "BanchoUserSilenced",
        BANCHO_USER_PRESENCE_SINGLE => "BanchoUserPresenceSingle",
        BANCHO_USER_PRESENCE_BUNDLE => "BanchoUserPresenceBundle",
        OSU_USER_PRESENCE_REQUEST => "OsuUserPresenceRequest",
        OSU_USER_PRESENCE_REQUEST_ALL => "OsuUserPresenceRequestAll",
        OSU_TOGGLE_BLOCK_NON_FRIEND_DMS => "OsuToggleBlockNonFriendDms",
        BANCHO_USER_DMS_BLOCKED => "BanchoUserDmsBlocked",
        BANCHO_TARGET_IS_SILENCED => "BanchoTargetIsSilenced",
        BANCHO_VERSION_UPDATE_FORCED => "BanchoVersionUpdateForced",
        BANCHO_SWITCH_SERVER => "BanchoSwitchServer",
        BANCHO_ACCOUNT_RESTRICTED => "BanchoAccountRestricted",
        BANCHO_RTX => "BanchoRTX",
        BANCHO_MATCH_ABORT => "BanchoMatchAbort",
        BANCHO_SWITCH_TOURNAMENT_SERVER => "BanchoSwitchTournamentServer",
        OSU_TOURNAMENT_JOIN_MATCH_CHANNEL => "OsuTournamentJoinMatchChannel",
        OSU_TOURNAMENT_LEAVE_MATCH_CHANNEL => "OsuTournamentLeaveMatchChannel",
        BANCHO_HANDLE_IRC_JOIN => "BanchoHandleIrcJoin",
        OSU_MATCH_CHANGE_BEATMAP => "OsuMatchChangeBeatmap",
        _ => "Unknown",
    }
}
