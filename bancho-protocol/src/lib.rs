//! # bancho-protocol
//!
//! Multi-version codec for the Bancho client protocol.
//!
//! Historical client builds speak subtly different dialects: packet ids are
//! renumbered, structured payloads gain and lose fields, and newer packets
//! simply do not exist in older builds. This crate presents one logical
//! packet model to the application and reads/writes exact bytes for
//! whichever build is on the far end.
//!
//! This crate provides:
//! - The version-independent packet model ([`types`], [`packet`])
//! - One [`BanchoCodec`] per historical build ([`clients`])
//! - A build-number registry with nearest-lower-bound selection ([`registry`])
//!
//! The codec is synchronous and holds no sockets or sessions; it reads and
//! writes caller-provided `std::io` streams.
//!
//! ```no_run
//! use bancho_protocol::{registry, packet};
//!
//! registry::register_builtin();
//! let codec = registry::select_codec(300).unwrap();
//!
//! let mut stream = Vec::new();
//! codec.write_ping(&mut stream).unwrap();
//!
//! let packet = codec.read_packet(&mut stream.as_slice()).unwrap();
//! assert_eq!(packet.id, packet::BANCHO_PING);
//! ```

pub mod clients;
pub mod codec;
pub mod error;
pub mod packet;
pub mod registry;
pub mod translate;
pub mod types;

mod readers;

pub use codec::BanchoCodec;
pub use error::ProtocolError;
pub use registry::{register_builtin, register_client, select_codec, ClientRegistry};
pub use types::{
    status, BanchoPacket, BeatmapInfo, BeatmapInfoReply, ButtonState, Channel, Match, MatchJoin,
    MatchSlot, Message, PacketData, QuitState, ReplayFrame, ReplayFrameBundle, ScoreFrame,
    SlotStatus, TitleUpdate, UserInfo, UserPresence, UserQuit, UserStats, UserStatus,
};
