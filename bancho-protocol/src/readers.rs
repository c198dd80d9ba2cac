//! Inbound decoder dispatch.
//!
//! NOTE: Packet readers are registered once, by the build that introduces
//! the packet. Each entry routes through the codec's field-codec table, so
//! a newer build that swaps in a different field layout does not have to
//! re-register anything; the entry picks up the override at decode time.
//! A build that lacks the required capability reports
//! `UnimplementedCapability` instead.

use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::types::PacketData;
use bancho_wire::WireRead;

fn require<T: Copy>(slot: Option<T>, capability: &'static str) -> Result<T, ProtocolError> {
    slot.ok_or(ProtocolError::UnimplementedCapability { capability })
}

pub(crate) fn read_status(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    (codec.fields.read_status)(codec, buf).map(|status| Some(PacketData::Status(status)))
}

pub(crate) fn read_message(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    (codec.fields.read_message)(codec, buf).map(|message| Some(PacketData::Message(message)))
}

pub(crate) fn read_private_message(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_private_message, "read_private_message")?;
    reader(codec, buf).map(|message| Some(PacketData::Message(message)))
}

pub(crate) fn read_frame_bundle(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    (codec.fields.read_frame_bundle)(codec, buf).map(|bundle| Some(PacketData::FrameBundle(bundle)))
}

pub(crate) fn read_score_frame(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_score_frame, "read_score_frame")?;
    reader(codec, buf).map(|frame| Some(PacketData::ScoreFrame(frame)))
}

pub(crate) fn read_match(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_match, "read_match")?;
    reader(codec, buf).map(|match_info| Some(PacketData::Match(match_info)))
}

pub(crate) fn read_match_join(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_match_join, "read_match_join")?;
    reader(codec, buf).map(|join| Some(PacketData::MatchJoin(join)))
}

pub(crate) fn read_match_change_slot(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_match_change_slot, "read_match_change_slot")?;
    reader(codec, buf).map(|slot| Some(PacketData::Int(slot)))
}

pub(crate) fn read_match_lock(
    codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    let reader = require(codec.fields.read_match_lock, "read_match_lock")?;
    reader(codec, buf).map(|slot| Some(PacketData::Int(slot)))
}

/// For packets whose arrival is the whole message.
pub(crate) fn read_empty(
    _codec: &BanchoCodec,
    _buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    Ok(None)
}

pub(crate) fn read_int(
    _codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    Ok(Some(PacketData::Int(buf.try_get_i32_le()?)))
}

pub(crate) fn read_string(
    _codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<Option<PacketData>, ProtocolError> {
    Ok(Some(PacketData::Str(buf.try_get_string()?)))
}
