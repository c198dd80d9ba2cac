//! b296: score frames gain their timestamp.

use super::b294;
use crate::codec::BanchoCodec;
use crate::error::ProtocolError;
use crate::types::ScoreFrame;
use bancho_wire::{WireRead, WireWrite};
use bytes::{BufMut, BytesMut};

pub fn codec() -> BanchoCodec {
    let mut codec = b294::codec();
    codec.fields.read_score_frame = Some(read_score_frame);
    codec.fields.put_score_frame = Some(put_score_frame);
    codec
}

pub(super) fn put_score_frame(_codec: &BanchoCodec, payload: &mut BytesMut, frame: &ScoreFrame) {
    payload.put_string(&frame.checksum());
    payload.put_i32_le(frame.time);
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

pub(super) fn read_score_frame(
    _codec: &BanchoCodec,
    buf: &mut &[u8],
) -> Result<ScoreFrame, ProtocolError> {
    let _checksum = buf.try_get_string()?;

    Ok(ScoreFrame {
        time: buf.try_get_i32_le()?,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet;
    use crate::types::{PacketData, ReplayFrameBundle};

    #[test]
    fn test_score_frame_keeps_time() {
        let codec = codec();
        let frame = ScoreFrame {
            time: 61_500,
            id: 2,
            total_300: 99,
            total_score: 1_234_567,
            current_combo: 44,
            perfect: true,
            hp: 200,
            ..ScoreFrame::default()
        };

        let mut payload = BytesMut::new();
        put_score_frame(&codec, &mut payload, &frame);

        let mut cursor: &[u8] = &payload;
        let decoded = read_score_frame(&codec, &mut cursor).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_bundle_reader_picks_up_new_score_frame_layout() {
        // The bundle decoder was registered back in the base build; it must
        // dispatch into this build's score frame reader.
        let codec = codec();
        let frame = ScoreFrame {
            time: 777,
            hp: 100,
            ..ScoreFrame::default()
        };
        let bundle = ReplayFrameBundle {
            frames: vec![],
            action: 3,
            score_frame: Some(frame),
        };

        let mut out = Vec::new();
        codec.write_spectate_frames(&mut out, &bundle).unwrap();

        // Rebuild the same payload under the inbound packet id.
        let mut payload = BytesMut::new();
        super::super::b282::put_replay_frames(&mut payload, &bundle);
        put_score_frame(&codec, &mut payload, bundle.score_frame.as_ref().unwrap());

        let mut framed = Vec::new();
        codec
            .write_packet(&mut framed, packet::OSU_SPECTATE_FRAMES, &payload)
            .unwrap();

        let packet = codec.read_packet(&mut framed.as_slice()).unwrap();
        match packet.data {
            Some(PacketData::FrameBundle(decoded)) => {
                assert_eq!(decoded.score_frame.unwrap().time, 777);
            }
            other => panic!("expected frame bundle, got {other:?}"),
        }
    }
}
