//! Writes of Bancho wire primitives.
//!
//! Writing targets `bytes::BufMut`, which grows on demand, so the writing
//! side is infallible.

use crate::{STRING_TAG_EMPTY, STRING_TAG_PRESENT};
use bytes::BufMut;
use bytes_varint::VarIntSupportMut;

/// Writing side of the Bancho primitive codec.
pub trait WireWrite: BufMut + VarIntSupportMut {
    fn put_bool(&mut self, value: bool) {
        self.put_u8(value as u8);
    }

    /// Writes a tagged string: a single `0x00` byte for the empty string,
    /// otherwise `0x0b`, the ULEB128 byte length, then the raw UTF-8 bytes.
    fn put_string(&mut self, value: &str) {
        if value.is_empty() {
            self.put_u8(STRING_TAG_EMPTY);
            return;
        }
        self.put_u8(STRING_TAG_PRESENT);
        self.put_u64_varint(value.len() as u64);
        self.put_slice(value.as_bytes());
    }

    /// Packs up to eight booleans into one byte, LSB-first. Missing entries
    /// pad with zero bits so short lists still produce a full wire byte.
    fn put_bool_list(&mut self, bools: &[bool]) {
        let mut packed = 0u8;
        for (i, &bit) in bools.iter().take(8).enumerate() {
            if bit {
                packed |= 1 << i;
            }
        }
        self.put_u8(packed);
    }

    /// Writes a u16 element count followed by the `i32` values.
    fn put_int_list16(&mut self, values: &[i32]) {
        self.put_u16_le(values.len() as u16);
        for &value in values {
            self.put_i32_le(value);
        }
    }

    /// Writes a u32 element count followed by the `i32` values.
    fn put_int_list32(&mut self, values: &[i32]) {
        self.put_u32_le(values.len() as u32);
        for &value in values {
            self.put_i32_le(value);
        }
    }
}

impl<T: BufMut> WireWrite for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::WireRead;
    use bytes::BytesMut;

    #[test]
    fn test_string_roundtrip() {
        let mut buf = BytesMut::new();
        buf.put_string("fieryrage");
        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_string().unwrap(), "fieryrage");
    }

    #[test]
    fn test_empty_string_is_one_byte() {
        let mut buf = BytesMut::new();
        buf.put_string("");
        assert_eq!(&buf[..], &[0x00]);
    }

    #[test]
    fn test_string_tag_and_length() {
        let mut buf = BytesMut::new();
        buf.put_string("osu!");
        assert_eq!(&buf[..], &[0x0b, 0x04, b'o', b's', b'u', b'!']);
    }

    #[test]
    fn test_long_string_uses_multibyte_varint() {
        let text = "x".repeat(300);
        let mut buf = BytesMut::new();
        buf.put_string(&text);
        // 300 = 0xAC 0x02 in ULEB128
        assert_eq!(&buf[..3], &[0x0b, 0xac, 0x02]);

        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_string().unwrap(), text);
    }

    #[test]
    fn test_unicode_string_roundtrip() {
        let text = "ぺっぴー";
        let mut buf = BytesMut::new();
        buf.put_string(text);
        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_string().unwrap(), text);
    }

    #[test]
    fn test_bool_list_packs_lsb_first() {
        let mut buf = BytesMut::new();
        buf.put_bool_list(&[true, true, false, true, false, false, false, false]);
        assert_eq!(&buf[..], &[0b0000_1011]);
    }

    #[test]
    fn test_bool_list_pads_short_input() {
        let mut buf = BytesMut::new();
        buf.put_bool_list(&[true, false, true]);
        assert_eq!(&buf[..], &[0b0000_0101]);
    }

    #[test]
    fn test_bool_list_ignores_extra_entries() {
        let mut buf = BytesMut::new();
        buf.put_bool_list(&[true; 12]);
        assert_eq!(&buf[..], &[0xff]);
    }

    #[test]
    fn test_bool_list_roundtrip() {
        let bools = vec![false, true, true, false, true, false, false, true];
        let mut buf = BytesMut::new();
        buf.put_bool_list(&bools);
        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_bool_list(8).unwrap(), bools);
    }

    #[test]
    fn test_int_list_roundtrip() {
        let values = vec![3, -7, 1 << 30];
        let mut buf = BytesMut::new();
        buf.put_int_list16(&values);
        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_int_list16().unwrap(), values);

        let mut buf = BytesMut::new();
        buf.put_int_list32(&values);
        let mut slice: &[u8] = &buf;
        assert_eq!(slice.try_get_int_list32().unwrap(), values);
    }
}
