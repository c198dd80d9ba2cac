//! Bounds-checked reads of Bancho wire primitives.
//!
//! All scalars are little-endian. `bytes::Buf` panics on underflow, so every
//! accessor here checks `remaining()` first and returns
//! [`WireError::UnexpectedEof`] instead.

use crate::error::WireError;
use crate::{STRING_TAG_EMPTY, STRING_TAG_PRESENT};
use bytes::Buf;
use bytes_varint::{VarIntError, VarIntSupport};

macro_rules! try_get_impl {
    ($try_getter:ident, $ty:ty, $getter:ident) => {
        fn $try_getter(&mut self) -> Result<$ty, WireError> {
            if self.remaining() < std::mem::size_of::<$ty>() {
                return Err(WireError::UnexpectedEof);
            }
            Ok(self.$getter())
        }
    };
}

/// Reading side of the Bancho primitive codec.
pub trait WireRead: Buf + VarIntSupport {
    try_get_impl!(try_get_u8, u8, get_u8);
    try_get_impl!(try_get_i8, i8, get_i8);
    try_get_impl!(try_get_u16_le, u16, get_u16_le);
    try_get_impl!(try_get_i16_le, i16, get_i16_le);
    try_get_impl!(try_get_u32_le, u32, get_u32_le);
    try_get_impl!(try_get_i32_le, i32, get_i32_le);
    try_get_impl!(try_get_u64_le, u64, get_u64_le);
    try_get_impl!(try_get_i64_le, i64, get_i64_le);
    try_get_impl!(try_get_f32_le, f32, get_f32_le);
    try_get_impl!(try_get_f64_le, f64, get_f64_le);

    fn try_get_bool(&mut self) -> Result<bool, WireError> {
        Ok(WireRead::try_get_u8(self)? != 0)
    }

    /// Reads a tagged string: `0x00` is the empty string, `0x0b` is a
    /// ULEB128 byte length followed by that many UTF-8 bytes. Any other tag
    /// is malformed.
    fn try_get_string(&mut self) -> Result<String, WireError> {
        let tag = WireRead::try_get_u8(self)?;
        match tag {
            STRING_TAG_EMPTY => Ok(String::new()),
            STRING_TAG_PRESENT => {
                let len = self.get_u64_varint().map_err(|e| match e {
                    VarIntError::BufferUnderflow => WireError::UnexpectedEof,
                    _ => WireError::InvalidVarint,
                })? as usize;
                if self.remaining() < len {
                    return Err(WireError::UnexpectedEof);
                }
                let mut raw = vec![0u8; len];
                self.copy_to_slice(&mut raw);
                String::from_utf8(raw).map_err(|_| WireError::InvalidUtf8)
            }
            tag => Err(WireError::MalformedString { tag }),
        }
    }

    /// Reads one byte and unpacks `size` booleans, LSB-first. Bits past the
    /// seventh read as `false`.
    fn try_get_bool_list(&mut self, size: usize) -> Result<Vec<bool>, WireError> {
        let packed = WireRead::try_get_u8(self)?;
        Ok((0..size)
            .map(|i| i < 8 && (packed >> i) & 1 == 1)
            .collect())
    }

    /// Reads a u16 element count followed by that many `i32` values.
    fn try_get_int_list16(&mut self) -> Result<Vec<i32>, WireError> {
        let len = WireRead::try_get_u16_le(self)? as usize;
        let mut values = Vec::with_capacity(len.min(self.remaining() / 4 + 1));
        for _ in 0..len {
            values.push(WireRead::try_get_i32_le(self)?);
        }
        Ok(values)
    }

    /// Reads a u32 element count followed by that many `i32` values.
    fn try_get_int_list32(&mut self) -> Result<Vec<i32>, WireError> {
        let len = WireRead::try_get_u32_le(self)? as usize;
        let mut values = Vec::with_capacity(len.min(self.remaining() / 4 + 1));
        for _ in 0..len {
            values.push(WireRead::try_get_i32_le(self)?);
        }
        Ok(values)
    }
}

impl<T: Buf> WireRead for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_are_little_endian() {
        let mut buf: &[u8] = &[0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(WireRead::try_get_u16_le(&mut buf).unwrap(), 0x1234);
        assert_eq!(WireRead::try_get_u32_le(&mut buf).unwrap(), 0x12345678);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_scalar_underflow() {
        let mut buf: &[u8] = &[0x01];
        let result = WireRead::try_get_u32_le(&mut buf);
        assert!(matches!(result, Err(WireError::UnexpectedEof)));
    }

    #[test]
    fn test_bool_reads_any_nonzero() {
        let mut buf: &[u8] = &[0x00, 0x01, 0x7f];
        assert!(!buf.try_get_bool().unwrap());
        assert!(buf.try_get_bool().unwrap());
        assert!(buf.try_get_bool().unwrap());
    }

    #[test]
    fn test_empty_string() {
        let mut buf: &[u8] = &[0x00];
        assert_eq!(buf.try_get_string().unwrap(), "");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_string_with_length_prefix() {
        let mut buf: &[u8] = &[0x0b, 0x02, b'h', b'i'];
        assert_eq!(buf.try_get_string().unwrap(), "hi");
    }

    #[test]
    fn test_string_invalid_tag() {
        let mut buf: &[u8] = &[0x05, b'x'];
        let result = buf.try_get_string();
        assert!(matches!(
            result,
            Err(WireError::MalformedString { tag: 0x05 })
        ));
    }

    #[test]
    fn test_string_truncated_payload() {
        let mut buf: &[u8] = &[0x0b, 0x05, b'h', b'i'];
        let result = buf.try_get_string();
        assert!(matches!(result, Err(WireError::UnexpectedEof)));
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut buf: &[u8] = &[0x0b, 0x02, 0xff, 0xfe];
        let result = buf.try_get_string();
        assert!(matches!(result, Err(WireError::InvalidUtf8)));
    }

    #[test]
    fn test_bool_list_lsb_first() {
        let mut buf: &[u8] = &[0b0000_1011];
        let bools = buf.try_get_bool_list(8).unwrap();
        assert_eq!(
            bools,
            vec![true, true, false, true, false, false, false, false]
        );
    }

    #[test]
    fn test_bool_list_oversized_request() {
        // Slot counts above 8 still consume exactly one byte.
        let mut buf: &[u8] = &[0xff, 0xaa];
        let bools = buf.try_get_bool_list(16).unwrap();
        assert_eq!(bools.len(), 16);
        assert!(bools[..8].iter().all(|&b| b));
        assert!(bools[8..].iter().all(|&b| !b));
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn test_int_list16() {
        let mut buf: &[u8] = &[
            0x02, 0x00, // count
            0x01, 0x00, 0x00, 0x00, // 1
            0xff, 0xff, 0xff, 0xff, // -1
        ];
        assert_eq!(buf.try_get_int_list16().unwrap(), vec![1, -1]);
    }

    #[test]
    fn test_int_list16_truncated() {
        let mut buf: &[u8] = &[0x02, 0x00, 0x01, 0x00];
        let result = buf.try_get_int_list16();
        assert!(matches!(result, Err(WireError::UnexpectedEof)));
    }

    #[test]
    fn test_int_list32() {
        let mut buf: &[u8] = &[0x01, 0x00, 0x00, 0x00, 0x2a, 0x00, 0x00, 0x00];
        assert_eq!(buf.try_get_int_list32().unwrap(), vec![42]);
    }
}
