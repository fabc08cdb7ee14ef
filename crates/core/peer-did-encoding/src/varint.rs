//! Unsigned variable-length integers (LEB128)
//!
//! Each byte carries 7 bits of the value, least significant group first.
//! The high bit (0x80) is set on every byte except the last one.

use crate::EncodingError;

/// Maximum number of 7-bit groups accepted by [`read`]
pub const MAX_GROUPS: usize = 5;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Appends the varint encoding of `value` to `sink`
pub fn write(mut value: u32, sink: &mut Vec<u8>) {
    while value > u32::from(PAYLOAD) {
        sink.push(((value as u8) & PAYLOAD) | CONTINUATION);
        value >>= 7;
    }
    sink.push(value as u8);
}

/// Returns the varint encoding of `value`
pub fn encode(value: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_GROUPS);
    write(value, &mut buf);
    buf
}

/// Reads a varint from the front of `source`
///
/// Returns the value and the bytes following it.
pub fn read(source: &[u8]) -> Result<(u32, &[u8]), EncodingError> {
    let mut value: u64 = 0;

    for (idx, byte) in source.iter().enumerate() {
        if idx == MAX_GROUPS {
            return Err(EncodingError::VarIntOverflow(MAX_GROUPS));
        }

        value |= u64::from(byte & PAYLOAD) << (7 * idx);

        if byte & CONTINUATION == 0 {
            let value =
                u32::try_from(value).map_err(|_| EncodingError::VarIntOverflow(MAX_GROUPS))?;
            return Ok((value, &source[idx + 1..]));
        }
    }

    Err(EncodingError::VarIntTruncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_values() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7f]);
    }

    #[test]
    fn multicodec_prefixes() {
        assert_eq!(encode(0xed), vec![0xed, 0x01]);
        assert_eq!(encode(0xec), vec![0xec, 0x01]);
    }

    #[test]
    fn read_returns_remainder() {
        let bytes = [0xed, 0x01, 0xaa, 0xbb];
        let (value, rest) = read(&bytes).unwrap();
        assert_eq!(value, 0xed);
        assert_eq!(rest, &[0xaa, 0xbb]);
    }

    #[test]
    fn roundtrip_up_to_2_pow_21() {
        let mut buf = Vec::new();
        for value in 0..=(1u32 << 21) {
            buf.clear();
            write(value, &mut buf);
            let (decoded, rest) = read(&buf).unwrap();
            assert_eq!(decoded, value);
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn matches_unsigned_varint() {
        for value in [0, 1, 127, 128, 0xec, 0xed, 300, 16_384, 1_234_774, u32::MAX] {
            let mut expected = unsigned_varint::encode::u32_buffer();
            let expected = unsigned_varint::encode::u32(value, &mut expected);
            assert_eq!(encode(value), expected);

            let (decoded, _) = unsigned_varint::decode::u32(&encode(value)).unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn max_value_fits_five_groups() {
        let bytes = encode(u32::MAX);
        assert_eq!(bytes.len(), MAX_GROUPS);
        assert_eq!(read(&bytes).unwrap().0, u32::MAX);
    }

    #[test]
    fn too_many_groups() {
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert_eq!(
            read(&bytes),
            Err(EncodingError::VarIntOverflow(MAX_GROUPS))
        );
    }

    #[test]
    fn five_groups_beyond_u32() {
        let bytes = [0xff, 0xff, 0xff, 0xff, 0x7f];
        assert!(matches!(read(&bytes), Err(EncodingError::VarIntOverflow(_))));
    }

    #[test]
    fn truncated_input() {
        assert_eq!(read(&[]), Err(EncodingError::VarIntTruncated));
        assert_eq!(read(&[0xed]), Err(EncodingError::VarIntTruncated));
    }
}
