//! Multicodec tagging of public keys
//!
//! A multicodec value is a varint codec identifier followed by the raw data.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::{EncodingError, varint};
use serde::{Deserialize, Serialize};

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const X25519_PUB: u32 = 0xec;
pub const ED25519_PUB: u32 = 0xed;

/// Public key codecs understood by did:peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codec {
    X25519Pub,
    Ed25519Pub,
}

impl Codec {
    /// Maps a raw codec value to a known codec
    pub fn from_prefix(value: u32) -> Result<Self, EncodingError> {
        match value {
            X25519_PUB => Ok(Codec::X25519Pub),
            ED25519_PUB => Ok(Codec::Ed25519Pub),
            other => Err(EncodingError::UnsupportedCodec(other)),
        }
    }

    pub fn prefix(self) -> u32 {
        match self {
            Codec::X25519Pub => X25519_PUB,
            Codec::Ed25519Pub => ED25519_PUB,
        }
    }
}

/// Prefixes `key` with the varint encoding of `codec`
pub fn encode(codec: Codec, key: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(varint::MAX_GROUPS + key.len());
    varint::write(codec.prefix(), &mut buf);
    buf.extend_from_slice(key);
    buf
}

/// Splits a multicodec value into its codec and the data following the prefix
pub fn decode(bytes: &[u8]) -> Result<(Codec, &[u8]), EncodingError> {
    let (prefix, data) = varint::read(bytes)?;
    Ok((Codec::from_prefix(prefix)?, data))
}

/// An owned, validated multicodec buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiEncodedBuf {
    codec: Codec,
    offset: usize,
    bytes: Vec<u8>,
}

impl MultiEncodedBuf {
    /// Validates that `bytes` starts with a known codec prefix
    pub fn new(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        let (codec, data) = decode(&bytes)?;
        let offset = bytes.len() - data.len();
        Ok(Self {
            codec,
            offset,
            bytes,
        })
    }

    pub fn encode(codec: Codec, data: &[u8]) -> Self {
        let bytes = encode(codec, data);
        Self {
            codec,
            offset: bytes.len() - data.len(),
            bytes,
        }
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Data without the codec prefix
    pub fn data(&self) -> &[u8] {
        &self.bytes[self.offset..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_ed25519() {
        let key = [7u8; 32];
        let encoded = encode(Codec::Ed25519Pub, &key);
        assert_eq!(&encoded[..2], &[0xed, 0x01]);

        let (codec, data) = decode(&encoded).unwrap();
        assert_eq!(codec, Codec::Ed25519Pub);
        assert_eq!(data, &key);
    }

    #[test]
    fn test_x25519_prefix() {
        let encoded = encode(Codec::X25519Pub, &[1, 2, 3]);
        assert_eq!(encoded, vec![0xec, 0x01, 1, 2, 3]);
    }

    #[test]
    fn test_unsupported_codec() {
        // secp256k1-pub
        let bytes = [0xe7, 0x01, 0x00];
        assert_eq!(decode(&bytes), Err(EncodingError::UnsupportedCodec(0xe7)));
        assert!(
            EncodingError::UnsupportedCodec(0xe7)
                .to_string()
                .starts_with("Invalid key: Prefix")
        );
    }

    #[test]
    fn test_truncated_prefix() {
        assert_eq!(decode(&[0xed]), Err(EncodingError::VarIntTruncated));
    }

    #[test]
    fn test_multi_encoded_buf() {
        let buf = MultiEncodedBuf::encode(Codec::X25519Pub, &[9; 32]);
        assert_eq!(buf.codec(), Codec::X25519Pub);
        assert_eq!(buf.data(), &[9; 32]);

        let parsed = MultiEncodedBuf::new(buf.clone().into_bytes()).unwrap();
        assert_eq!(parsed, buf);
    }
}
