//! Multibase encoding/decoding utilities
//!
//! Only base58btc (prefix `z`, Bitcoin alphabet) is used by did:peer.
//!
//! See: <https://github.com/multiformats/multibase>

use crate::EncodingError;
use crate::multicodec::{Codec, MultiEncodedBuf};

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// True if `s` is non-empty and only uses the Bitcoin base58 alphabet
pub fn is_base58(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            matches!(c, '1'..='9' | 'A'..='H' | 'J'..='N' | 'P'..='Z' | 'a'..='k' | 'm'..='z')
        })
}

/// Encode bytes as plain base58 (no multibase prefix)
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a plain base58 string (no multibase prefix)
pub fn decode_base58(s: &str) -> Result<Vec<u8>, EncodingError> {
    if !is_base58(s) {
        return Err(EncodingError::InvalidBase58(s.to_string()));
    }

    bs58::decode(s)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(format!("{s}: {e}")))
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    format!("{BASE58BTC_PREFIX}{}", encode_base58(bytes))
}

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the encoded text without its prefix and the decoded bytes.
pub fn decode_base58btc(s: &str) -> Result<(&str, Vec<u8>), EncodingError> {
    let Some(prefix) = s.chars().next() else {
        return Err(EncodingError::EmptyMultibase);
    };
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        return Err(EncodingError::InvalidMultibasePrefix(prefix));
    };

    Ok((encoded, decode_base58(encoded)?))
}

/// Encode key bytes with a multicodec prefix as a multibase (base58btc) string
pub fn encode_multikey(codec: Codec, key_bytes: &[u8]) -> String {
    encode_base58btc(MultiEncodedBuf::encode(codec, key_bytes).as_bytes())
}

/// Decode a multikey string into its codec and raw key bytes
pub fn decode_multikey(key: &str) -> Result<(Codec, Vec<u8>), EncodingError> {
    let (_, bytes) = decode_base58btc(key)?;
    let multi_encoded = MultiEncodedBuf::new(bytes)?;
    Ok((multi_encoded.codec(), multi_encoded.data().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_BASE58: &str = "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7";
    const ED25519_MULTIKEY: &str = "z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V";

    #[test]
    fn test_decode_base58btc() {
        // "z" + base58btc("hello") = "zCn8eVZg"
        let (encoded, bytes) = decode_base58btc("zCn8eVZg").unwrap();
        assert_eq!(encoded, "Cn8eVZg");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_encode_base58btc() {
        assert_eq!(encode_base58btc(b"hello"), "zCn8eVZg");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_base58btc(""), Err(EncodingError::EmptyMultibase));
        assert!(matches!(
            decode_base58(""),
            Err(EncodingError::InvalidBase58(_))
        ));
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            decode_base58btc("x8xB2pv7cw8q1Pd0DacS"),
            Err(EncodingError::InvalidMultibasePrefix('x'))
        );
    }

    #[test]
    fn test_invalid_base58() {
        // '0' is not in the Bitcoin alphabet
        assert!(matches!(
            decode_base58btc("zx8xB2pv7cw8q1Pd0DacS"),
            Err(EncodingError::InvalidBase58(_))
        ));
        assert!(!is_base58("x8xB2pv7cw8q1Pd0DacS"));
        assert!(!is_base58("abcIl"));
    }

    #[test]
    fn test_multikey_matches_base58_key() {
        let raw = decode_base58(ED25519_BASE58).unwrap();
        assert_eq!(raw.len(), 32);
        assert_eq!(encode_multikey(Codec::Ed25519Pub, &raw), ED25519_MULTIKEY);

        let (codec, decoded) = decode_multikey(ED25519_MULTIKEY).unwrap();
        assert_eq!(codec, Codec::Ed25519Pub);
        assert_eq!(decoded, raw);
    }

    #[test]
    fn test_x25519_multikey() {
        let (codec, raw) =
            decode_multikey("z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc").unwrap();
        assert_eq!(codec, Codec::X25519Pub);
        assert_eq!(
            encode_base58(&raw),
            "JhNWeSVLMYccCk7iopQW4guaSJTojqpMEELgSLhKwRr"
        );
    }

    #[test]
    fn test_unknown_codec_prefix() {
        assert_eq!(
            decode_multikey("z78kqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V"),
            Err(EncodingError::UnsupportedCodec(1))
        );
    }
}
