//! Encoding primitives used by the did:peer method
//!
//! - Unsigned varints (LEB128) used as multicodec prefixes
//! - Multicodec tagging of X25519 and Ed25519 public keys
//! - Multibase base58btc encoding/decoding

pub mod multibase;
pub mod multicodec;
pub mod varint;

pub use multibase::{
    BASE58BTC_PREFIX, decode_base58, decode_base58btc, decode_multikey, encode_base58,
    encode_base58btc, encode_multikey, is_base58,
};
pub use multicodec::{Codec, ED25519_PUB, MultiEncodedBuf, X25519_PUB};

mod error;
pub use error::EncodingError;
