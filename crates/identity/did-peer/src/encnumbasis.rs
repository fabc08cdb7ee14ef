//! Encoded number basis: the multibase/multicodec form of a single public key
//!
//! This is the building block of peer DID identifiers. Any supported input
//! format is normalized through the raw key bytes.

use peer_did_encoding::{
    decode_base58, decode_base58btc, encode_base58, encode_multikey, multicodec,
};

use crate::{
    errors::CoreError,
    jwk::{from_jwk, to_jwk},
    types::{
        VerificationMaterial, VerificationMaterialFormat, VerificationMaterialValue,
        VerificationMethodType,
    },
    validation::validate_raw_key_length,
};

/// A decoded key segment of a peer DID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEncnumbasis {
    /// The segment without its multibase prefix
    pub encnumbasis: String,
    pub material: VerificationMaterial,
}

/// Raw key bytes of `material`, whatever its format
fn raw_key(material: &VerificationMaterial) -> Result<Vec<u8>, CoreError> {
    match &material.value {
        VerificationMaterialValue::Base58(value) => Ok(decode_base58(value)?),
        VerificationMaterialValue::Multibase(value) => {
            let (_, bytes) = decode_base58btc(value)?;
            let (codec, key) = multicodec::decode(&bytes)?;
            if codec != material.method_type.codec() {
                return Err(CoreError::TypeMismatch(format!(
                    "multicodec {codec:?} does not match {}",
                    material.method_type
                )));
            }
            Ok(key.to_vec())
        }
        VerificationMaterialValue::Jwk(_) => from_jwk(material),
    }
}

/// Encodes `material` as a base58btc multibase of its multicodec tagged key
pub fn create_multibase_encnumbasis(material: &VerificationMaterial) -> Result<String, CoreError> {
    let key = raw_key(material)?;
    validate_raw_key_length(&key)?;
    Ok(encode_multikey(material.method_type.codec(), &key))
}

/// Decodes a key segment and re-encodes the key as `format`
///
/// The codec picks the Agreement (X25519) or Authentication (Ed25519) side,
/// `format` picks the method type within it.
pub fn decode_multibase_encnumbasis(
    multibase: &str,
    format: VerificationMaterialFormat,
) -> Result<DecodedEncnumbasis, CoreError> {
    let (encnumbasis, bytes) = decode_base58btc(multibase)?;
    let (codec, key) = multicodec::decode(&bytes)?;
    validate_raw_key_length(key)?;

    let method_type = VerificationMethodType::for_codec(codec, format);
    let value = match format {
        VerificationMaterialFormat::Base58 => VerificationMaterialValue::Base58(encode_base58(key)),
        VerificationMaterialFormat::Multibase => {
            VerificationMaterialValue::Multibase(encode_multikey(codec, key))
        }
        VerificationMaterialFormat::Jwk => VerificationMaterialValue::Jwk(to_jwk(key, &method_type)?),
    };

    Ok(DecodedEncnumbasis {
        encnumbasis: encnumbasis.to_string(),
        material: VerificationMaterial::new(method_type, value),
    })
}
