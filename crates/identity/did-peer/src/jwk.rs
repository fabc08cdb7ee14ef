//! OKP JSON Web Keys (RFC 8037) for Ed25519 and X25519 public keys

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    BASE64_URL_LENIENT,
    errors::CoreError,
    types::{
        VerificationMaterial, VerificationMaterialValue, VerificationMethodType,
        VerificationMethodTypeAgreement, VerificationMethodTypeAuthentication,
    },
};

pub const CRV_ED25519: &str = "Ed25519";
pub const CRV_X25519: &str = "X25519";

/// JWK Key Types and associated Parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kty")]
pub enum Params {
    OKP(OctetParams),
}

/// Octet Key Pair public parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OctetParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
}

/// Curve a method type expects in `crv`
fn expected_curve(method_type: &VerificationMethodType) -> &'static str {
    match method_type {
        VerificationMethodType::Agreement(_) => CRV_X25519,
        VerificationMethodType::Authentication(_) => CRV_ED25519,
    }
}

/// Builds a public JWK `{kty, crv, x}` from a raw 32 byte key
///
/// Only `JsonWebKey2020` method types have a JWK form.
pub fn to_jwk(raw_key: &[u8], method_type: &VerificationMethodType) -> Result<Value, CoreError> {
    let curve = match method_type {
        VerificationMethodType::Agreement(VerificationMethodTypeAgreement::JsonWebKey2020) => {
            CRV_X25519
        }
        VerificationMethodType::Authentication(
            VerificationMethodTypeAuthentication::JsonWebKey2020,
        ) => CRV_ED25519,
        other => return Err(CoreError::UnsupportedKeyType(other.name().to_string())),
    };

    let params = Params::OKP(OctetParams {
        curve: curve.to_string(),
        x: BASE64_URL_SAFE_NO_PAD.encode(raw_key),
    });

    serde_json::to_value(&params).map_err(|e| CoreError::MalformedKey(e.to_string()))
}

/// Normalizes a JWK given as an object or as a JSON string holding one
pub fn jwk_object(value: &Value) -> Result<Map<String, Value>, CoreError> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::String(s) => match serde_json::from_str(s) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(CoreError::MalformedKey(format!("JWK is not an object: {s}"))),
            Err(e) => Err(CoreError::MalformedKey(format!("JWK is not valid JSON: {e}"))),
        },
        other => Err(CoreError::MalformedKey(format!(
            "JWK is not an object: {other}"
        ))),
    }
}

/// Extracts the raw key bytes from JWK material
pub fn from_jwk(material: &VerificationMaterial) -> Result<Vec<u8>, CoreError> {
    let VerificationMaterialValue::Jwk(value) = &material.value else {
        return Err(CoreError::MalformedKey(format!(
            "expected JWK material, got {}",
            material.format()
        )));
    };
    let jwk = jwk_object(value)?;

    let Some(curve) = jwk.get("crv") else {
        return Err(CoreError::MalformedKey(
            "Invalid JWK key - no 'crv' field".to_string(),
        ));
    };
    let Some(x) = jwk.get("x") else {
        return Err(CoreError::MalformedKey(
            "Invalid JWK key - no 'x' field".to_string(),
        ));
    };

    let expected = expected_curve(&material.method_type);
    if curve.as_str() != Some(expected) {
        return Err(CoreError::MalformedKey(format!(
            "Invalid JWK key type - {expected} is expected: {curve}"
        )));
    }

    let Some(x) = x.as_str() else {
        return Err(CoreError::MalformedKey(format!(
            "Invalid JWK key - 'x' is not a string: {x}"
        )));
    };

    BASE64_URL_LENIENT
        .decode(x)
        .map_err(|e| CoreError::MalformedKey(format!("Invalid JWK key - bad 'x' encoding: {e}")))
}
