//! Checks shared by the creator, resolver and document parser

use serde_json::Value;

use crate::{errors::CoreError, types::VerificationMaterial};

/// Raw length of both Ed25519 and X25519 public keys
pub const RAW_KEY_LENGTH: usize = 32;

pub fn validate_raw_key_length(key: &[u8]) -> Result<(), CoreError> {
    if key.len() != RAW_KEY_LENGTH {
        return Err(CoreError::InvalidKeyLength(key.len()));
    }
    Ok(())
}

/// Parses `json`, which must hold at least one JSON object
pub fn validate_json(json: &str) -> Result<Value, CoreError> {
    if !json.contains('{') {
        return Err(CoreError::MalformedJson(format!("no JSON object: {json}")));
    }
    serde_json::from_str(json).map_err(|e| CoreError::MalformedJson(e.to_string()))
}

pub fn validate_authentication_material_type(
    material: &VerificationMaterial,
) -> Result<(), CoreError> {
    if !material.method_type.is_authentication() {
        return Err(CoreError::TypeMismatch(format!(
            "Invalid verification key type: {}. Authentication type is expected",
            material.method_type
        )));
    }
    Ok(())
}

pub fn validate_agreement_material_type(material: &VerificationMaterial) -> Result<(), CoreError> {
    if !material.method_type.is_agreement() {
        return Err(CoreError::TypeMismatch(format!(
            "Invalid encryption key type: {}. Agreement type is expected",
            material.method_type
        )));
    }
    Ok(())
}
