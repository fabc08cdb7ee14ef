//! Peer DID Document model and its JSON mapping

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    errors::{CoreError, DIDPeerError, malformed_document},
    jwk::{CRV_X25519, jwk_object},
    service::Service,
    types::{
        PublicKeyField, VerificationMaterial, VerificationMaterialValue, VerificationMethodType,
    },
};

/// A verification method (authentication or key agreement) of a peer DID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationMethodPeer {
    pub id: String,
    pub controller: String,
    pub ver_material: VerificationMaterial,
}

impl VerificationMethodPeer {
    /// JSON form, with the key under the field matching its method type
    pub fn to_dict(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert(
            "type".to_string(),
            Value::String(self.ver_material.method_type.name().to_string()),
        );
        map.insert(
            "controller".to_string(),
            Value::String(self.controller.clone()),
        );
        map.insert(
            self.ver_material
                .method_type
                .public_key_field()
                .name()
                .to_string(),
            self.ver_material.value.to_value(),
        );
        Value::Object(map)
    }

    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::MalformedJson(format!(
                "verification method is not an object: {value}"
            )));
        };

        let id = required_str(map, "id")?;
        let controller = required_str(map, "controller")?;
        let type_name = required_str(map, "type")?;

        // JsonWebKey2020 is used on both sides, the curve decides
        let agreement = match map.get(PublicKeyField::Jwk.name()) {
            Some(jwk) => jwk_object(jwk)?.get("crv").and_then(Value::as_str) == Some(CRV_X25519),
            None => false,
        };

        let Some(method_type) = VerificationMethodType::from_name(type_name, agreement) else {
            return Err(CoreError::UnsupportedKeyType(type_name.to_string()));
        };

        let field = method_type.public_key_field();
        let Some(key) = map.get(field.name()) else {
            return Err(CoreError::MissingField(field.name().to_string()));
        };

        let value = match (field, key) {
            (PublicKeyField::Base58, Value::String(s)) => VerificationMaterialValue::Base58(s.clone()),
            (PublicKeyField::Multibase, Value::String(s)) => {
                VerificationMaterialValue::Multibase(s.clone())
            }
            (PublicKeyField::Jwk, jwk) => VerificationMaterialValue::Jwk(Value::Object(jwk_object(jwk)?)),
            (field, other) => {
                return Err(CoreError::MalformedKey(format!(
                    "{} must be a string: {other}",
                    field.name()
                )));
            }
        };

        Ok(VerificationMethodPeer {
            id: id.to_string(),
            controller: controller.to_string(),
            ver_material: VerificationMaterial::new(method_type, value),
        })
    }
}

fn required_str<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str, CoreError> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::MissingField(key.to_string()))
}

/// A resolved peer DID Document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DIDDocPeer {
    pub did: String,
    pub authentication: Vec<VerificationMethodPeer>,
    pub key_agreement: Vec<VerificationMethodPeer>,
    pub service: Option<Vec<Service>>,
}

impl DIDDocPeer {
    pub fn authentication_kids(&self) -> Vec<&str> {
        self.authentication.iter().map(|vm| vm.id.as_str()).collect()
    }

    pub fn agreement_kids(&self) -> Vec<&str> {
        self.key_agreement.iter().map(|vm| vm.id.as_str()).collect()
    }

    /// JSON form of the document
    ///
    /// `keyAgreement` is left out when empty and `service` when absent.
    pub fn to_dict(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.did.clone()));
        map.insert(
            "authentication".to_string(),
            Value::Array(self.authentication.iter().map(|vm| vm.to_dict()).collect()),
        );
        if !self.key_agreement.is_empty() {
            map.insert(
                "keyAgreement".to_string(),
                Value::Array(self.key_agreement.iter().map(|vm| vm.to_dict()).collect()),
            );
        }
        if let Some(service) = &self.service {
            map.insert(
                "service".to_string(),
                Value::Array(service.iter().map(Service::to_dict).collect()),
            );
        }
        Value::Object(map)
    }

    pub fn to_json(&self) -> String {
        self.to_dict().to_string()
    }

    /// Parses a DID Document from JSON
    pub fn from_json(json: &str) -> Result<Self, DIDPeerError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| malformed_document(CoreError::MalformedJson(e.to_string())))?;
        Self::from_value(&value).map_err(malformed_document)
    }

    fn from_value(value: &Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::MalformedJson(format!(
                "document is not an object: {value}"
            )));
        };

        let did = required_str(map, "id")?;
        if did.is_empty() {
            return Err(CoreError::MissingField("id".to_string()));
        }

        Ok(DIDDocPeer {
            did: did.to_string(),
            authentication: methods(map, "authentication")?,
            key_agreement: methods(map, "keyAgreement")?,
            service: match map.get("service") {
                None | Some(Value::Null) => None,
                Some(Value::Array(items)) => Some(
                    items
                        .iter()
                        .map(Service::from_value)
                        .collect::<Result<_, _>>()?,
                ),
                Some(other) => {
                    return Err(CoreError::MalformedJson(format!(
                        "service must be a list: {other}"
                    )));
                }
            },
        })
    }
}

fn methods(map: &Map<String, Value>, key: &str) -> Result<Vec<VerificationMethodPeer>, CoreError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(VerificationMethodPeer::from_value).collect(),
        Some(other) => Err(CoreError::MalformedJson(format!(
            "{key} must be a list: {other}"
        ))),
    }
}

impl Serialize for DIDDocPeer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

impl Serialize for VerificationMethodPeer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}
