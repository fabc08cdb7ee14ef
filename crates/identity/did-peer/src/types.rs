//! Key material data model
//!
//! The lookup tables between method types, wire formats and public key fields
//! are expressed as exhaustive matches on the enums below.

use peer_did_encoding::Codec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Wire representation of key material in a DID Document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationMaterialFormat {
    Base58,
    #[default]
    Multibase,
    Jwk,
}

impl fmt::Display for VerificationMaterialFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationMaterialFormat::Base58 => write!(f, "BASE58"),
            VerificationMaterialFormat::Multibase => write!(f, "MULTIBASE"),
            VerificationMaterialFormat::Jwk => write!(f, "JWK"),
        }
    }
}

/// Key agreement (X25519) method types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethodTypeAgreement {
    JsonWebKey2020,
    X25519KeyAgreementKey2019,
    X25519KeyAgreementKey2020,
}

impl VerificationMethodTypeAgreement {
    pub fn name(&self) -> &'static str {
        match self {
            VerificationMethodTypeAgreement::JsonWebKey2020 => "JsonWebKey2020",
            VerificationMethodTypeAgreement::X25519KeyAgreementKey2019 => {
                "X25519KeyAgreementKey2019"
            }
            VerificationMethodTypeAgreement::X25519KeyAgreementKey2020 => {
                "X25519KeyAgreementKey2020"
            }
        }
    }
}

/// Authentication (Ed25519) method types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethodTypeAuthentication {
    JsonWebKey2020,
    Ed25519VerificationKey2018,
    Ed25519VerificationKey2020,
}

impl VerificationMethodTypeAuthentication {
    pub fn name(&self) -> &'static str {
        match self {
            VerificationMethodTypeAuthentication::JsonWebKey2020 => "JsonWebKey2020",
            VerificationMethodTypeAuthentication::Ed25519VerificationKey2018 => {
                "Ed25519VerificationKey2018"
            }
            VerificationMethodTypeAuthentication::Ed25519VerificationKey2020 => {
                "Ed25519VerificationKey2020"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethodType {
    Agreement(VerificationMethodTypeAgreement),
    Authentication(VerificationMethodTypeAuthentication),
}

impl VerificationMethodType {
    /// Canonical name used in the JSON `type` field
    pub fn name(&self) -> &'static str {
        match self {
            VerificationMethodType::Agreement(t) => t.name(),
            VerificationMethodType::Authentication(t) => t.name(),
        }
    }

    pub fn is_agreement(&self) -> bool {
        matches!(self, VerificationMethodType::Agreement(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, VerificationMethodType::Authentication(_))
    }

    /// Multicodec tag of the curve this type uses
    pub fn codec(&self) -> Codec {
        match self {
            VerificationMethodType::Agreement(_) => Codec::X25519Pub,
            VerificationMethodType::Authentication(_) => Codec::Ed25519Pub,
        }
    }

    /// Material format a method of this type is published in
    pub fn format(&self) -> VerificationMaterialFormat {
        use VerificationMethodTypeAgreement as Agr;
        use VerificationMethodTypeAuthentication as Auth;

        match self {
            VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2019)
            | VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2018) => {
                VerificationMaterialFormat::Base58
            }
            VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2020)
            | VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2020) => {
                VerificationMaterialFormat::Multibase
            }
            VerificationMethodType::Agreement(Agr::JsonWebKey2020)
            | VerificationMethodType::Authentication(Auth::JsonWebKey2020) => {
                VerificationMaterialFormat::Jwk
            }
        }
    }

    /// Field holding the key material in a verification method
    pub fn public_key_field(&self) -> PublicKeyField {
        match self.format() {
            VerificationMaterialFormat::Base58 => PublicKeyField::Base58,
            VerificationMaterialFormat::Multibase => PublicKeyField::Multibase,
            VerificationMaterialFormat::Jwk => PublicKeyField::Jwk,
        }
    }

    /// Method type for a key of `codec` published as `format`
    pub fn for_codec(codec: Codec, format: VerificationMaterialFormat) -> Self {
        use VerificationMethodTypeAgreement as Agr;
        use VerificationMethodTypeAuthentication as Auth;

        match (codec, format) {
            (Codec::X25519Pub, VerificationMaterialFormat::Base58) => {
                VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2019)
            }
            (Codec::X25519Pub, VerificationMaterialFormat::Multibase) => {
                VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2020)
            }
            (Codec::X25519Pub, VerificationMaterialFormat::Jwk) => {
                VerificationMethodType::Agreement(Agr::JsonWebKey2020)
            }
            (Codec::Ed25519Pub, VerificationMaterialFormat::Base58) => {
                VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2018)
            }
            (Codec::Ed25519Pub, VerificationMaterialFormat::Multibase) => {
                VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2020)
            }
            (Codec::Ed25519Pub, VerificationMaterialFormat::Jwk) => {
                VerificationMethodType::Authentication(Auth::JsonWebKey2020)
            }
        }
    }

    /// Parses a JSON `type` name
    ///
    /// `JsonWebKey2020` is shared by both variants, `agreement` picks the side.
    pub fn from_name(name: &str, agreement: bool) -> Option<Self> {
        use VerificationMethodTypeAgreement as Agr;
        use VerificationMethodTypeAuthentication as Auth;

        let method_type = match name {
            "X25519KeyAgreementKey2019" => {
                VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2019)
            }
            "X25519KeyAgreementKey2020" => {
                VerificationMethodType::Agreement(Agr::X25519KeyAgreementKey2020)
            }
            "Ed25519VerificationKey2018" => {
                VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2018)
            }
            "Ed25519VerificationKey2020" => {
                VerificationMethodType::Authentication(Auth::Ed25519VerificationKey2020)
            }
            "JsonWebKey2020" if agreement => VerificationMethodType::Agreement(Agr::JsonWebKey2020),
            "JsonWebKey2020" => VerificationMethodType::Authentication(Auth::JsonWebKey2020),
            _ => return None,
        };
        Some(method_type)
    }
}

impl fmt::Display for VerificationMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Name of the field carrying key material in a verification method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicKeyField {
    #[serde(rename = "publicKeyBase58")]
    Base58,
    #[serde(rename = "publicKeyMultibase")]
    Multibase,
    #[serde(rename = "publicKeyJwk")]
    Jwk,
}

impl PublicKeyField {
    pub fn name(&self) -> &'static str {
        match self {
            PublicKeyField::Base58 => "publicKeyBase58",
            PublicKeyField::Multibase => "publicKeyMultibase",
            PublicKeyField::Jwk => "publicKeyJwk",
        }
    }
}

/// Key material value, tagged by its format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMaterialValue {
    /// Plain base58 (no multibase prefix)
    Base58(String),
    /// base58btc multibase of the multicodec tagged key
    Multibase(String),
    /// OKP JWK, either as a JSON object or as a string holding one
    Jwk(Value),
}

impl VerificationMaterialValue {
    pub fn format(&self) -> VerificationMaterialFormat {
        match self {
            VerificationMaterialValue::Base58(_) => VerificationMaterialFormat::Base58,
            VerificationMaterialValue::Multibase(_) => VerificationMaterialFormat::Multibase,
            VerificationMaterialValue::Jwk(_) => VerificationMaterialFormat::Jwk,
        }
    }

    /// JSON form used in a verification method
    pub fn to_value(&self) -> Value {
        match self {
            VerificationMaterialValue::Base58(s) | VerificationMaterialValue::Multibase(s) => {
                Value::String(s.clone())
            }
            VerificationMaterialValue::Jwk(jwk) => jwk.clone(),
        }
    }
}

/// A public key supplied by the caller or decoded from a peer DID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationMaterial {
    #[serde(rename = "type")]
    pub method_type: VerificationMethodType,
    pub value: VerificationMaterialValue,
}

impl VerificationMaterial {
    pub fn new(method_type: VerificationMethodType, value: VerificationMaterialValue) -> Self {
        VerificationMaterial { method_type, value }
    }

    pub fn base58(method_type: VerificationMethodType, value: impl Into<String>) -> Self {
        Self::new(method_type, VerificationMaterialValue::Base58(value.into()))
    }

    pub fn multibase(method_type: VerificationMethodType, value: impl Into<String>) -> Self {
        Self::new(method_type, VerificationMaterialValue::Multibase(value.into()))
    }

    pub fn jwk(method_type: VerificationMethodType, value: Value) -> Self {
        Self::new(method_type, VerificationMaterialValue::Jwk(value))
    }

    pub fn format(&self) -> VerificationMaterialFormat {
        self.value.format()
    }
}
