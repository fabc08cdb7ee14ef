//! Resolving peer DIDs into DID Documents

use tracing::{debug, warn};

use crate::{
    DIDPeer, PEER_DID_PREFIX, is_peer_did,
    config::PeerResolverConfig,
    document::{DIDDocPeer, VerificationMethodPeer},
    encnumbasis::decode_multibase_encnumbasis,
    errors::{CoreError, DIDPeerError},
    numalgo::{PeerNumAlgo, PeerPurpose},
    service::decode_services,
    validation::{validate_agreement_material_type, validate_authentication_material_type},
};

impl DIDPeer {
    pub fn new(config: PeerResolverConfig) -> Self {
        DIDPeer { config }
    }

    pub fn config(&self) -> &PeerResolverConfig {
        &self.config
    }

    /// Resolves a numalgo 0 or numalgo 2 peer DID
    pub fn resolve(&self, did: &str) -> Result<DIDDocPeer, DIDPeerError> {
        if did.len() > self.config.max_did_size_in_bytes {
            warn!(
                "peer DID is {} bytes, limit is {}",
                did.len(),
                self.config.max_did_size_in_bytes
            );
            return Err(DIDPeerError::malformed_peer_did(format!(
                "DID is larger than {} bytes",
                self.config.max_did_size_in_bytes
            )));
        }

        if !is_peer_did(did) {
            warn!("not a peer DID ({did})");
            return Err(DIDPeerError::malformed_peer_did(
                "Does not match peer DID regexp.",
            ));
        }

        // The grammar guarantees a numalgo digit after the prefix
        let mut body = did[PEER_DID_PREFIX.len()..].chars();
        let Some(numalgo) = body.next() else {
            return Err(DIDPeerError::malformed_peer_did("missing numalgo"));
        };
        let body = body.as_str();

        let doc = match PeerNumAlgo::from_char(numalgo) {
            Some(PeerNumAlgo::InceptionKey) => self.resolve_numalgo_0(did, body)?,
            Some(PeerNumAlgo::MultipleKeys) => self.resolve_numalgo_2(did, body)?,
            None => return Err(CoreError::InvalidNumalgo(numalgo).into()),
        };

        debug!(
            "resolved peer DID: numalgo ({numalgo}) authentication ({}) keyAgreement ({}) services ({})",
            doc.authentication.len(),
            doc.key_agreement.len(),
            doc.service.as_ref().map_or(0, Vec::len)
        );
        Ok(doc)
    }

    /// Resolves `did` and returns the DID Document as JSON
    pub fn resolve_json(&self, did: &str) -> Result<String, DIDPeerError> {
        Ok(self.resolve(did)?.to_json())
    }

    fn resolve_numalgo_0(&self, did: &str, body: &str) -> Result<DIDDocPeer, DIDPeerError> {
        let decoded = decode_multibase_encnumbasis(body, self.config.format)?;
        validate_authentication_material_type(&decoded.material)?;

        Ok(DIDDocPeer {
            did: did.to_string(),
            authentication: vec![VerificationMethodPeer {
                id: key_id(did, 1),
                controller: did.to_string(),
                ver_material: decoded.material,
            }],
            key_agreement: Vec::new(),
            service: None,
        })
    }

    fn resolve_numalgo_2(&self, did: &str, body: &str) -> Result<DIDDocPeer, DIDPeerError> {
        let Some(body) = body.strip_prefix('.') else {
            return Err(DIDPeerError::malformed_peer_did(
                "numalgo 2 segments must start with '.'",
            ));
        };

        let segments: Vec<&str> = body.split('.').collect();
        if segments.len() > self.config.max_did_parts {
            warn!(
                "peer DID has {} parts, limit is {}",
                segments.len(),
                self.config.max_did_parts
            );
            return Err(DIDPeerError::malformed_peer_did(format!(
                "DID has more than {} parts",
                self.config.max_did_parts
            )));
        }

        let mut authentication = Vec::new();
        let mut key_agreement = Vec::new();
        let mut services = Vec::new();
        let mut key_count = 1;

        for segment in segments {
            let mut chars = segment.chars();
            let Some(purpose) = chars.next() else {
                return Err(DIDPeerError::malformed_peer_did("empty segment"));
            };
            let value = chars.as_str();

            let Some(purpose) = PeerPurpose::from_char(purpose) else {
                return Err(CoreError::UnsupportedTransform(purpose).into());
            };

            if !purpose.is_key() {
                services.push(value);
                continue;
            }

            let decoded = decode_multibase_encnumbasis(value, self.config.format)?;
            let method = VerificationMethodPeer {
                id: key_id(did, key_count),
                controller: did.to_string(),
                ver_material: decoded.material,
            };
            key_count += 1;

            if purpose == PeerPurpose::Verification {
                validate_authentication_material_type(&method.ver_material)?;
                authentication.push(method);
            } else {
                validate_agreement_material_type(&method.ver_material)?;
                key_agreement.push(method);
            }
        }

        let service = if services.is_empty() {
            None
        } else {
            Some(decode_services(did, &services)?)
        };

        Ok(DIDDocPeer {
            did: did.to_string(),
            authentication,
            key_agreement,
            service,
        })
    }
}

fn key_id(did: &str, key_count: usize) -> String {
    [did, "#key-", &key_count.to_string()].concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::PeerResolverConfigBuilder, types::VerificationMaterialFormat};

    const NUMALGO_0: &str = "did:peer:0z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V";
    const NUMALGO_2: &str = "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V.Vz6MkgoLTnTypo3tDRwCkZXSccTPHRLhF4ZnjhueYAFpEX6vg.SeyJ0IjoiZG0iLCJzIjoiaHR0cHM6Ly9leGFtcGxlLmNvbS9lbmRwb2ludCJ9";

    #[test]
    fn numalgo_0() {
        let doc = DIDPeer::default().resolve(NUMALGO_0).unwrap();
        assert_eq!(doc.authentication_kids(), vec![format!("{NUMALGO_0}#key-1").as_str()]);
        assert!(doc.key_agreement.is_empty());
        assert!(doc.service.is_none());
    }

    #[test]
    fn numalgo_2_ids() {
        let doc = DIDPeer::default().resolve(NUMALGO_2).unwrap();
        assert_eq!(doc.agreement_kids(), vec![format!("{NUMALGO_2}#key-1").as_str()]);
        assert_eq!(
            doc.authentication_kids(),
            vec![
                format!("{NUMALGO_2}#key-2").as_str(),
                format!("{NUMALGO_2}#key-3").as_str()
            ]
        );
        let service = doc.service.unwrap();
        assert_eq!(service[0].id(), Some(format!("{NUMALGO_2}#service").as_str()));
    }

    #[test]
    fn invalid_numalgo() {
        let did = "did:peer:1z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V";
        let err = DIDPeer::default().resolve(did).unwrap_err();
        assert_eq!(err.cause(), Some(&CoreError::InvalidNumalgo('1')));
    }

    #[test]
    fn unsupported_transform() {
        let did = "did:peer:2.Xz6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V";
        let err = DIDPeer::default().resolve(did).unwrap_err();
        assert_eq!(err.cause(), Some(&CoreError::UnsupportedTransform('X')));
    }

    #[test]
    fn agreement_key_in_verification_segment() {
        let did = "did:peer:2.Vz6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc";
        let err = DIDPeer::default().resolve(did).unwrap_err();
        assert!(matches!(err.cause(), Some(CoreError::TypeMismatch(_))));
    }

    #[test]
    fn not_a_peer_did() {
        let err = DIDPeer::default().resolve("did:key:z6Mk").unwrap_err();
        assert!(matches!(err, DIDPeerError::MalformedPeerDID { source: None, .. }));
    }

    #[test]
    fn limits() {
        let peer = DIDPeer::new(
            PeerResolverConfigBuilder::default()
                .with_max_did_parts(3)
                .build(),
        );
        assert!(peer.resolve(NUMALGO_2).is_err());

        let peer = DIDPeer::new(
            PeerResolverConfigBuilder::default()
                .with_max_did_size_in_bytes(20)
                .build(),
        );
        assert!(peer.resolve(NUMALGO_0).is_err());
    }

    #[test]
    fn configured_format() {
        let peer = DIDPeer::new(
            PeerResolverConfigBuilder::default()
                .with_format(VerificationMaterialFormat::Base58)
                .build(),
        );
        let doc = peer.resolve(NUMALGO_0).unwrap();
        assert_eq!(
            doc.authentication[0].ver_material.format(),
            VerificationMaterialFormat::Base58
        );
    }
}
