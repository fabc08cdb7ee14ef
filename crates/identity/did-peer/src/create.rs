//! Building numalgo 0 and numalgo 2 peer DIDs from caller supplied keys

use tracing::debug;

use crate::{
    DIDPeer, PEER_DID_PREFIX, PeerDID,
    encnumbasis::create_multibase_encnumbasis,
    errors::DIDPeerError,
    numalgo::{PeerNumAlgo, PeerPurpose},
    service::encode_service,
    types::VerificationMaterial,
    validation::{validate_agreement_material_type, validate_authentication_material_type},
};

impl DIDPeer {
    /// Creates `did:peer:0<encnumbasis>` from an authentication key
    pub fn create_peer_did_numalgo_0(
        inception_key: &VerificationMaterial,
    ) -> Result<PeerDID, DIDPeerError> {
        validate_authentication_material_type(inception_key)?;
        let encnumbasis = create_multibase_encnumbasis(inception_key)?;

        let did = format!(
            "{PEER_DID_PREFIX}{}{encnumbasis}",
            PeerNumAlgo::InceptionKey.to_char()
        );
        debug!("created numalgo 0 peer DID ({did})");
        Ok(did)
    }

    /// Creates a numalgo 2 peer DID
    ///
    /// Segments are emitted as all encryption keys (`.E`), then all signing
    /// keys (`.V`), each group in caller order, then the services (`.S`).
    /// `service` is a JSON object or an array of objects.
    pub fn create_peer_did_numalgo_2(
        encryption_keys: &[VerificationMaterial],
        signing_keys: &[VerificationMaterial],
        service: Option<&str>,
    ) -> Result<PeerDID, DIDPeerError> {
        let mut did = format!("{PEER_DID_PREFIX}{}", PeerNumAlgo::MultipleKeys.to_char());

        for key in encryption_keys {
            validate_agreement_material_type(key)?;
            push_segment(&mut did, PeerPurpose::Encryption, &create_multibase_encnumbasis(key)?);
        }

        for key in signing_keys {
            validate_authentication_material_type(key)?;
            push_segment(&mut did, PeerPurpose::Verification, &create_multibase_encnumbasis(key)?);
        }

        if let Some(service) = service {
            did.push_str(&encode_service(service)?);
        }

        if did.len() == PEER_DID_PREFIX.len() + 1 {
            return Err(DIDPeerError::malformed_peer_did(
                "numalgo 2 requires at least one key or service",
            ));
        }

        debug!(
            "created numalgo 2 peer DID: encryption keys ({}) signing keys ({}) service ({})",
            encryption_keys.len(),
            signing_keys.len(),
            service.is_some()
        );
        Ok(did)
    }
}

fn push_segment(did: &mut String, purpose: PeerPurpose, encnumbasis: &str) {
    did.push('.');
    did.push(purpose.to_char());
    did.push_str(encnumbasis);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::CoreError,
        types::{
            VerificationMethodType, VerificationMethodTypeAgreement,
            VerificationMethodTypeAuthentication,
        },
    };
    use peer_did_encoding::EncodingError;

    const ED_BASE58: &str = "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7";
    const X_BASE58: &str = "JhNWeSVLMYccCk7iopQW4guaSJTojqpMEELgSLhKwRr";

    fn signing(value: &str) -> VerificationMaterial {
        VerificationMaterial::base58(
            VerificationMethodType::Authentication(
                VerificationMethodTypeAuthentication::Ed25519VerificationKey2018,
            ),
            value,
        )
    }

    fn encryption(value: &str) -> VerificationMaterial {
        VerificationMaterial::base58(
            VerificationMethodType::Agreement(
                VerificationMethodTypeAgreement::X25519KeyAgreementKey2019,
            ),
            value,
        )
    }

    #[test]
    fn numalgo_0_from_base58() {
        assert_eq!(
            DIDPeer::create_peer_did_numalgo_0(&signing(ED_BASE58)).unwrap(),
            "did:peer:0z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V"
        );
    }

    #[test]
    fn numalgo_0_rejects_agreement_key() {
        let err = DIDPeer::create_peer_did_numalgo_0(&encryption(X_BASE58)).unwrap_err();
        assert!(matches!(err.cause(), Some(CoreError::TypeMismatch(_))));
    }

    #[test]
    fn numalgo_0_rejects_bad_base58() {
        let err = DIDPeer::create_peer_did_numalgo_0(&signing("x8xB2pv7cw8q1Pd0DacS")).unwrap_err();
        assert!(matches!(
            err.cause(),
            Some(CoreError::Encoding(EncodingError::InvalidBase58(_)))
        ));
        assert!(err.to_string().contains("Invalid base58 encoding"));
    }

    #[test]
    fn numalgo_2_segment_order() {
        let did = DIDPeer::create_peer_did_numalgo_2(
            &[encryption(X_BASE58)],
            &[signing(ED_BASE58)],
            None,
        )
        .unwrap();
        assert_eq!(
            did,
            "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V"
        );
    }

    #[test]
    fn numalgo_2_rejects_swapped_keys() {
        let err =
            DIDPeer::create_peer_did_numalgo_2(&[signing(ED_BASE58)], &[], None).unwrap_err();
        assert!(matches!(err.cause(), Some(CoreError::TypeMismatch(_))));

        let err =
            DIDPeer::create_peer_did_numalgo_2(&[], &[encryption(X_BASE58)], None).unwrap_err();
        assert!(matches!(err.cause(), Some(CoreError::TypeMismatch(_))));
    }

    #[test]
    fn numalgo_2_rejects_bad_service() {
        let err = DIDPeer::create_peer_did_numalgo_2(&[], &[signing(ED_BASE58)], Some("dm"))
            .unwrap_err();
        assert!(matches!(err.cause(), Some(CoreError::MalformedJson(_))));
    }

    #[test]
    fn numalgo_2_requires_content() {
        assert!(DIDPeer::create_peer_did_numalgo_2(&[], &[], None).is_err());
    }
}
