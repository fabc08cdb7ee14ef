//! # DID Peer Method
//!
//! The `did:peer` method derives a DID Document from the identifier itself.
//! Numalgo 0 wraps a single inception key. Numalgo 2 carries encryption
//! keys (E), verification keys (V) and services (S) as `.` separated segments.
//!
//! Example:
//! ```rust
//! use did_peer::{
//!     DIDPeer, VerificationMaterial, VerificationMethodType,
//!     VerificationMethodTypeAuthentication,
//! };
//!
//! let key = VerificationMaterial::base58(
//!     VerificationMethodType::Authentication(
//!         VerificationMethodTypeAuthentication::Ed25519VerificationKey2018,
//!     ),
//!     "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7",
//! );
//! let did = DIDPeer::create_peer_did_numalgo_0(&key).unwrap();
//! assert_eq!(did, "did:peer:0z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V");
//!
//! let doc = DIDPeer::default().resolve(&did).unwrap();
//! assert_eq!(doc.authentication.len(), 1);
//! ```

use std::sync::LazyLock;

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;

pub mod config;
mod create;
pub mod document;
pub mod encnumbasis;
pub mod errors;
pub mod jwk;
pub mod numalgo;
mod resolve;
pub mod resolver;
pub mod service;
pub mod types;
pub mod validation;

use config::{PeerResolverConfig, PeerResolverConfigBuilder};
pub use document::{DIDDocPeer, VerificationMethodPeer};
pub use errors::{CoreError, DIDPeerError};
pub use resolver::{AsyncResolver, Resolution, Resolver};
pub use service::{DIDCommService, Service, ServiceEndpoint};
pub use types::{
    PublicKeyField, VerificationMaterial, VerificationMaterialFormat, VerificationMaterialValue,
    VerificationMethodType, VerificationMethodTypeAgreement, VerificationMethodTypeAuthentication,
};

/// A peer DID string
pub type PeerDID = String;

pub const PEER_DID_PREFIX: &str = "did:peer:";

/// base64url that accepts input with or without padding
pub(crate) const BASE64_URL_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// `did:peer:` + numalgo digit + a multibase key or `.` separated segments
static PEER_DID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^did:peer:[0-9](?:z[1-9A-HJ-NP-Za-km-z]+|(?:\.[A-Za-z][0-9A-Za-z_=-]*)+)$",
    )
    .unwrap()
});

/// Creates and resolves peer DIDs
///
/// The creators are associated functions, resolution uses the held config.
#[derive(Clone, Debug, Default)]
pub struct DIDPeer {
    config: PeerResolverConfig,
}

/// Checks `candidate` against the peer DID grammar only
pub fn is_peer_did(candidate: &str) -> bool {
    PEER_DID_PATTERN.is_match(candidate)
}

/// See [`DIDPeer::create_peer_did_numalgo_0`]
pub fn create_peer_did_numalgo_0(
    inception_key: &VerificationMaterial,
) -> Result<PeerDID, DIDPeerError> {
    DIDPeer::create_peer_did_numalgo_0(inception_key)
}

/// See [`DIDPeer::create_peer_did_numalgo_2`]
pub fn create_peer_did_numalgo_2(
    encryption_keys: &[VerificationMaterial],
    signing_keys: &[VerificationMaterial],
    service: Option<&str>,
) -> Result<PeerDID, DIDPeerError> {
    DIDPeer::create_peer_did_numalgo_2(encryption_keys, signing_keys, service)
}

/// Resolves `did` with keys in `format` and returns the DID Document JSON
pub fn resolve_peer_did(
    did: &str,
    format: VerificationMaterialFormat,
) -> Result<String, DIDPeerError> {
    DIDPeer::new(PeerResolverConfigBuilder::default().with_format(format).build()).resolve_json(did)
}
