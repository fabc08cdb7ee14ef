//! Error types for did:peer
//!
//! [`DIDPeerError`] is the public surface. [`CoreError`] carries the detailed
//! cause and stays reachable through [`std::error::Error::source`].

use peer_did_encoding::EncodingError;
use thiserror::Error;

/// Low level failures raised while encoding or decoding peer DID parts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("Invalid key: Invalid key length: {0}")]
    InvalidKeyLength(usize),

    #[error("Invalid key: Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Invalid key: {0}")]
    MalformedKey(String),

    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid key: {0}")]
    TypeMismatch(String),

    #[error("Invalid service: {0}")]
    InvalidService(String),

    #[error("Unsupported transform part: {0}")]
    UnsupportedTransform(char),

    #[error("Invalid numalgo of DID: {0}")]
    InvalidNumalgo(char),

    #[error("Missing field: {0}")]
    MissingField(String),
}

/// Errors returned by the did:peer creator, resolver and document parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DIDPeerError {
    #[error("Invalid peer DID provided. {message}")]
    MalformedPeerDID {
        message: String,
        #[source]
        source: Option<CoreError>,
    },

    #[error("Invalid peer DID Doc. {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<CoreError>,
    },
}

impl DIDPeerError {
    pub fn malformed_peer_did(message: impl Into<String>) -> Self {
        DIDPeerError::MalformedPeerDID {
            message: message.into(),
            source: None,
        }
    }

    pub fn malformed_document(message: impl Into<String>) -> Self {
        DIDPeerError::MalformedDocument {
            message: message.into(),
            source: None,
        }
    }

    /// The underlying cause, if any
    pub fn cause(&self) -> Option<&CoreError> {
        match self {
            DIDPeerError::MalformedPeerDID { source, .. }
            | DIDPeerError::MalformedDocument { source, .. } => source.as_ref(),
        }
    }
}

/// Wraps a [`CoreError`] raised while creating or resolving a peer DID
impl From<CoreError> for DIDPeerError {
    fn from(err: CoreError) -> Self {
        DIDPeerError::MalformedPeerDID {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<EncodingError> for DIDPeerError {
    fn from(err: EncodingError) -> Self {
        CoreError::from(err).into()
    }
}

/// Re-wraps a [`CoreError`] as a malformed DID Document
pub(crate) fn malformed_document(err: CoreError) -> DIDPeerError {
    DIDPeerError::MalformedDocument {
        message: err.to_string(),
        source: Some(err),
    }
}
