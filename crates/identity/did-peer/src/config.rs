//! Handles the configuration of the peer DID resolver.
//!
//! Call the [PeerResolverConfigBuilder] to create a new configuration.
//!
//! Example: defaults (MULTIBASE keys):
//! ```rust
//! use did_peer::config::PeerResolverConfigBuilder;
//! let config = PeerResolverConfigBuilder::default().build();
//! ```
//!
//! Example: JWK keys with tighter limits:
//! ```rust
//! use did_peer::{VerificationMaterialFormat, config::PeerResolverConfigBuilder};
//! let config = PeerResolverConfigBuilder::default()
//!     .with_format(VerificationMaterialFormat::Jwk)
//!     .with_max_did_parts(8)
//!     .with_max_did_size_in_bytes(2_048)
//!     .build();
//! ```

use crate::types::VerificationMaterialFormat;

/// Configuration for the peer DID resolver.
///
/// Use the [PeerResolverConfigBuilder] to create a new configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerResolverConfig {
    pub(crate) format: VerificationMaterialFormat,
    pub(crate) max_did_parts: usize,
    pub(crate) max_did_size_in_bytes: usize,
}

impl PeerResolverConfig {
    pub fn format(&self) -> VerificationMaterialFormat {
        self.format
    }

    pub fn max_did_parts(&self) -> usize {
        self.max_did_parts
    }

    pub fn max_did_size_in_bytes(&self) -> usize {
        self.max_did_size_in_bytes
    }
}

impl Default for PeerResolverConfig {
    fn default() -> Self {
        PeerResolverConfigBuilder::default().build()
    }
}

/// Peer resolver config builder.
///
/// - format: Key representation in resolved documents (default: MULTIBASE).
/// - max_did_parts: Maximum number of numalgo 2 segments (default: 64).
/// - max_did_size_in_bytes: Maximum length of a peer DID (default: 8_192).
pub struct PeerResolverConfigBuilder {
    format: VerificationMaterialFormat,
    max_did_parts: usize,
    max_did_size_in_bytes: usize,
}

impl Default for PeerResolverConfigBuilder {
    fn default() -> Self {
        Self {
            format: VerificationMaterialFormat::default(),
            max_did_parts: 64,
            max_did_size_in_bytes: 8_192,
        }
    }
}

impl PeerResolverConfigBuilder {
    /// Set the key representation used in resolved documents
    /// Default: MULTIBASE
    pub fn with_format(mut self, format: VerificationMaterialFormat) -> Self {
        self.format = format;
        self
    }

    /// Set maximum number of segments in a numalgo 2 peer DID
    /// Default: 64
    pub fn with_max_did_parts(mut self, max_did_parts: usize) -> Self {
        self.max_did_parts = max_did_parts;
        self
    }

    /// Set maximum size in bytes of a peer DID to be resolved
    /// Default: 8_192 bytes
    pub fn with_max_did_size_in_bytes(mut self, max_did_size_in_bytes: usize) -> Self {
        self.max_did_size_in_bytes = max_did_size_in_bytes;
        self
    }

    /// Build the [PeerResolverConfig].
    pub fn build(self) -> PeerResolverConfig {
        PeerResolverConfig {
            format: self.format,
            max_did_parts: self.max_did_parts,
            max_did_size_in_bytes: self.max_did_size_in_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PeerResolverConfig::default();
        assert_eq!(config.format(), VerificationMaterialFormat::Multibase);
        assert_eq!(config.max_did_parts(), 64);
        assert_eq!(config.max_did_size_in_bytes(), 8_192);
    }

    #[test]
    fn builder_overrides() {
        let config = PeerResolverConfigBuilder::default()
            .with_format(VerificationMaterialFormat::Base58)
            .with_max_did_parts(3)
            .with_max_did_size_in_bytes(100)
            .build();
        assert_eq!(config.format(), VerificationMaterialFormat::Base58);
        assert_eq!(config.max_did_parts(), 3);
        assert_eq!(config.max_did_size_in_bytes(), 100);
    }
}
