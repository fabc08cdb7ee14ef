//! Numalgo and purpose codes of peer DID identifiers
//!
//! https://identity.foundation/peer-did-method-spec/

use serde::{Deserialize, Serialize};

/// Peer DID algorithm number (numalgo)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerNumAlgo {
    /// Type 0: a single inception key
    InceptionKey = 0,
    /// Type 2: multiple inline keys and services
    MultipleKeys = 2,
}

impl PeerNumAlgo {
    /// Parses the character following `did:peer:`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(PeerNumAlgo::InceptionKey),
            '2' => Some(PeerNumAlgo::MultipleKeys),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PeerNumAlgo::InceptionKey => '0',
            PeerNumAlgo::MultipleKeys => '2',
        }
    }
}

/// Purpose codes of numalgo 2 segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerPurpose {
    /// Key agreement (encryption)
    Encryption,
    /// Authentication (verification)
    Verification,
    /// Service endpoint
    Service,
}

impl PeerPurpose {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(PeerPurpose::Encryption),
            'V' => Some(PeerPurpose::Verification),
            'S' => Some(PeerPurpose::Service),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PeerPurpose::Encryption => 'E',
            PeerPurpose::Verification => 'V',
            PeerPurpose::Service => 'S',
        }
    }

    /// Returns true if this purpose represents a key (not a service)
    pub fn is_key(&self) -> bool {
        !matches!(self, PeerPurpose::Service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numalgo_chars() {
        assert_eq!(PeerNumAlgo::from_char('0'), Some(PeerNumAlgo::InceptionKey));
        assert_eq!(PeerNumAlgo::from_char('2'), Some(PeerNumAlgo::MultipleKeys));
        assert_eq!(PeerNumAlgo::from_char('1'), None);
        assert_eq!(PeerNumAlgo::MultipleKeys.to_char(), '2');
        assert_eq!(PeerNumAlgo::MultipleKeys as u8, 2);
    }

    #[test]
    fn purpose_chars() {
        for c in ['E', 'V', 'S'] {
            assert_eq!(PeerPurpose::from_char(c).map(PeerPurpose::to_char), Some(c));
        }
        assert_eq!(PeerPurpose::from_char('A'), None);
        assert!(PeerPurpose::Encryption.is_key());
        assert!(!PeerPurpose::Service.is_key());
    }
}
