/*!
 * Pluggable resolution traits.
 *
 * [`Resolver`] is for methods that resolve without IO, [`AsyncResolver`] for
 * callers composing resolvers in async code. Every [`Resolver`] is an
 * [`AsyncResolver`] through a blanket impl.
 *
 * Resolvers return a [`Resolution`]:
 * - `None`: not a DID this resolver handles
 * - `Some(Ok(doc))`: resolved
 * - `Some(Err(e))`: recognized, but resolution failed
 */

use std::future::Future;
use std::pin::Pin;

use crate::{DIDPeer, PEER_DID_PREFIX, document::DIDDocPeer, errors::DIDPeerError};

pub type Resolution = Option<Result<DIDDocPeer, DIDPeerError>>;

/// Synchronous DID resolver
pub trait Resolver: Send + Sync {
    /// Human-readable name for this resolver (e.g., `"PeerResolver"`).
    fn name(&self) -> &str;

    fn resolve(&self, did: &str) -> Resolution;
}

/// Asynchronous DID resolver
///
/// This trait is dyn-compatible so resolvers can be stored as
/// `Box<dyn AsyncResolver>`.
pub trait AsyncResolver: Send + Sync {
    fn name(&self) -> &str;

    fn resolve<'a>(&'a self, did: &'a str)
    -> Pin<Box<dyn Future<Output = Resolution> + Send + 'a>>;
}

/// Every sync [`Resolver`] is automatically an [`AsyncResolver`].
impl<T: Resolver> AsyncResolver for T {
    fn name(&self) -> &str {
        Resolver::name(self)
    }

    fn resolve<'a>(
        &'a self,
        did: &'a str,
    ) -> Pin<Box<dyn Future<Output = Resolution> + Send + 'a>> {
        Box::pin(std::future::ready(Resolver::resolve(self, did)))
    }
}

impl Resolver for DIDPeer {
    fn name(&self) -> &str {
        "PeerResolver"
    }

    fn resolve(&self, did: &str) -> Resolution {
        if !did.starts_with(PEER_DID_PREFIX) {
            return None;
        }
        Some(DIDPeer::resolve(self, did))
    }
}
