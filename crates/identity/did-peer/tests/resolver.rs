use did_peer::{AsyncResolver, DIDPeer, Resolver};

const PEER_DID: &str = "did:peer:2.Vz6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc";

#[tokio::test]
async fn async_resolver_resolves_peer_dids() {
    let resolver: Box<dyn AsyncResolver> = Box::new(DIDPeer::default());
    assert_eq!(AsyncResolver::name(resolver.as_ref()), "PeerResolver");

    let doc = resolver.resolve(PEER_DID).await.unwrap().unwrap();
    assert_eq!(doc.authentication_kids(), vec![format!("{PEER_DID}#key-1").as_str()]);
    assert_eq!(doc.agreement_kids(), vec![format!("{PEER_DID}#key-2").as_str()]);
}

#[tokio::test]
async fn async_resolver_passes_on_other_methods() {
    let resolver: Box<dyn AsyncResolver> = Box::new(DIDPeer::default());
    assert!(resolver.resolve("did:web:example.com").await.is_none());
}

#[tokio::test]
async fn async_resolver_reports_failures() {
    let resolver: Box<dyn AsyncResolver> = Box::new(DIDPeer::default());
    assert!(matches!(resolver.resolve("did:peer:2.Q").await, Some(Err(_))));
}

#[test]
fn sync_resolver() {
    let peer = DIDPeer::default();
    let resolution = Resolver::resolve(&peer, PEER_DID);
    assert!(matches!(resolution, Some(Ok(_))));
}
