use clap::Parser;
use did_peer::{
    DIDPeer, DIDPeerError, VerificationMaterial, VerificationMethodType,
    VerificationMethodTypeAgreement, VerificationMethodTypeAuthentication,
};
use tracing_subscriber::filter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ed25519 public key (multibase), repeat for more
    #[arg(short, long, required = true)]
    signing_key: Vec<String>,

    /// X25519 public key (multibase), repeat for more
    #[arg(short, long)]
    encryption_key: Vec<String>,

    /// DIDComm endpoint URI
    #[arg(short = 'u', long)]
    service_uri: Option<String>,
}

fn main() -> Result<(), DIDPeerError> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let signing_keys: Vec<VerificationMaterial> = args
        .signing_key
        .iter()
        .map(|key| {
            VerificationMaterial::multibase(
                VerificationMethodType::Authentication(
                    VerificationMethodTypeAuthentication::Ed25519VerificationKey2020,
                ),
                key,
            )
        })
        .collect();

    let encryption_keys: Vec<VerificationMaterial> = args
        .encryption_key
        .iter()
        .map(|key| {
            VerificationMaterial::multibase(
                VerificationMethodType::Agreement(
                    VerificationMethodTypeAgreement::X25519KeyAgreementKey2020,
                ),
                key,
            )
        })
        .collect();

    if encryption_keys.is_empty() && args.service_uri.is_none() {
        let did = DIDPeer::create_peer_did_numalgo_0(&signing_keys[0])?;
        println!("{did}");
        return Ok(());
    }

    let service = args.service_uri.map(|uri| {
        serde_json::json!({
            "type": "DIDCommMessaging",
            "serviceEndpoint": {"uri": uri, "accept": ["didcomm/v2"]}
        })
        .to_string()
    });

    let did =
        DIDPeer::create_peer_did_numalgo_2(&encryption_keys, &signing_keys, service.as_deref())?;
    println!("{did}");

    let doc = DIDPeer::default().resolve(&did)?;
    println!(
        "DID Document:\n{}",
        serde_json::to_string_pretty(&doc).unwrap()
    );

    Ok(())
}
