use clap::{Parser, ValueEnum};
use did_peer::{
    AsyncResolver, DIDPeer, DIDPeerError, VerificationMaterialFormat,
    config::PeerResolverConfigBuilder,
};
use tracing_subscriber::filter;

#[derive(Clone, Debug, ValueEnum)]
enum Format {
    Base58,
    Multibase,
    Jwk,
}

impl From<Format> for VerificationMaterialFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Base58 => VerificationMaterialFormat::Base58,
            Format::Multibase => VerificationMaterialFormat::Multibase,
            Format::Jwk => VerificationMaterialFormat::Jwk,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// did:peer DID to resolve
    #[arg(short, long)]
    did: String,

    /// Key representation in the DID Document
    #[arg(short, long, value_enum, default_value_t = Format::Multibase)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<(), DIDPeerError> {
    let args = Args::parse();

    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let config = PeerResolverConfigBuilder::default()
        .with_format(args.format.into())
        .build();
    let resolver: Box<dyn AsyncResolver> = Box::new(DIDPeer::new(config));

    let Some(resolution) = resolver.resolve(&args.did).await else {
        eprintln!("{} is not a did:peer DID", args.did);
        std::process::exit(1);
    };
    let doc = resolution?;

    println!(
        "DID Document:\n{}",
        serde_json::to_string_pretty(&doc).unwrap()
    );

    Ok(())
}
