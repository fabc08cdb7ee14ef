//! Checks the hand-rolled codecs against the multibase crate

use did_peer::{
    VerificationMaterialFormat, create_peer_did_numalgo_0, encnumbasis::decode_multibase_encnumbasis,
};
use multibase::Base;
use peer_did_encoding::{Codec, encode_multikey, multicodec};

const PEER_DID: &str = "did:peer:0z6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V";

#[test]
fn multikey_matches_multibase_crate() {
    let (base, bytes) = multibase::decode(&PEER_DID[10..]).unwrap();
    assert_eq!(base, Base::Base58Btc);

    let (codec, key) = multicodec::decode(&bytes).unwrap();
    assert_eq!(codec, Codec::Ed25519Pub);
    assert_eq!(encode_multikey(codec, key), multibase::encode(Base::Base58Btc, &bytes));
}

#[test]
fn decoded_base58_matches_multibase_crate() {
    let decoded =
        decode_multibase_encnumbasis(&PEER_DID[10..], VerificationMaterialFormat::Base58).unwrap();
    let did_peer::VerificationMaterialValue::Base58(value) = &decoded.material.value else {
        panic!("Expected base58 material");
    };

    let (_, bytes) = multibase::decode(&PEER_DID[10..]).unwrap();
    // multibase's base58btc without its 'z' prefix is plain base58
    assert_eq!(
        multibase::encode(Base::Base58Btc, &bytes[2..])[1..],
        value[..]
    );
}

#[test]
fn numalgo_0_from_random_keys() {
    for seed in 0u8..16 {
        let key: Vec<u8> = (0..32u8).map(|i| i.wrapping_mul(31).wrapping_add(seed)).collect();
        let material = did_peer::VerificationMaterial::multibase(
            did_peer::VerificationMethodType::Authentication(
                did_peer::VerificationMethodTypeAuthentication::Ed25519VerificationKey2020,
            ),
            encode_multikey(Codec::Ed25519Pub, &key),
        );

        let did = create_peer_did_numalgo_0(&material).unwrap();
        let (_, bytes) = multibase::decode(&did[10..]).unwrap();
        assert_eq!(&bytes[..2], &[0xed, 0x01]);
        assert_eq!(&bytes[2..], &key[..]);
    }
}
