use proptest::prelude::*;

use cosm_primitives::bip39::{entropy_to_mnemonic, mnemonic_to_entropy, Mnemonic};
use cosm_primitives::hash::sha256;
use cosm_primitives::slip10::{ChildIndex, HdPath};
use cosm_primitives::{Curve, Keypair, PrimitivesError, PrivateKey};

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(20), Just(24), Just(28), Just(32)]
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_mnemonic_roundtrip(entropy in entropy_strategy()) {
        let mnemonic = entropy_to_mnemonic(&entropy).unwrap();
        prop_assert_eq!(mnemonic.word_count(), entropy.len() * 3 / 4);
        prop_assert_eq!(mnemonic_to_entropy(&mnemonic).unwrap(), entropy);

        let reparsed = Mnemonic::from_phrase(mnemonic.phrase()).unwrap();
        prop_assert_eq!(reparsed.phrase(), mnemonic.phrase());
    }

    #[test]
    fn invalid_entropy_lengths_rejected(len in 0usize..64) {
        prop_assume!(![16, 20, 24, 28, 32].contains(&len));
        let entropy = vec![0xa5u8; len];
        prop_assert!(matches!(
            entropy_to_mnemonic(&entropy),
            Err(PrimitivesError::InvalidEntropyLength(bits)) if bits == len * 8
        ));
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let digest = sha256(&msg);
            let sig = pk.sign(&digest).unwrap();
            prop_assert!(sig.is_low_s());
            prop_assert_eq!(&sig, &pk.sign(&digest).unwrap());
            prop_assert!(pk.pub_key().verify(&digest, &sig));
        }
    }

    #[test]
    fn keypair_tamper_detection(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 1..128),
        flip in any::<prop::sample::Index>(),
        ed in any::<bool>()
    ) {
        let curve = if ed { Curve::Ed25519 } else { Curve::Secp256k1 };
        if let Ok(kp) = Keypair::from_private_key(curve, &seed) {
            let sig = kp.sign(&msg).unwrap();
            prop_assert!(kp.verify(&msg, &sig));

            let mut tampered = msg.clone();
            let i = flip.index(tampered.len());
            tampered[i] ^= 0x01;
            prop_assert!(!kp.verify(&tampered, &sig));
        }
    }

    #[test]
    fn hd_path_display_roundtrip(raw in prop::collection::vec(any::<u32>(), 0..8)) {
        let path = HdPath::new(raw.into_iter().map(ChildIndex::from_raw).collect());
        let parsed: HdPath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }
}
