//! End-to-end regression vectors: mnemonic → seed → HD key → signature.

use cosm_primitives::hash::sha256;
use cosm_primitives::slip10::{cosmos_hd_path, derive_path};
use cosm_primitives::{Curve, Keypair, KeypairPublicKey, Mnemonic, PrivateKey};

const PHRASE: &str = "economy stock theory fatal elder harbor betray wasp final emotion task crumble \
                      siren bottom lizard educate guess current outdoor pair theory focus wife stone";

const SEED: &str = "d25e1a6c53b35af566d2851b0d56640b5b331b49a69fbadd574b1b5f397550d9\
                    3c9e2e4371a6902c180b96fb6bc0386047b72ae989a965537fcf5114bf01fe46";

fn seed() -> Vec<u8> {
    Mnemonic::from_phrase(PHRASE)
        .unwrap()
        .to_seed(None)
        .as_bytes()
        .to_vec()
}

#[test]
fn seed_from_mnemonic() {
    assert_eq!(hex::encode(seed()), SEED);
}

#[test]
fn secp256k1_account_zero() {
    let key = derive_path(&seed(), Curve::Secp256k1, &cosmos_hd_path(0).unwrap()).unwrap();
    assert_eq!(
        hex::encode(key.private_key()),
        "e16ee698b4a4ee03566d7dd9bb6f0e8a2dda802527ba56205f5767c0049fa0b9"
    );

    let keypair = key.to_keypair().unwrap();
    assert_eq!(
        keypair.public_key().to_hex(),
        "034f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c70290"
    );

    let priv_key = PrivateKey::from_bytes(key.private_key()).unwrap();
    let digest = sha256(b"Hello, world!");
    let sig = priv_key.sign_recoverable(&digest).unwrap();
    assert_eq!(
        sig.signature().to_hex(),
        "98a1de2bae5a5348d792942bf941ce3ab803b6061c727c1da369ec7b3a5c8685\
         415a0070228b79d0b982cbae9d898684d988ef43dca522eeda7acde0a534e5ab"
    );
    assert_eq!(sig.recovery_id(), 0);
    assert_eq!(sig.recover_public_key(&digest).unwrap(), priv_key.pub_key());

    // Keypair::sign hashes with SHA-256 itself and lands on the same bytes.
    let via_keypair = keypair.sign(b"Hello, world!").unwrap();
    assert_eq!(via_keypair.to_bytes(), sig.signature().to_bytes());
}

#[test]
fn secp256k1_sibling_accounts() {
    let seed = seed();
    let expected = [
        (1, "0220e8b1f21b062e785c9d508c2780a6e99ccbf16376d17e621cb03dfdc3293c7b"),
        (2, "033420df7259a87eef4ac9b4f5eb196396d9be6cd8c04fd263bf1c03488bc690fb"),
    ];
    for (account, pubkey) in expected {
        let key = derive_path(&seed, Curve::Secp256k1, &cosmos_hd_path(account).unwrap()).unwrap();
        assert_eq!(key.to_keypair().unwrap().public_key().to_hex(), pubkey);
    }
}

#[test]
fn ed25519_account_zero() {
    let key = derive_path(&seed(), Curve::Ed25519, &cosmos_hd_path(0).unwrap()).unwrap();
    assert_eq!(
        hex::encode(key.private_key()),
        "6c6639077ce9026e943c4bdcbb6b9b63163a414bab7ff2e4eeb4eeabf5342532"
    );

    let keypair = Keypair::from_private_key(Curve::Ed25519, key.private_key()).unwrap();
    let public = keypair.public_key();
    assert!(matches!(public, KeypairPublicKey::Ed25519(_)));
    assert_eq!(
        public.to_hex(),
        "a3ad5c3919dc8a6af58ea1cb4efd18c204e7588b416bd96a41f2a000e0837a11"
    );

    let sig = keypair.sign(b"Hello, world!").unwrap();
    assert_eq!(
        sig.to_hex(),
        "3c5d0027db2725d07cc911b5c4590de70006f1eaf824547ef348d498038a5282\
         12097c4c4272d6b58ea4ca0387050f01d6caa5011a8a7a95546e4470e32f1b0b"
    );
    assert!(public.verify(b"Hello, world!", &sig));
}
