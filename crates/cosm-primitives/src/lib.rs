/// cosm SDK - Cryptographic primitives, mnemonics, and HD key derivation.
///
/// This crate provides the foundational building blocks for the cosm SDK:
/// - Hash functions (SHA-256, SHA-512, Keccak-256, SHA3-256, RIPEMD-160, HMAC)
/// - BIP-39 mnemonic encoding and seed derivation
/// - SLIP-10 hierarchical deterministic derivation over secp256k1 and ed25519
/// - secp256k1 keys and ECDSA signatures (RFC6979, low-S)
/// - ed25519 keys and signatures
/// - Process-wide crypto backend readiness

pub mod hash;
pub mod bip39;
pub mod slip10;
pub mod ec;
pub mod ed25519;
pub mod keypair;
pub mod backend;

mod error;
pub use error::PrimitivesError;

pub use bip39::{Mnemonic, Seed, WordCount};
pub use ec::{ExtendedSignature, PrivateKey, PublicKey, Signature};
pub use ed25519::{Ed25519Keypair, Ed25519PublicKey, Ed25519Signature};
pub use keypair::{Curve, Keypair, KeypairPublicKey, KeypairSignature};
pub use slip10::{cosmos_default_hd_path, cosmos_hd_path, ChildIndex, ExtendedPrivateKey, ExtendedPublicKey, HdPath};
