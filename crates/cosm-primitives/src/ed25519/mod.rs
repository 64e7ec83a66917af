//! Ed25519 keys and signatures.
//!
//! Unlike secp256k1, Ed25519 signs the raw message and hashes internally
//! (SHA-512), so callers never pre-hash. Signing is deterministic by
//! construction.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;

use crate::PrimitivesError;

/// Length of an Ed25519 secret key seed in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Length of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// An Ed25519 signing keypair.
///
/// The public half is always derived from the 32-byte secret.
#[derive(Clone)]
pub struct Ed25519Keypair {
    signing_key: SigningKey,
}

impl Ed25519Keypair {
    /// Generate a new random keypair from the OS random number generator.
    pub fn generate() -> Self {
        Ed25519Keypair {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair from a 32-byte secret.
    ///
    /// Every 32-byte string is a valid Ed25519 secret, so the only failure is
    /// a wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let secret: [u8; SECRET_KEY_LEN] =
            bytes
                .try_into()
                .map_err(|_| PrimitivesError::InvalidKeyLength {
                    expected: SECRET_KEY_LEN,
                    got: bytes.len(),
                })?;
        Ok(Ed25519Keypair {
            signing_key: SigningKey::from_bytes(&secret),
        })
    }

    /// The 32-byte secret.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.signing_key.to_bytes()
    }

    /// The matching public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            inner: self.signing_key.verifying_key(),
        }
    }

    /// Sign a raw message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.signing_key.sign(message).to_bytes())
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public_key", &self.public_key().to_hex())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Ed25519Keypair {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Ed25519Keypair {}

/// An Ed25519 public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey {
    inner: VerifyingKey,
}

impl Ed25519PublicKey {
    /// Parse a 32-byte compressed Edwards point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let raw: [u8; PUBLIC_KEY_LEN] =
            bytes
                .try_into()
                .map_err(|_| PrimitivesError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LEN,
                    got: bytes.len(),
                })?;
        let inner = VerifyingKey::from_bytes(&raw)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(Ed25519PublicKey { inner })
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// The 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.inner.to_bytes()
    }

    /// Lowercase hex of the 32-byte encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Verify a signature over a raw message.
    ///
    /// Uses strict verification: non-canonical S values and small-order
    /// keys are rejected.
    ///
    /// # Returns
    /// `true` if the signature is valid, `false` otherwise.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        self.inner.verify_strict(message, &sig).is_ok()
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A 64-byte Ed25519 signature (`R ‖ S`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature([u8; SIGNATURE_LEN]);

impl Ed25519Signature {
    /// Wrap 64 raw signature bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let raw: [u8; SIGNATURE_LEN] =
            bytes
                .try_into()
                .map_err(|_| PrimitivesError::InvalidKeyLength {
                    expected: SIGNATURE_LEN,
                    got: bytes.len(),
                })?;
        Ok(Ed25519Signature(raw))
    }

    /// The 64 raw signature bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0
    }

    /// Lowercase hex of the signature bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signature({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 section 7.1, TEST 1 (empty message).
    const RFC_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC_SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                           5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_rfc8032_vector_1() {
        let kp = Ed25519Keypair::from_bytes(&hex::decode(RFC_SECRET).unwrap()).unwrap();
        assert_eq!(kp.public_key().to_hex(), RFC_PUBLIC);

        let sig = kp.sign(b"");
        assert_eq!(sig.to_hex(), RFC_SIG);
        assert!(kp.public_key().verify(b"", &sig));
    }

    #[test]
    fn test_sign_verify_roundtrip_and_determinism() {
        let kp = Ed25519Keypair::generate();
        let msg = b"Hello, world!";
        let sig = kp.sign(msg);
        assert_eq!(sig, kp.sign(msg));
        assert!(kp.public_key().verify(msg, &sig));
    }

    #[test]
    fn test_tampering_fails_verification() {
        let kp = Ed25519Keypair::generate();
        let sig = kp.sign(b"message");

        assert!(!kp.public_key().verify(b"messagf", &sig));

        let mut bytes = sig.to_bytes();
        bytes[0] ^= 0x01;
        let tampered = Ed25519Signature::from_bytes(&bytes).unwrap();
        assert!(!kp.public_key().verify(b"message", &tampered));

        let other = Ed25519Keypair::generate();
        assert!(!other.public_key().verify(b"message", &sig));
    }

    #[test]
    fn test_length_errors() {
        assert!(matches!(
            Ed25519Keypair::from_bytes(&[0u8; 31]),
            Err(PrimitivesError::InvalidKeyLength { expected: 32, got: 31 })
        ));
        assert!(Ed25519PublicKey::from_bytes(&[0u8; 33]).is_err());
        assert!(Ed25519Signature::from_bytes(&[0u8; 63]).is_err());
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = Ed25519PublicKey::from_hex(RFC_PUBLIC).unwrap();
        assert_eq!(pk.to_string(), RFC_PUBLIC);
    }

    #[test]
    fn test_debug_hides_secret() {
        let kp = Ed25519Keypair::from_bytes(&hex::decode(RFC_SECRET).unwrap()).unwrap();
        let dbg = format!("{:?}", kp);
        assert!(!dbg.contains(RFC_SECRET));
        assert!(dbg.contains(RFC_PUBLIC));
    }
}
