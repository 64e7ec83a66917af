//! Curve-agnostic signing keypair.
//!
//! `Keypair` hides which curve an account uses so wallet code can sign and
//! verify without matching on the algorithm everywhere. secp256k1 signs a
//! SHA-256 digest of the message; Ed25519 signs the message itself.

use std::fmt;
use std::str::FromStr;

use crate::ec::{PrivateKey, PublicKey, Signature};
use crate::ed25519::{Ed25519Keypair, Ed25519PublicKey, Ed25519Signature};
use crate::hash::sha256;
use crate::PrimitivesError;

/// Supported signing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp256k1 ECDSA, the default for Cosmos accounts.
    #[default]
    Secp256k1,
    /// Ed25519, used for validator consensus keys.
    Ed25519,
}

impl Curve {
    /// HMAC key used to derive the HD master key from a seed.
    pub fn master_secret(&self) -> &'static [u8] {
        match self {
            Curve::Secp256k1 => b"Bitcoin seed",
            Curve::Ed25519 => b"ed25519 seed",
        }
    }

    /// Algorithm name as reported in account data.
    pub fn algo(&self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algo())
    }
}

impl FromStr for Curve {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "secp256k1" => Ok(Curve::Secp256k1),
            "ed25519" => Ok(Curve::Ed25519),
            other => Err(PrimitivesError::UnsupportedCurve(other.to_string())),
        }
    }
}

/// A private key on either supported curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keypair {
    Secp256k1(PrivateKey),
    Ed25519(Ed25519Keypair),
}

/// The public half of a [`Keypair`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeypairPublicKey {
    Secp256k1(PublicKey),
    Ed25519(Ed25519PublicKey),
}

/// A signature produced by a [`Keypair`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeypairSignature {
    Secp256k1(Signature),
    Ed25519(Ed25519Signature),
}

impl Keypair {
    /// Build a keypair from a raw 32-byte private key on `curve`.
    ///
    /// # Arguments
    /// * `curve` - Which curve the scalar/seed belongs to.
    /// * `bytes` - 32 bytes of private key material.
    pub fn from_private_key(curve: Curve, bytes: &[u8]) -> Result<Self, PrimitivesError> {
        match curve {
            Curve::Secp256k1 => Ok(Keypair::Secp256k1(PrivateKey::from_bytes(bytes)?)),
            Curve::Ed25519 => Ok(Keypair::Ed25519(Ed25519Keypair::from_bytes(bytes)?)),
        }
    }

    /// Generate a fresh random keypair.
    pub fn generate(curve: Curve) -> Self {
        match curve {
            Curve::Secp256k1 => Keypair::Secp256k1(PrivateKey::new()),
            Curve::Ed25519 => Keypair::Ed25519(Ed25519Keypair::generate()),
        }
    }

    pub fn curve(&self) -> Curve {
        match self {
            Keypair::Secp256k1(_) => Curve::Secp256k1,
            Keypair::Ed25519(_) => Curve::Ed25519,
        }
    }

    /// Derive the public key. Never stored, always recomputed.
    pub fn public_key(&self) -> KeypairPublicKey {
        match self {
            Keypair::Secp256k1(k) => KeypairPublicKey::Secp256k1(k.pub_key()),
            Keypair::Ed25519(k) => KeypairPublicKey::Ed25519(k.public_key()),
        }
    }

    /// The raw 32-byte private key.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        match self {
            Keypair::Secp256k1(k) => k.to_bytes(),
            Keypair::Ed25519(k) => k.to_bytes(),
        }
    }

    /// Sign a message.
    ///
    /// secp256k1 signs `sha256(message)`; Ed25519 signs `message` directly.
    /// Both are deterministic.
    pub fn sign(&self, message: &[u8]) -> Result<KeypairSignature, PrimitivesError> {
        match self {
            Keypair::Secp256k1(k) => Ok(KeypairSignature::Secp256k1(k.sign(&sha256(message))?)),
            Keypair::Ed25519(k) => Ok(KeypairSignature::Ed25519(k.sign(message))),
        }
    }

    /// Verify a signature over `message` against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &KeypairSignature) -> bool {
        self.public_key().verify(message, signature)
    }
}

impl KeypairPublicKey {
    pub fn curve(&self) -> Curve {
        match self {
            KeypairPublicKey::Secp256k1(_) => Curve::Secp256k1,
            KeypairPublicKey::Ed25519(_) => Curve::Ed25519,
        }
    }

    /// Parse a public key for `curve`.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, PrimitivesError> {
        match curve {
            Curve::Secp256k1 => Ok(KeypairPublicKey::Secp256k1(PublicKey::from_bytes(bytes)?)),
            Curve::Ed25519 => Ok(KeypairPublicKey::Ed25519(Ed25519PublicKey::from_bytes(bytes)?)),
        }
    }

    /// Canonical encoding: 33-byte compressed SEC1 or 32-byte Ed25519.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            KeypairPublicKey::Secp256k1(k) => k.to_compressed().to_vec(),
            KeypairPublicKey::Ed25519(k) => k.to_bytes().to_vec(),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Verify a signature over `message`.
    ///
    /// # Returns
    /// `false` when the signature is invalid or belongs to the other curve.
    pub fn verify(&self, message: &[u8], signature: &KeypairSignature) -> bool {
        match (self, signature) {
            (KeypairPublicKey::Secp256k1(k), KeypairSignature::Secp256k1(s)) => {
                k.verify_message(message, s)
            }
            (KeypairPublicKey::Ed25519(k), KeypairSignature::Ed25519(s)) => k.verify(message, s),
            _ => false,
        }
    }
}

impl KeypairSignature {
    /// The 64-byte fixed-width encoding used on the wire.
    pub fn to_bytes(&self) -> [u8; 64] {
        match self {
            KeypairSignature::Secp256k1(s) => s.to_bytes(),
            KeypairSignature::Ed25519(s) => s.to_bytes(),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a 64-byte signature for `curve`.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, PrimitivesError> {
        match curve {
            Curve::Secp256k1 => Ok(KeypairSignature::Secp256k1(Signature::from_bytes(bytes)?)),
            Curve::Ed25519 => Ok(KeypairSignature::Ed25519(Ed25519Signature::from_bytes(bytes)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_secrets() {
        assert_eq!(Curve::Secp256k1.master_secret(), b"Bitcoin seed");
        assert_eq!(Curve::Ed25519.master_secret(), b"ed25519 seed");
    }

    #[test]
    fn test_curve_parse_and_display() {
        assert_eq!("secp256k1".parse::<Curve>().unwrap(), Curve::Secp256k1);
        assert_eq!("Ed25519".parse::<Curve>().unwrap(), Curve::Ed25519);
        assert!(matches!(
            "sr25519".parse::<Curve>(),
            Err(PrimitivesError::UnsupportedCurve(name)) if name == "sr25519"
        ));
        assert_eq!(Curve::default().to_string(), "secp256k1");
    }

    #[test]
    fn test_sign_verify_both_curves() {
        for curve in [Curve::Secp256k1, Curve::Ed25519] {
            let kp = Keypair::generate(curve);
            assert_eq!(kp.curve(), curve);
            assert_eq!(kp.public_key().curve(), curve);

            let sig = kp.sign(b"transfer 10uatom").unwrap();
            assert_eq!(sig, kp.sign(b"transfer 10uatom").unwrap());
            assert!(kp.verify(b"transfer 10uatom", &sig));
            assert!(!kp.verify(b"transfer 11uatom", &sig));

            let mut bytes = sig.to_bytes();
            bytes[40] ^= 0x80;
            if let Ok(tampered) = KeypairSignature::from_bytes(curve, &bytes) {
                assert!(!kp.verify(b"transfer 10uatom", &tampered));
            }
        }
    }

    #[test]
    fn test_cross_curve_verify_is_false() {
        let secp = Keypair::generate(Curve::Secp256k1);
        let ed = Keypair::generate(Curve::Ed25519);
        let sig = ed.sign(b"msg").unwrap();
        assert!(!secp.verify(b"msg", &sig));
    }

    #[test]
    fn test_public_key_encodings() {
        let secp = Keypair::generate(Curve::Secp256k1);
        assert_eq!(secp.public_key().to_bytes().len(), 33);
        let ed = Keypair::generate(Curve::Ed25519);
        assert_eq!(ed.public_key().to_bytes().len(), 32);

        let parsed = KeypairPublicKey::from_bytes(Curve::Ed25519, &ed.public_key().to_bytes()).unwrap();
        assert_eq!(parsed, ed.public_key());
    }

    #[test]
    fn test_from_private_key_roundtrip() {
        let kp = Keypair::generate(Curve::Secp256k1);
        let again = Keypair::from_private_key(Curve::Secp256k1, &kp.private_key_bytes()).unwrap();
        assert_eq!(kp, again);
    }
}
