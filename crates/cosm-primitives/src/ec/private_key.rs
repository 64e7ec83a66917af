//! secp256k1 private key.
//!
//! Wraps the k256 signing key and adds deterministic digest signing,
//! recoverable signatures and scalar access for HD derivation.

use k256::ecdsa::SigningKey;
use k256::Scalar;
use rand::rngs::OsRng;

use crate::ec::public_key::PublicKey;
use crate::ec::signature::{ExtendedSignature, Signature};
use crate::hash::sha256;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256k1 private key for signing.
///
/// The public key is always computed from the scalar on demand, so the two
/// can never disagree.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Sign a 32-byte digest using deterministic RFC6979 nonces.
    ///
    /// Produces a low-S normalized signature. Callers hash the payload
    /// with SHA-256 first, or use [`PrivateKey::sign_message`].
    ///
    /// # Arguments
    /// * `digest` - The message digest to sign.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(digest, self)
    }

    /// SHA-256 the message, then sign the digest.
    pub fn sign_message(&self, message: &[u8]) -> Result<Signature, PrimitivesError> {
        self.sign(&sha256(message))
    }

    /// Sign a digest and keep the recovery id alongside r and s.
    pub fn sign_recoverable(&self, digest: &[u8; 32]) -> Result<ExtendedSignature, PrimitivesError> {
        ExtendedSignature::sign(digest, self)
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }

    /// Convert the private key to a k256 `Scalar` for arithmetic operations.
    pub(crate) fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
