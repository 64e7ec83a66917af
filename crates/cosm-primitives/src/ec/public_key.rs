//! secp256k1 public key.
//!
//! Supports compressed/uncompressed SEC1 serialization, Hash160 account
//! identifiers, signature verification and the point arithmetic needed
//! for public-parent HD derivation.

use k256::ecdsa::VerifyingKey;
use k256::{AffinePoint, ProjectivePoint};
use std::fmt;

use crate::ec::signature::Signature;
use crate::hash::{hash160, sha256};
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
pub const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
pub const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key for verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes don't represent a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Wrap a k256 verifying key.
    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    /// Build a public key from a curve point, rejecting the identity.
    pub(crate) fn from_projective_point(point: ProjectivePoint) -> Result<Self, PrimitivesError> {
        let vk = VerifyingKey::from_affine(point.to_affine())
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the 32-byte X coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by 32-byte X and 32-byte Y coordinates.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hexadecimal string (compressed format).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Compute the Hash160 of the compressed public key.
    ///
    /// Hash160 = RIPEMD160(SHA256(compressed_pubkey)). This is the raw
    /// 20-byte account address for secp256k1 accounts.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Verify an ECDSA signature against a 32-byte digest.
    ///
    /// # Returns
    /// `true` if the signature is valid for this digest and public key, `false` otherwise.
    pub fn verify(&self, digest: &[u8; 32], sig: &Signature) -> bool {
        sig.verify(digest, self)
    }

    /// SHA-256 the message, then verify the signature over the digest.
    pub fn verify_message(&self, message: &[u8], sig: &Signature) -> bool {
        self.verify(&sha256(message), sig)
    }

    /// Access the underlying k256 `VerifyingKey`.
    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }

    /// Convert to a projective point for curve arithmetic.
    pub(crate) fn to_projective_point(&self) -> ProjectivePoint {
        let affine: AffinePoint = *self.inner.as_affine();
        ProjectivePoint::from(affine)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
