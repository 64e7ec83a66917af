//! ECDSA signature with fixed-width and DER serialization.
//!
//! Signatures are produced with RFC6979 deterministic nonces and are always
//! low-S. The wire form used by transactions is the 64-byte `r ‖ s`
//! concatenation; DER is kept for interop with tooling that expects it.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{self, RecoveryId, VerifyingKey};

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a fixed-width `r ‖ s` signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Length of an extended `r ‖ s ‖ v` signature in bytes.
pub const EXTENDED_SIGNATURE_LEN: usize = 65;

/// An ECDSA signature. Both scalars are always in `[1, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Build a signature from big-endian R and S.
    ///
    /// # Returns
    /// An error when either scalar is zero or not below the curve order.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Result<Self, PrimitivesError> {
        ecdsa::Signature::from_scalars(r, s)
            .map(Self::from_k256)
            .map_err(|_| PrimitivesError::InvalidSignature("scalar out of range".to_string()))
    }

    pub(crate) fn from_k256(inner: ecdsa::Signature) -> Self {
        Signature { inner }
    }

    /// The R component, big-endian.
    pub fn r(&self) -> [u8; 32] {
        to_array(&self.inner.split_bytes().0)
    }

    /// The S component, big-endian.
    pub fn s(&self) -> [u8; 32] {
        to_array(&self.inner.split_bytes().1)
    }

    /// Whether S lies in the lower half of the curve order.
    pub fn is_low_s(&self) -> bool {
        self.inner.normalize_s().is_none()
    }

    /// Return a copy with S replaced by N - S when S is high.
    pub fn normalize_s(&self) -> Self {
        Self::from_k256(self.inner.normalize_s().unwrap_or(self.inner))
    }

    /// Parse a 64-byte `r ‖ s` signature.
    ///
    /// # Arguments
    /// * `bytes` - Exactly 64 bytes, R then S, both big-endian.
    ///
    /// # Returns
    /// `Ok(Signature)` when both scalars are in `[1, N)`, an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: SIGNATURE_LEN,
                got: bytes.len(),
            });
        }
        ecdsa::Signature::from_slice(bytes)
            .map(Self::from_k256)
            .map_err(|_| PrimitivesError::InvalidSignature("scalar out of range".to_string()))
    }

    /// Serialize as the 64-byte `r ‖ s` concatenation.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize as lowercase hex of the 64-byte form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a strict DER `SEQUENCE { r INTEGER, s INTEGER }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        ecdsa::Signature::from_der(bytes)
            .map(Self::from_k256)
            .map_err(|e| PrimitivesError::InvalidSignature(format!("malformed DER signature: {}", e)))
    }

    /// Serialize as DER. S is normalized low first.
    pub fn to_der(&self) -> Vec<u8> {
        self.normalize_s().inner.to_der().as_bytes().to_vec()
    }

    /// Sign a 32-byte digest using RFC6979 deterministic nonces.
    ///
    /// # Arguments
    /// * `digest` - The message digest to sign.
    /// * `priv_key` - The private key to sign with.
    ///
    /// # Returns
    /// A low-S signature. Signing the same digest twice yields identical bytes.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        ExtendedSignature::sign(digest, priv_key).map(|ext| ext.signature)
    }

    /// Verify this signature against a digest and public key.
    ///
    /// High-S signatures are rejected even when mathematically valid.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        self.is_low_s()
            && pub_key
                .verifying_key()
                .verify_prehash(digest, &self.inner)
                .is_ok()
    }
}

/// A signature plus the recovery id needed to rebuild the signer's key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedSignature {
    signature: Signature,
    recovery_id: u8,
}

impl ExtendedSignature {
    /// Pair a signature with a recovery id.
    ///
    /// # Returns
    /// An error if `recovery_id` is not in `0..=3`.
    pub fn new(signature: Signature, recovery_id: u8) -> Result<Self, PrimitivesError> {
        if recovery_id > 3 {
            return Err(PrimitivesError::InvalidSignature(format!(
                "invalid recovery id {}",
                recovery_id
            )));
        }
        Ok(ExtendedSignature {
            signature,
            recovery_id,
        })
    }

    /// Sign a digest and keep the recovery id.
    ///
    /// k256 normalizes S and flips the recovery id's parity bit to match.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let (inner, recovery_id) = priv_key
            .signing_key()
            .sign_prehash_recoverable(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Ok(ExtendedSignature {
            signature: Signature::from_k256(inner),
            recovery_id: recovery_id.to_byte(),
        })
    }

    /// The plain `r ‖ s` signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The recovery id, 0 to 3.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Serialize as `r ‖ s ‖ v` (65 bytes).
    pub fn to_bytes(&self) -> [u8; EXTENDED_SIGNATURE_LEN] {
        let mut out = [0u8; EXTENDED_SIGNATURE_LEN];
        out[..SIGNATURE_LEN].copy_from_slice(&self.signature.to_bytes());
        out[SIGNATURE_LEN] = self.recovery_id;
        out
    }

    /// Parse a 65-byte `r ‖ s ‖ v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != EXTENDED_SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: EXTENDED_SIGNATURE_LEN,
                got: bytes.len(),
            });
        }
        let signature = Signature::from_bytes(&bytes[..SIGNATURE_LEN])?;
        Self::new(signature, bytes[SIGNATURE_LEN])
    }

    /// Recover the public key that produced this signature over `digest`.
    pub fn recover_public_key(&self, digest: &[u8; 32]) -> Result<PublicKey, PrimitivesError> {
        let recovery_id = RecoveryId::from_byte(self.recovery_id)
            .ok_or_else(|| PrimitivesError::InvalidSignature(format!("invalid recovery id {}", self.recovery_id)))?;
        let recovered = VerifyingKey::recover_from_prehash(digest, &self.signature.inner, recovery_id)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Ok(PublicKey::from_k256_verifying_key(&recovered))
    }
}

impl From<ExtendedSignature> for Signature {
    fn from(ext: ExtendedSignature) -> Self {
        ext.signature
    }
}

fn to_array(bytes: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    const GOLDEN_PRIV: &str = "e16ee698b4a4ee03566d7dd9bb6f0e8a2dda802527ba56205f5767c0049fa0b9";
    const GOLDEN_SIG: &str = "98a1de2bae5a5348d792942bf941ce3ab803b6061c727c1da369ec7b3a5c8685\
                              415a0070228b79d0b982cbae9d898684d988ef43dca522eeda7acde0a534e5ab";

    #[test]
    fn test_der_parsing() {
        let valid_sig = hex::decode(
            "304402204e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41\
             0220181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d09",
        )
        .unwrap();
        let sig = Signature::from_der(&valid_sig).unwrap();
        assert_eq!(sig.to_der(), valid_sig);

        assert!(Signature::from_der(&[]).is_err());

        let mut bad_magic = valid_sig.clone();
        bad_magic[0] = 0x31;
        assert!(Signature::from_der(&bad_magic).is_err());

        let mut bad_marker = valid_sig.clone();
        bad_marker[2] = 0x03;
        assert!(Signature::from_der(&bad_marker).is_err());
    }

    #[test]
    fn test_der_low_s_normalization() {
        let sig = Signature::new(
            hex_to_32("a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404"),
            hex_to_32("971729c7fa944b465b35250c6570a2f31acbb14b13d1565fab7330dcb2b3dfb1"),
        )
        .unwrap();
        assert!(!sig.is_low_s());
        let expected = hex::decode(
            "3045022100a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404\
             022068e8d638056bb4b9a4cadaf39a8f5d0b9fe32b9b9b7749dc145f2db01d826190",
        )
        .unwrap();
        assert_eq!(sig.to_der(), expected);
        assert!(sig.normalize_s().is_low_s());
        assert_eq!(
            hex::encode(sig.normalize_s().s()),
            "68e8d638056bb4b9a4cadaf39a8f5d0b9fe32b9b9b7749dc145f2db01d826190"
        );
    }

    /// RFC6979 vectors from the Trezor / CoreBitcoin suites.
    #[test]
    fn test_rfc6979() {
        let tests = vec![
            (
                "cca9fbcc1b41e5a95d369eaa6ddcff73b61a4efaa279cfc6567e8daa39cbaf50",
                "sample",
                "3045022100af340daf02cc15c8d5d08d7735dfe6b98a474ed373bdb5fbecf7571be52b384202205009fb27f37034a9b24b707b7c6b79ca23ddef9e25f7282e8a797efe53a8f124",
            ),
            (
                "0000000000000000000000000000000000000000000000000000000000000001",
                "Satoshi Nakamoto",
                "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d802202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
            ),
            (
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
                "Satoshi Nakamoto",
                "3045022100fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d002206b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5",
            ),
            (
                "f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181",
                "Alan Turing",
                "304402207063ae83e7f62bbb171798131b4a0564b956930092b33b07b395615d9ec7e15c022058dfcc1e00a35e1572f366ffe34ba0fc47db1e7189759b9fb233c5b05ab388ea",
            ),
        ];

        for (key_hex, msg, expected_sig_hex) in &tests {
            let priv_key = PrivateKey::from_hex(key_hex).unwrap();
            let digest = sha256(msg.as_bytes());

            let sig = priv_key.sign(&digest).unwrap();
            assert_eq!(hex::encode(sig.to_der()), *expected_sig_hex, "RFC6979 for '{}'", msg);
            assert!(sig.is_low_s());
            assert!(priv_key.pub_key().verify(&digest, &sig));
        }
    }

    #[test]
    fn test_golden_signature_fixed_bytes() {
        let priv_key = PrivateKey::from_hex(GOLDEN_PRIV).unwrap();
        let digest = sha256(b"Hello, world!");

        let ext = priv_key.sign_recoverable(&digest).unwrap();
        assert_eq!(ext.signature().to_hex(), GOLDEN_SIG);
        assert_eq!(ext.recovery_id(), 0);

        let parsed = Signature::from_bytes(&hex::decode(GOLDEN_SIG).unwrap()).unwrap();
        assert_eq!(&parsed, ext.signature());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let priv_key = PrivateKey::new();
        let digest = sha256(b"same message");
        assert_eq!(priv_key.sign(&digest).unwrap(), priv_key.sign(&digest).unwrap());
    }

    #[test]
    fn test_tampered_digest_or_signature_fails() {
        let priv_key = PrivateKey::new();
        let pub_key = priv_key.pub_key();
        let digest = sha256(b"payload");
        let sig = priv_key.sign(&digest).unwrap();

        let mut other = digest;
        other[0] ^= 0x01;
        assert!(!pub_key.verify(&other, &sig));

        let mut bytes = sig.to_bytes();
        bytes[10] ^= 0x01;
        if let Ok(tampered) = Signature::from_bytes(&bytes) {
            assert!(!pub_key.verify(&digest, &tampered));
        }
    }

    #[test]
    fn test_verify_rejects_high_s() {
        let priv_key = PrivateKey::new();
        let digest = sha256(b"malleable");
        let sig = priv_key.sign(&digest).unwrap();
        let (r, s) = sig.inner.split_scalars();
        let high = Signature::from_k256(ecdsa::Signature::from_scalars(r, -s).unwrap());
        assert!(!high.is_low_s());
        assert!(!priv_key.pub_key().verify(&digest, &high));
    }

    #[test]
    fn test_recover_public_key() {
        for _ in 0..10 {
            let priv_key = PrivateKey::new();
            let digest = sha256(b"test data for recoverable signature");

            let ext = priv_key.sign_recoverable(&digest).unwrap();
            let bytes = ext.to_bytes();
            assert_eq!(bytes.len(), EXTENDED_SIGNATURE_LEN);

            let parsed = ExtendedSignature::from_bytes(&bytes).unwrap();
            let recovered = parsed.recover_public_key(&digest).unwrap();
            assert_eq!(recovered, priv_key.pub_key());
        }
    }

    #[test]
    fn test_from_bytes_rejects_out_of_range() {
        assert!(matches!(
            Signature::from_bytes(&[1u8; 63]),
            Err(PrimitivesError::InvalidKeyLength { expected: 64, got: 63 })
        ));
        assert!(Signature::from_bytes(&[0u8; 64]).is_err());

        let mut n_as_r = [1u8; 64];
        n_as_r[..32].copy_from_slice(&hex_to_32(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        ));
        assert!(Signature::from_bytes(&n_as_r).is_err());
        assert!(Signature::new([0u8; 32], [1u8; 32]).is_err());

        let sig = Signature::new([1u8; 32], [1u8; 32]).unwrap();
        assert!(ExtendedSignature::new(sig, 4).is_err());
    }

    fn hex_to_32(s: &str) -> [u8; 32] {
        let bytes = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }
}
