//! Bech32 account addresses.
//!
//! An address is the bech32 encoding of a 20-byte account id. For secp256k1
//! keys the id is RIPEMD-160(SHA-256(compressed key)); for Ed25519 it is the
//! first 20 bytes of SHA-256(key).

use bech32::{Bech32, Hrp};
use cosm_primitives::hash::{hash160, sha256};
use cosm_primitives::KeypairPublicKey;

use crate::error::WalletError;

/// Length of an account id.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Encode `data` under `prefix`.
///
/// # Arguments
/// * `prefix` - Human-readable part, e.g. `cosmos`.
/// * `data` - Raw bytes, usually a 20-byte account id.
pub fn to_bech32(prefix: &str, data: &[u8]) -> Result<String, WalletError> {
    let hrp = Hrp::parse(prefix).map_err(|e| WalletError::Bech32(format!("invalid prefix {}: {}", prefix, e)))?;
    bech32::encode::<Bech32>(hrp, data).map_err(|e| WalletError::Bech32(e.to_string()))
}

/// Decode an address into its prefix and data bytes.
pub fn from_bech32(address: &str) -> Result<(String, Vec<u8>), WalletError> {
    let (hrp, data) = bech32::decode(address).map_err(|e| WalletError::Bech32(e.to_string()))?;
    Ok((hrp.to_lowercase(), data))
}

/// Account id of a compressed secp256k1 public key.
pub fn secp256k1_account_id(compressed: &[u8]) -> [u8; ACCOUNT_ID_LEN] {
    hash160(compressed)
}

/// Account id of an Ed25519 public key.
pub fn ed25519_account_id(key: &[u8]) -> [u8; ACCOUNT_ID_LEN] {
    let digest = sha256(key);
    let mut id = [0u8; ACCOUNT_ID_LEN];
    id.copy_from_slice(&digest[..ACCOUNT_ID_LEN]);
    id
}

/// Account id for a public key on either curve.
pub fn account_id(pubkey: &KeypairPublicKey) -> [u8; ACCOUNT_ID_LEN] {
    match pubkey {
        KeypairPublicKey::Secp256k1(key) => secp256k1_account_id(&key.to_compressed()),
        KeypairPublicKey::Ed25519(key) => ed25519_account_id(&key.to_bytes()),
    }
}

/// Bech32 address of `pubkey` under `prefix`.
pub fn pubkey_to_address(pubkey: &KeypairPublicKey, prefix: &str) -> Result<String, WalletError> {
    to_bech32(prefix, &account_id(pubkey))
}

/// Re-encode an address under a different prefix, e.g. `cosmos` to `osmo`.
pub fn convert_prefix(address: &str, prefix: &str) -> Result<String, WalletError> {
    let (_, data) = from_bech32(address)?;
    to_bech32(prefix, &data)
}
