//! Amino JSON encoding of public keys and signatures.
//!
//! Nodes still report keys and signatures in the legacy amino JSON shape:
//! `{"type": "tendermint/PubKeySecp256k1", "value": "<base64>"}`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cosm_primitives::{Curve, KeypairPublicKey, KeypairSignature};
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Amino type tag of a secp256k1 public key.
pub const SECP256K1_PUBKEY_TYPE: &str = "tendermint/PubKeySecp256k1";
/// Amino type tag of an Ed25519 public key.
pub const ED25519_PUBKEY_TYPE: &str = "tendermint/PubKeyEd25519";

/// A public key in amino JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AminoPubKey {
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Base64 key bytes.
    pub value: String,
}

/// A signature with its signer's public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: AminoPubKey,
    /// Base64 of the 64-byte signature.
    pub signature: String,
}

/// Wrap a public key in its amino envelope.
pub fn encode_pubkey(pubkey: &KeypairPublicKey) -> AminoPubKey {
    let type_tag = match pubkey.curve() {
        Curve::Secp256k1 => SECP256K1_PUBKEY_TYPE,
        Curve::Ed25519 => ED25519_PUBKEY_TYPE,
    };
    AminoPubKey {
        type_tag: type_tag.to_string(),
        value: BASE64.encode(pubkey.to_bytes()),
    }
}

/// Parse an amino public key back into a typed key.
pub fn decode_pubkey(amino: &AminoPubKey) -> Result<KeypairPublicKey, WalletError> {
    let curve = match amino.type_tag.as_str() {
        SECP256K1_PUBKEY_TYPE => Curve::Secp256k1,
        ED25519_PUBKEY_TYPE => Curve::Ed25519,
        other => {
            return Err(WalletError::InvalidEncoding(format!(
                "unsupported pubkey type {}",
                other
            )))
        }
    };
    let bytes = decode_base64(&amino.value)?;
    Ok(KeypairPublicKey::from_bytes(curve, &bytes)?)
}

/// Build a [`StdSignature`] from a public key and a 64-byte signature.
pub fn encode_signature(pubkey: &KeypairPublicKey, signature: &KeypairSignature) -> StdSignature {
    StdSignature {
        pub_key: encode_pubkey(pubkey),
        signature: BASE64.encode(signature.to_bytes()),
    }
}

/// Split a [`StdSignature`] into its typed key and signature.
pub fn decode_signature(
    std_signature: &StdSignature,
) -> Result<(KeypairPublicKey, KeypairSignature), WalletError> {
    let pubkey = decode_pubkey(&std_signature.pub_key)?;
    let bytes = decode_base64(&std_signature.signature)?;
    let signature = KeypairSignature::from_bytes(pubkey.curve(), &bytes)?;
    Ok((pubkey, signature))
}

impl StdSignature {
    /// Serialize to the JSON nodes expect.
    pub fn to_json(&self) -> Result<String, WalletError> {
        serde_json::to_string(self).map_err(|e| WalletError::InvalidEncoding(e.to_string()))
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::InvalidEncoding(e.to_string()))
    }
}

fn decode_base64(value: &str) -> Result<Vec<u8>, WalletError> {
    BASE64
        .decode(value)
        .map_err(|e| WalletError::InvalidEncoding(format!("base64: {}", e)))
}
