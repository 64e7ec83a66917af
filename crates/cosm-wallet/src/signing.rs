//! Building the pieces of a `SIGN_MODE_DIRECT` transaction.
//!
//! The flow is body bytes + auth-info bytes → [`SignDoc`] → signature →
//! [`TxRaw`]. The signer signs SHA-256 of the encoded `SignDoc` (secp256k1)
//! or the encoded bytes themselves (Ed25519).

use cosm_primitives::{Curve, KeypairPublicKey};
use cosm_proto::cosmos::base::Coin;
use cosm_proto::cosmos::crypto::{ed25519, secp256k1};
use cosm_proto::cosmos::tx::{AuthInfo, Fee, ModeInfo, SignDoc, SignMode, SignerInfo, TxRaw};
use cosm_proto::{Any, EncodeObject, GeneratedType, Registry};
use prost::Message;

use crate::error::WalletError;

/// One signer of a transaction: its public key and account sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Signer {
    pub pubkey: Any,
    pub sequence: u64,
}

/// Pack a public key in its `cosmos.crypto.*.PubKey` envelope.
pub fn encode_pubkey(pubkey: &KeypairPublicKey) -> Any {
    match pubkey.curve() {
        Curve::Secp256k1 => Any::pack(&secp256k1::PubKey {
            key: pubkey.to_bytes(),
        }),
        Curve::Ed25519 => Any::pack(&ed25519::PubKey {
            key: pubkey.to_bytes(),
        }),
    }
}

/// Unpack a public key from its `Any` envelope.
pub fn decode_pubkey(any: &Any) -> Result<KeypairPublicKey, WalletError> {
    if any.type_url == secp256k1::PubKey::TYPE_URL {
        let key = any.unpack::<secp256k1::PubKey>()?;
        Ok(KeypairPublicKey::from_bytes(Curve::Secp256k1, &key.key)?)
    } else if any.type_url == ed25519::PubKey::TYPE_URL {
        let key = any.unpack::<ed25519::PubKey>()?;
        Ok(KeypairPublicKey::from_bytes(Curve::Ed25519, &key.key)?)
    } else {
        Err(cosm_proto::RegistryError::UnknownTypeUrl(any.type_url.clone()).into())
    }
}

/// Encode `messages` and `memo` into `TxBody` bytes through `registry`.
pub fn make_body_bytes(
    registry: &Registry,
    messages: &[EncodeObject],
    memo: &str,
) -> Result<Vec<u8>, WalletError> {
    Ok(registry.encode_tx_body(messages, memo)?.encode_to_vec())
}

/// Encode an `AuthInfo` for `signers`, all signing in `sign_mode`.
///
/// # Arguments
/// * `signers` - Public key and sequence of each signer, in signing order.
/// * `fee_amount` - Coins paid as fee.
/// * `gas_limit` - Gas limit of the transaction.
/// * `fee_granter` - Account paying the fee via a fee grant, if any.
/// * `fee_payer` - Account paying the fee instead of the first signer, if any.
pub fn make_auth_info_bytes(
    signers: &[Signer],
    fee_amount: &[Coin],
    gas_limit: u64,
    fee_granter: Option<&str>,
    fee_payer: Option<&str>,
    sign_mode: SignMode,
) -> Vec<u8> {
    let auth_info = AuthInfo {
        signer_infos: signers
            .iter()
            .map(|signer| SignerInfo {
                public_key: Some(signer.pubkey.clone()),
                mode_info: Some(ModeInfo::single(sign_mode)),
                sequence: signer.sequence,
            })
            .collect(),
        fee: Some(Fee {
            amount: fee_amount.to_vec(),
            gas_limit,
            payer: fee_payer.unwrap_or_default().to_string(),
            granter: fee_granter.unwrap_or_default().to_string(),
        }),
    };
    auth_info.encode_to_vec()
}

/// Assemble a [`SignDoc`].
pub fn make_sign_doc(
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    chain_id: &str,
    account_number: u64,
) -> SignDoc {
    SignDoc {
        body_bytes,
        auth_info_bytes,
        chain_id: chain_id.to_string(),
        account_number,
    }
}

/// The exact bytes a direct signer signs over.
pub fn make_sign_bytes(sign_doc: &SignDoc) -> Vec<u8> {
    sign_doc.encode_to_vec()
}

/// Combine a signed document and its signatures into the broadcast form.
pub fn make_tx_raw(sign_doc: &SignDoc, signatures: Vec<Vec<u8>>) -> TxRaw {
    TxRaw {
        body_bytes: sign_doc.body_bytes.clone(),
        auth_info_bytes: sign_doc.auth_info_bytes.clone(),
        signatures,
    }
}
