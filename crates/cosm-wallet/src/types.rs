//! Wallet-facing data types and options.

use cosm_primitives::slip10::{cosmos_default_hd_path, cosmos_hd_path, HdPath};
use cosm_primitives::{Curve, KeypairPublicKey};
use cosm_proto::cosmos::tx::SignDoc;

use crate::amino::StdSignature;
use crate::error::WalletError;

/// Default bech32 prefix.
pub const DEFAULT_PREFIX: &str = "cosmos";

/// How an [`HdWallet`](crate::HdWallet) derives its accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdWalletOptions {
    /// BIP-39 passphrase ("25th word"). Empty means none.
    pub bip39_password: String,
    /// One account is derived per path, in order.
    pub hd_paths: Vec<HdPath>,
    /// Bech32 human-readable part for addresses.
    pub prefix: String,
    /// Signing curve for every account.
    pub curve: Curve,
}

impl Default for HdWalletOptions {
    fn default() -> Self {
        Self {
            bip39_password: String::new(),
            hd_paths: vec![cosmos_default_hd_path()],
            prefix: DEFAULT_PREFIX.to_string(),
            curve: Curve::Secp256k1,
        }
    }
}

impl HdWalletOptions {
    /// Options for the first `count` accounts under `m/44'/118'/0'/0/{n}`.
    ///
    /// Fails if `count` reaches past the last non-hardened index.
    pub fn with_accounts(count: u32) -> Result<Self, WalletError> {
        if let Some(last) = count.checked_sub(1) {
            cosmos_hd_path(last)?;
        }
        Ok(Self {
            hd_paths: (0..count).map(cosmos_hd_path).collect::<Result<_, _>>()?,
            ..Self::default()
        })
    }
}

/// Public view of one wallet account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    /// Bech32 address.
    pub address: String,
    /// Curve of the account key.
    pub algo: Curve,
    /// Public key; 33 bytes compressed for secp256k1, 32 for Ed25519.
    pub pubkey: KeypairPublicKey,
}

/// The result of signing a [`SignDoc`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectSignResponse {
    /// The document that was signed. Identical to the input.
    pub signed: SignDoc,
    /// Signature plus the signer's public key in amino JSON form.
    pub signature: StdSignature,
}
