//! A mnemonic-backed HD wallet.

use std::fmt;

use cosm_primitives::bip39::{Mnemonic, WordCount};
use cosm_primitives::slip10::{derive_path, HdPath};
use cosm_primitives::{backend, Curve, Keypair};
use cosm_proto::cosmos::tx::SignDoc;

use crate::address::pubkey_to_address;
use crate::amino::encode_signature;
use crate::error::WalletError;
use crate::signing::make_sign_bytes;
use crate::types::{AccountData, DirectSignResponse, HdWalletOptions};
use crate::wallet_trait::OfflineDirectSigner;

struct Account {
    hd_path: HdPath,
    keypair: Keypair,
    address: String,
}

/// Accounts derived from one mnemonic, each at its own HD path.
pub struct HdWallet {
    mnemonic: Mnemonic,
    prefix: String,
    curve: Curve,
    accounts: Vec<Account>,
}

impl HdWallet {
    /// Restore a wallet from a mnemonic phrase.
    ///
    /// Waits for the crypto backend to finish its self-tests before touching
    /// any key material.
    ///
    /// # Arguments
    /// * `phrase` - Space-separated BIP-39 words.
    /// * `options` - Passphrase, HD paths, address prefix and curve.
    ///
    /// # Returns
    /// The wallet, or an error if the phrase fails validation, a path cannot
    /// be derived, or the options are unusable.
    pub async fn from_mnemonic(phrase: &str, options: HdWalletOptions) -> Result<Self, WalletError> {
        backend::ready().await?;
        let mnemonic = Mnemonic::from_phrase(phrase)?;
        Self::from_parsed(mnemonic, options)
    }

    /// Create a wallet from a freshly generated mnemonic.
    pub async fn generate(word_count: WordCount, options: HdWalletOptions) -> Result<Self, WalletError> {
        backend::ready().await?;
        Self::from_parsed(Mnemonic::generate(word_count), options)
    }

    fn from_parsed(mnemonic: Mnemonic, options: HdWalletOptions) -> Result<Self, WalletError> {
        if options.hd_paths.is_empty() {
            return Err(WalletError::InvalidOptions("at least one HD path is required".to_string()));
        }

        let seed = mnemonic.to_seed(Some(options.bip39_password.as_str()));
        let accounts = options
            .hd_paths
            .into_iter()
            .map(|hd_path| {
                let keypair = derive_path(seed.as_bytes(), options.curve, &hd_path)?.to_keypair()?;
                let address = pubkey_to_address(&keypair.public_key(), &options.prefix)?;
                Ok(Account {
                    hd_path,
                    keypair,
                    address,
                })
            })
            .collect::<Result<Vec<_>, WalletError>>()?;

        tracing::debug!(
            accounts = accounts.len(),
            curve = %options.curve,
            prefix = %options.prefix,
            "hd wallet ready"
        );

        Ok(Self {
            mnemonic,
            prefix: options.prefix,
            curve: options.curve,
            accounts,
        })
    }

    /// The mnemonic phrase. Treat as a secret.
    pub fn mnemonic(&self) -> &str {
        self.mnemonic.phrase()
    }

    /// Bech32 prefix of every address.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// HD path of the account at `address`.
    pub fn hd_path(&self, address: &str) -> Option<&HdPath> {
        self.find(address).ok().map(|account| &account.hd_path)
    }

    fn find(&self, address: &str) -> Result<&Account, WalletError> {
        self.accounts
            .iter()
            .find(|account| account.address == address)
            .ok_or_else(|| WalletError::AddressNotFound(address.to_string()))
    }
}

impl OfflineDirectSigner for HdWallet {
    fn get_accounts(&self) -> Vec<AccountData> {
        self.accounts
            .iter()
            .map(|account| AccountData {
                address: account.address.clone(),
                algo: account.keypair.curve(),
                pubkey: account.keypair.public_key(),
            })
            .collect()
    }

    fn sign_direct(&self, signer_address: &str, sign_doc: &SignDoc) -> Result<DirectSignResponse, WalletError> {
        let account = self.find(signer_address)?;
        let signature = account.keypair.sign(&make_sign_bytes(sign_doc))?;
        tracing::debug!(
            signer = %signer_address,
            chain_id = %sign_doc.chain_id,
            account_number = sign_doc.account_number,
            "signed sign doc"
        );
        Ok(DirectSignResponse {
            signed: sign_doc.clone(),
            signature: encode_signature(&account.keypair.public_key(), &signature),
        })
    }
}

impl fmt::Debug for HdWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addresses: Vec<&str> = self.accounts.iter().map(|a| a.address.as_str()).collect();
        f.debug_struct("HdWallet")
            .field("prefix", &self.prefix)
            .field("curve", &self.curve)
            .field("accounts", &addresses)
            .finish_non_exhaustive()
    }
}
