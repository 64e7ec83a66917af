//! The signer interface transaction builders depend on.

use cosm_proto::cosmos::tx::SignDoc;

use crate::error::WalletError;
use crate::types::{AccountData, DirectSignResponse};

/// A signer that holds keys locally and signs `SIGN_MODE_DIRECT` documents.
///
/// Implementations never touch the network. Anything that can list accounts
/// and sign a [`SignDoc`] for one of them (an in-memory HD wallet, a hardware
/// device bridge, a test double) can sit behind this trait.
pub trait OfflineDirectSigner: Send + Sync {
    /// Every account this signer can sign for.
    fn get_accounts(&self) -> Vec<AccountData>;

    /// Sign `sign_doc` with the account at `signer_address`.
    ///
    /// # Returns
    /// `AddressNotFound` if the signer holds no such account.
    fn sign_direct(&self, signer_address: &str, sign_doc: &SignDoc) -> Result<DirectSignResponse, WalletError>;
}
