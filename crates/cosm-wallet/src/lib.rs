//! cosm SDK - HD wallet and transaction signing.
//!
//! Turns a mnemonic into one or more accounts (keypair, bech32 address),
//! signs `SIGN_MODE_DIRECT` sign documents, and converts keys and signatures
//! to the amino JSON form nodes and explorers expect.

mod error;
pub use error::WalletError;

pub mod address;
pub mod amino;
pub mod hd_wallet;
pub mod signing;
pub mod types;
pub mod wallet_trait;

pub use hd_wallet::HdWallet;
pub use types::{AccountData, DirectSignResponse, HdWalletOptions};
pub use wallet_trait::OfflineDirectSigner;
