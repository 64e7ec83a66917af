//! `cosmos.tx.v1beta1`: transaction envelope and sign documents.

use super::base::Coin;
use crate::any::Any;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SignMode {
    Unspecified = 0,
    Direct = 1,
    Textual = 2,
    DirectAux = 3,
    LegacyAminoJson = 127,
}

/// The messages and metadata a transaction carries.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: String,
    /// Block height after which the tx is no longer valid; 0 disables.
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
}

/// Signer metadata and fee. Signed over, so it cannot be malleated.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct AuthInfo {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct SignerInfo {
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<Any>,
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfo>,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ModeInfo {
    #[prost(oneof = "mode_info::Sum", tags = "1")]
    pub sum: Option<mode_info::Sum>,
}

pub mod mode_info {
    /// A single signer using one sign mode.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Single {
        #[prost(enumeration = "super::SignMode", tag = "1")]
        pub mode: i32,
    }

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Single(Single),
    }
}

impl ModeInfo {
    /// Mode info for one signer in `mode`.
    pub fn single(mode: SignMode) -> Self {
        ModeInfo {
            sum: Some(mode_info::Sum::Single(mode_info::Single { mode: mode as i32 })),
        }
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Fee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

/// What a `SIGN_MODE_DIRECT` signer signs: SHA-256 of this message's encoding.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct SignDoc {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
}

/// The broadcast form: body and auth info as the exact signed bytes.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TxRaw {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

type_url! {
    TxBody => "/cosmos.tx.v1beta1.TxBody",
    AuthInfo => "/cosmos.tx.v1beta1.AuthInfo",
    SignerInfo => "/cosmos.tx.v1beta1.SignerInfo",
    ModeInfo => "/cosmos.tx.v1beta1.ModeInfo",
    Fee => "/cosmos.tx.v1beta1.Fee",
    SignDoc => "/cosmos.tx.v1beta1.SignDoc",
    TxRaw => "/cosmos.tx.v1beta1.TxRaw",
}
