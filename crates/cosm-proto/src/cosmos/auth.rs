//! `cosmos.auth.v1beta1`: accounts.

use crate::any::Any;

/// The default account type: address, optional public key and replay counters.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct BaseAccount {
    #[prost(string, tag = "1")]
    pub address: String,
    /// Unset until the account has signed its first transaction.
    #[prost(message, optional, tag = "2")]
    pub pub_key: Option<Any>,
    #[prost(uint64, tag = "3")]
    pub account_number: u64,
    #[prost(uint64, tag = "4")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryAccountRequest {
    #[prost(string, tag = "1")]
    pub address: String,
}

/// The account comes back packed in an `Any`; its concrete type varies by chain.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: Option<Any>,
}

type_url! {
    BaseAccount => "/cosmos.auth.v1beta1.BaseAccount",
    QueryAccountRequest => "/cosmos.auth.v1beta1.QueryAccountRequest",
    QueryAccountResponse => "/cosmos.auth.v1beta1.QueryAccountResponse",
}
