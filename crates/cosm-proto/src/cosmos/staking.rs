//! `cosmos.staking.v1beta1`: delegation messages and validator queries.

use super::base::Coin;
use crate::any::Any;

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgUndelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

/// Move a delegation between validators without unbonding.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    #[prost(message, optional, tag = "4")]
    pub amount: Option<Coin>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondStatus {
    Unspecified = 0,
    Unbonded = 1,
    Unbonding = 2,
    Bonded = 3,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Description {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(string, tag = "2")]
    pub identity: String,
    #[prost(string, tag = "3")]
    pub website: String,
    #[prost(string, tag = "4")]
    pub security_contact: String,
    #[prost(string, tag = "5")]
    pub details: String,
}

/// A validator as returned by the staking module. Commission and unbonding
/// time are not decoded.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Validator {
    #[prost(string, tag = "1")]
    pub operator_address: String,
    #[prost(message, optional, tag = "2")]
    pub consensus_pubkey: Option<Any>,
    #[prost(bool, tag = "3")]
    pub jailed: bool,
    #[prost(enumeration = "BondStatus", tag = "4")]
    pub status: i32,
    #[prost(string, tag = "5")]
    pub tokens: String,
    #[prost(string, tag = "6")]
    pub delegator_shares: String,
    #[prost(message, optional, tag = "7")]
    pub description: Option<Description>,
    #[prost(int64, tag = "8")]
    pub unbonding_height: i64,
    #[prost(string, tag = "11")]
    pub min_self_delegation: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Delegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(string, tag = "3")]
    pub shares: String,
}

/// A delegation plus its current token balance.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub delegation: Option<Delegation>,
    #[prost(message, optional, tag = "2")]
    pub balance: Option<Coin>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryValidatorRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryValidatorResponse {
    #[prost(message, optional, tag = "1")]
    pub validator: Option<Validator>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryDelegationRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryDelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub delegation_response: Option<DelegationResponse>,
}

type_url! {
    MsgDelegate => "/cosmos.staking.v1beta1.MsgDelegate",
    MsgUndelegate => "/cosmos.staking.v1beta1.MsgUndelegate",
    MsgBeginRedelegate => "/cosmos.staking.v1beta1.MsgBeginRedelegate",
    Description => "/cosmos.staking.v1beta1.Description",
    Validator => "/cosmos.staking.v1beta1.Validator",
    Delegation => "/cosmos.staking.v1beta1.Delegation",
    DelegationResponse => "/cosmos.staking.v1beta1.DelegationResponse",
    QueryValidatorRequest => "/cosmos.staking.v1beta1.QueryValidatorRequest",
    QueryValidatorResponse => "/cosmos.staking.v1beta1.QueryValidatorResponse",
    QueryDelegationRequest => "/cosmos.staking.v1beta1.QueryDelegationRequest",
    QueryDelegationResponse => "/cosmos.staking.v1beta1.QueryDelegationResponse",
}
