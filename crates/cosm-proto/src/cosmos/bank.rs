//! `cosmos.bank.v1beta1`: transfers and balance queries.

use super::base::{Coin, PageRequest, PageResponse};

/// Send coins from one account to another.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

/// One side of a multi-send.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Input {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

/// One side of a multi-send.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Output {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

/// Move coins from many inputs to many outputs. Inputs and outputs must balance.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgMultiSend {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<Input>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<Output>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryBalanceRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub denom: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: Option<Coin>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryAllBalancesRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryAllBalancesResponse {
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryTotalSupplyRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryTotalSupplyResponse {
    #[prost(message, repeated, tag = "1")]
    pub supply: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QuerySupplyOfRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QuerySupplyOfResponse {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Coin>,
}

type_url! {
    MsgSend => "/cosmos.bank.v1beta1.MsgSend",
    MsgMultiSend => "/cosmos.bank.v1beta1.MsgMultiSend",
    Input => "/cosmos.bank.v1beta1.Input",
    Output => "/cosmos.bank.v1beta1.Output",
    QueryBalanceRequest => "/cosmos.bank.v1beta1.QueryBalanceRequest",
    QueryBalanceResponse => "/cosmos.bank.v1beta1.QueryBalanceResponse",
    QueryAllBalancesRequest => "/cosmos.bank.v1beta1.QueryAllBalancesRequest",
    QueryAllBalancesResponse => "/cosmos.bank.v1beta1.QueryAllBalancesResponse",
    QueryTotalSupplyRequest => "/cosmos.bank.v1beta1.QueryTotalSupplyRequest",
    QueryTotalSupplyResponse => "/cosmos.bank.v1beta1.QueryTotalSupplyResponse",
    QuerySupplyOfRequest => "/cosmos.bank.v1beta1.QuerySupplyOfRequest",
    QuerySupplyOfResponse => "/cosmos.bank.v1beta1.QuerySupplyOfResponse",
}
