//! `cosmos.base.v1beta1` and `cosmos.base.query.v1beta1`.

/// An amount of a single denomination. `amount` is a decimal integer string.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Coin {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// A decimal amount, 18 fractional digits encoded as an integer string.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DecCoin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

/// Pagination options for list queries.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

impl PageRequest {
    /// Continue from a previous response's `next_key`.
    pub fn next(key: Vec<u8>) -> Self {
        PageRequest {
            key,
            ..Default::default()
        }
    }
}

/// Pagination metadata returned by list queries.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PageResponse {
    /// Key for the next page; empty when there are no more results.
    #[prost(bytes = "vec", tag = "1")]
    pub next_key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub total: u64,
}

type_url! {
    Coin => "/cosmos.base.v1beta1.Coin",
    DecCoin => "/cosmos.base.v1beta1.DecCoin",
    PageRequest => "/cosmos.base.query.v1beta1.PageRequest",
    PageResponse => "/cosmos.base.query.v1beta1.PageResponse",
}
