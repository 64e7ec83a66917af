//! `cosmos.gov.v1beta1`: voting and deposits.

use super::base::Coin;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    Unspecified = 0,
    Yes = 1,
    Abstain = 2,
    No = 3,
    NoWithVeto = 4,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgVote {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(enumeration = "VoteOption", tag = "3")]
    pub option: i32,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgDeposit {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

type_url! {
    MsgVote => "/cosmos.gov.v1beta1.MsgVote",
    MsgDeposit => "/cosmos.gov.v1beta1.MsgDeposit",
}
