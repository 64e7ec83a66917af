//! `cosmos.distribution.v1beta1`: staking rewards.

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
}

/// Redirect future reward withdrawals to another address.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub withdraw_address: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MsgWithdrawValidatorCommission {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

type_url! {
    MsgWithdrawDelegatorReward => "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
    MsgSetWithdrawAddress => "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
    MsgWithdrawValidatorCommission => "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
}
