//! `cosmos.staking.v1beta1.Query`.

use cosm_proto::cosmos::staking::{
    DelegationResponse, QueryDelegationRequest, QueryDelegationResponse, QueryValidatorRequest,
    QueryValidatorResponse, Validator,
};

use crate::client::QueryClientBase;
use crate::error::QueryError;
use crate::namespace::Namespace;
use crate::rpc::ProtobufRpcClient;

/// Service name used to build method paths.
pub const SERVICE: &str = "cosmos.staking.v1beta1.Query";

/// One method per staking query RPC.
#[derive(Debug, Clone)]
pub struct StakingQueryClientImpl {
    rpc: ProtobufRpcClient,
}

impl StakingQueryClientImpl {
    /// Wrap `rpc`.
    pub fn new(rpc: ProtobufRpcClient) -> Self {
        Self { rpc }
    }

    /// `Validator`
    pub async fn validator(&self, request: &QueryValidatorRequest) -> Result<QueryValidatorResponse, QueryError> {
        self.rpc.query(SERVICE, "Validator", request).await
    }

    /// `Delegation`
    pub async fn delegation(
        &self,
        request: &QueryDelegationRequest,
    ) -> Result<QueryDelegationResponse, QueryError> {
        self.rpc.query(SERVICE, "Delegation", request).await
    }
}

/// Staking queries, mounted at `staking`.
#[derive(Debug, Clone)]
pub struct StakingExtension {
    query: StakingQueryClientImpl,
}

impl StakingExtension {
    /// Build over a shared RPC client.
    pub fn new(rpc: ProtobufRpcClient) -> Self {
        Self {
            query: StakingQueryClientImpl::new(rpc),
        }
    }

    /// The raw RPC stubs.
    pub fn raw(&self) -> &StakingQueryClientImpl {
        &self.query
    }

    /// The validator with operator address `validator_address`.
    pub async fn validator(&self, validator_address: &str) -> Result<Option<Validator>, QueryError> {
        let response = self
            .query
            .validator(&QueryValidatorRequest {
                validator_addr: validator_address.to_string(),
            })
            .await?;
        Ok(response.validator)
    }

    /// The delegation from `delegator_address` to `validator_address`.
    pub async fn delegation(
        &self,
        delegator_address: &str,
        validator_address: &str,
    ) -> Result<Option<DelegationResponse>, QueryError> {
        let response = self
            .query
            .delegation(&QueryDelegationRequest {
                delegator_addr: delegator_address.to_string(),
                validator_addr: validator_address.to_string(),
            })
            .await?;
        Ok(response.delegation_response)
    }
}

/// Factory for [`StakingExtension`] at `staking`.
pub fn setup_staking_extension(base: &QueryClientBase) -> Namespace {
    Namespace::leaf("staking", StakingExtension::new(base.rpc().clone()))
}
