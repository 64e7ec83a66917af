//! `cosmos.auth.v1beta1.Query`.

use std::sync::Arc;

use cosm_proto::cosmos::auth::{BaseAccount, QueryAccountRequest, QueryAccountResponse};
use cosm_proto::{DynMessage, Registry};

use crate::client::QueryClientBase;
use crate::error::QueryError;
use crate::namespace::Namespace;
use crate::rpc::ProtobufRpcClient;

/// Service name used to build method paths.
pub const SERVICE: &str = "cosmos.auth.v1beta1.Query";

/// One method per auth query RPC.
#[derive(Debug, Clone)]
pub struct AuthQueryClientImpl {
    rpc: ProtobufRpcClient,
}

impl AuthQueryClientImpl {
    /// Wrap `rpc`.
    pub fn new(rpc: ProtobufRpcClient) -> Self {
        Self { rpc }
    }

    /// `Account`
    pub async fn account(&self, request: &QueryAccountRequest) -> Result<QueryAccountResponse, QueryError> {
        self.rpc.query(SERVICE, "Account", request).await
    }
}

/// Account queries, mounted at `auth`.
#[derive(Debug, Clone)]
pub struct AuthExtension {
    query: AuthQueryClientImpl,
    registry: Arc<Registry>,
}

impl AuthExtension {
    /// Build over a shared RPC client, decoding accounts with `registry`.
    pub fn new(rpc: ProtobufRpcClient, registry: Arc<Registry>) -> Self {
        Self {
            query: AuthQueryClientImpl::new(rpc),
            registry,
        }
    }

    /// The raw RPC stubs.
    pub fn raw(&self) -> &AuthQueryClientImpl {
        &self.query
    }

    /// The account at `address`, decoded through the registry.
    ///
    /// # Returns
    /// `None` if the response carries no account, or `Registry` if the
    /// account's type URL is not registered.
    pub async fn account(&self, address: &str) -> Result<Option<Box<dyn DynMessage>>, QueryError> {
        let response = self
            .query
            .account(&QueryAccountRequest {
                address: address.to_string(),
            })
            .await?;
        match response.account {
            Some(any) => Ok(Some(self.registry.decode_any(&any)?)),
            None => Ok(None),
        }
    }

    /// The account at `address` as a [`BaseAccount`]. Fails with `Registry`
    /// if the chain returned some other account type.
    pub async fn base_account(&self, address: &str) -> Result<Option<BaseAccount>, QueryError> {
        let response = self
            .query
            .account(&QueryAccountRequest {
                address: address.to_string(),
            })
            .await?;
        match response.account {
            Some(any) => Ok(Some(
                self.registry
                    .decode_as::<BaseAccount>(&any.type_url, &any.value)?,
            )),
            None => Ok(None),
        }
    }
}

/// Factory for [`AuthExtension`] at `auth`.
pub fn setup_auth_extension(base: &QueryClientBase) -> Namespace {
    Namespace::leaf(
        "auth",
        AuthExtension::new(base.rpc().clone(), base.registry().clone()),
    )
}
