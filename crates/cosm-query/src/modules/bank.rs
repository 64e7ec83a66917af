//! `cosmos.bank.v1beta1.Query`.

use std::collections::HashSet;

use cosm_proto::cosmos::bank::{
    QueryAllBalancesRequest, QueryAllBalancesResponse, QueryBalanceRequest, QueryBalanceResponse,
    QuerySupplyOfRequest, QuerySupplyOfResponse, QueryTotalSupplyRequest, QueryTotalSupplyResponse,
};
use cosm_proto::cosmos::base::{Coin, PageRequest, PageResponse};

use crate::client::QueryClientBase;
use crate::error::QueryError;
use crate::namespace::Namespace;
use crate::rpc::ProtobufRpcClient;

/// Service name used to build method paths.
pub const SERVICE: &str = "cosmos.bank.v1beta1.Query";

/// Tracks `next_key`s across a paginated query so a node that hands back a
/// key twice ends the walk with an error.
#[derive(Default)]
struct PageCursor {
    seen: HashSet<Vec<u8>>,
}

impl PageCursor {
    /// The request for the page after `page`, or `None` on the last page.
    fn advance(&mut self, method: &str, page: Option<PageResponse>) -> Result<Option<PageRequest>, QueryError> {
        let next_key = match page {
            Some(page) if !page.next_key.is_empty() => page.next_key,
            _ => return Ok(None),
        };
        if !self.seen.insert(next_key.clone()) {
            tracing::warn!(method, "node repeated a pagination key");
            return Err(QueryError::PaginationLoop {
                method: format!("/{}/{}", SERVICE, method),
            });
        }
        Ok(Some(PageRequest::next(next_key)))
    }
}

/// One method per bank query RPC.
#[derive(Debug, Clone)]
pub struct BankQueryClientImpl {
    rpc: ProtobufRpcClient,
}

impl BankQueryClientImpl {
    /// Wrap `rpc`.
    pub fn new(rpc: ProtobufRpcClient) -> Self {
        Self { rpc }
    }

    /// `Balance`
    pub async fn balance(&self, request: &QueryBalanceRequest) -> Result<QueryBalanceResponse, QueryError> {
        self.rpc.query(SERVICE, "Balance", request).await
    }

    /// `AllBalances`
    pub async fn all_balances(
        &self,
        request: &QueryAllBalancesRequest,
    ) -> Result<QueryAllBalancesResponse, QueryError> {
        self.rpc.query(SERVICE, "AllBalances", request).await
    }

    /// `TotalSupply`
    pub async fn total_supply(
        &self,
        request: &QueryTotalSupplyRequest,
    ) -> Result<QueryTotalSupplyResponse, QueryError> {
        self.rpc.query(SERVICE, "TotalSupply", request).await
    }

    /// `SupplyOf`
    pub async fn supply_of(&self, request: &QuerySupplyOfRequest) -> Result<QuerySupplyOfResponse, QueryError> {
        self.rpc.query(SERVICE, "SupplyOf", request).await
    }
}

/// Bank queries, mounted at `bank`.
#[derive(Debug, Clone)]
pub struct BankExtension {
    query: BankQueryClientImpl,
}

impl BankExtension {
    /// Build over a shared RPC client.
    pub fn new(rpc: ProtobufRpcClient) -> Self {
        Self {
            query: BankQueryClientImpl::new(rpc),
        }
    }

    /// The raw RPC stubs.
    pub fn raw(&self) -> &BankQueryClientImpl {
        &self.query
    }

    /// Balance of `denom` held by `address`. An account the node has never
    /// seen has a zero balance.
    pub async fn balance(&self, address: &str, denom: &str) -> Result<Coin, QueryError> {
        let response = self
            .query
            .balance(&QueryBalanceRequest {
                address: address.to_string(),
                denom: denom.to_string(),
            })
            .await?;
        Ok(response.balance.unwrap_or_else(|| Coin::new(denom, "0")))
    }

    /// Every balance of `address`, following pagination to the end.
    ///
    /// Fails with `PaginationLoop` if the node repeats a page key.
    pub async fn all_balances(&self, address: &str) -> Result<Vec<Coin>, QueryError> {
        let mut balances = Vec::new();
        let mut cursor = PageCursor::default();
        let mut pagination = None;
        loop {
            let response = self
                .query
                .all_balances(&QueryAllBalancesRequest {
                    address: address.to_string(),
                    pagination,
                })
                .await?;
            balances.extend(response.balances);
            pagination = cursor.advance("AllBalances", response.pagination)?;
            if pagination.is_none() {
                return Ok(balances);
            }
        }
    }

    /// Total supply of every denomination, following pagination to the end.
    pub async fn total_supply(&self) -> Result<Vec<Coin>, QueryError> {
        let mut supply = Vec::new();
        let mut cursor = PageCursor::default();
        let mut pagination = None;
        loop {
            let response = self
                .query
                .total_supply(&QueryTotalSupplyRequest { pagination })
                .await?;
            supply.extend(response.supply);
            pagination = cursor.advance("TotalSupply", response.pagination)?;
            if pagination.is_none() {
                return Ok(supply);
            }
        }
    }

    /// Total supply of a single denomination.
    pub async fn supply_of(&self, denom: &str) -> Result<Coin, QueryError> {
        let response = self
            .query
            .supply_of(&QuerySupplyOfRequest {
                denom: denom.to_string(),
            })
            .await?;
        Ok(response.amount.unwrap_or_else(|| Coin::new(denom, "0")))
    }
}

/// Factory for [`BankExtension`] at `bank`.
pub fn setup_bank_extension(base: &QueryClientBase) -> Namespace {
    Namespace::leaf("bank", BankExtension::new(base.rpc().clone()))
}
