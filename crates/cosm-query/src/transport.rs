//! The seam between the query client and the network.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::TransportError;

/// Sends one protobuf-encoded request to a node method and returns the
/// protobuf-encoded response.
///
/// Implementations wrap whatever carries bytes to the node (ABCI query over
/// Tendermint RPC, gRPC, gRPC-web). The client never interprets `method`
/// beyond building it as `/{service}/{method}`.
pub trait Transport: Send + Sync {
    /// Perform the call. The returned future must not borrow `method`.
    fn call(&self, method: &str, request: Vec<u8>) -> BoxFuture<'_, Result<Vec<u8>, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn call(&self, method: &str, request: Vec<u8>) -> BoxFuture<'_, Result<Vec<u8>, TransportError>> {
        (**self).call(method, request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn call(&self, method: &str, request: Vec<u8>) -> BoxFuture<'_, Result<Vec<u8>, TransportError>> {
        (**self).call(method, request)
    }
}
