//! Protobuf RPC client: method-path building, timeouts and typed calls.

use std::sync::Arc;
use std::time::Duration;

use crate::error::QueryError;
use crate::transport::Transport;

/// Thin wrapper over a [`Transport`] used by generated query stubs.
///
/// Cheap to clone; every clone shares the same transport.
#[derive(Clone)]
pub struct ProtobufRpcClient {
    /// Shared transport.
    transport: Arc<dyn Transport>,
    /// Per-call timeout.
    timeout: Option<Duration>,
}

impl ProtobufRpcClient {
    /// Create a client over `transport` with the given timeout.
    pub fn new(transport: Arc<dyn Transport>, timeout: Option<Duration>) -> Self {
        Self { transport, timeout }
    }

    /// The per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Send raw request bytes to `/{service}/{method}`.
    ///
    /// # Arguments
    /// * `service` - Fully-qualified service, e.g. `cosmos.bank.v1beta1.Query`.
    /// * `method` - Method name, e.g. `Balance`.
    /// * `data` - Protobuf-encoded request.
    ///
    /// # Returns
    /// The raw response bytes, `Timeout` if the call outlives the configured
    /// timeout, or `Transport` wrapping the transport's failure.
    pub async fn request(
        &self,
        service: &str,
        method: &str,
        data: Vec<u8>,
    ) -> Result<Vec<u8>, QueryError> {
        let path = format!("/{}/{}", service, method);
        tracing::debug!(method = %path, request_len = data.len(), "rpc request");

        let call = self.transport.call(&path, data);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| QueryError::Timeout {
                    method: path.clone(),
                })?,
            None => call.await,
        };

        let response = result.map_err(|source| QueryError::Transport {
            method: path.clone(),
            source,
        })?;
        tracing::debug!(method = %path, response_len = response.len(), "rpc response");
        Ok(response)
    }

    /// Encode `request`, send it, and decode the response as `Resp`.
    pub async fn query<Req, Resp>(
        &self,
        service: &str,
        method: &str,
        request: &Req,
    ) -> Result<Resp, QueryError>
    where
        Req: prost::Message,
        Resp: prost::Message + Default,
    {
        let bytes = self.request(service, method, request.encode_to_vec()).await?;
        Resp::decode(bytes.as_slice()).map_err(|source| QueryError::Decode {
            method: format!("/{}/{}", service, method),
            source,
        })
    }
}

impl std::fmt::Debug for ProtobufRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtobufRpcClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
