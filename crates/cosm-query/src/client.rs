//! Query client assembly.

use std::sync::Arc;

use cosm_proto::Registry;

use crate::error::QueryError;
use crate::namespace::{Namespace, NamespaceTree};
use crate::rpc::ProtobufRpcClient;
use crate::transport::Transport;
use crate::types::QueryClientConfig;

type ExtensionFactory = Box<dyn FnOnce(&QueryClientBase) -> Namespace + Send>;

/// What every extension factory receives: the RPC client and the shared
/// type registry.
#[derive(Debug, Clone)]
pub struct QueryClientBase {
    rpc: ProtobufRpcClient,
    registry: Arc<Registry>,
}

impl QueryClientBase {
    /// The shared RPC client.
    pub fn rpc(&self) -> &ProtobufRpcClient {
        &self.rpc
    }

    /// The shared type registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

/// Builder for a [`QueryClient`].
pub struct QueryClientBuilder {
    transport: Arc<dyn Transport>,
    config: QueryClientConfig,
    registry: Option<Arc<Registry>>,
    factories: Vec<ExtensionFactory>,
}

impl QueryClientBuilder {
    /// Override the client configuration.
    pub fn config(mut self, config: QueryClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `registry` for decoding `Any` payloads instead of the default one.
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Add an extension factory. Factories run in the order they were added.
    pub fn with_extension<F>(mut self, factory: F) -> Self
    where
        F: FnOnce(&QueryClientBase) -> Namespace + Send + 'static,
    {
        self.factories.push(Box::new(factory));
        self
    }

    /// Run every factory and merge their namespaces.
    ///
    /// # Returns
    /// The assembled client, or `ExtensionNamespaceCollision` if any two
    /// extensions claim the same path.
    pub fn build(self) -> Result<QueryClient, QueryError> {
        let base = QueryClientBase {
            rpc: ProtobufRpcClient::new(self.transport, self.config.timeout),
            registry: self.registry.unwrap_or_default(),
        };

        let mut extensions = NamespaceTree::new();
        for factory in self.factories {
            let namespace = factory(&base);
            tracing::debug!(paths = ?namespace, "merging query extension");
            if let Err(err) = extensions.merge(namespace) {
                tracing::warn!(error = %err, "query client construction failed");
                return Err(err);
            }
        }

        tracing::debug!(extensions = ?extensions, "query client ready");
        Ok(QueryClient { base, extensions })
    }
}

/// An async query client with its extensions attached.
#[derive(Debug)]
pub struct QueryClient {
    base: QueryClientBase,
    extensions: NamespaceTree,
}

impl QueryClient {
    /// Start building a client over `transport` with the default config.
    pub fn builder<T: Transport + 'static>(transport: T) -> QueryClientBuilder {
        Self::builder_with(Arc::new(transport))
    }

    /// Start building a client over an already shared transport.
    pub fn builder_with(transport: Arc<dyn Transport>) -> QueryClientBuilder {
        QueryClientBuilder {
            transport,
            config: QueryClientConfig::default(),
            registry: None,
            factories: Vec::new(),
        }
    }

    /// The extension registered at `path`, downcast to `T`.
    ///
    /// # Arguments
    /// * `path` - Dotted path, e.g. `"bank"` or `"ibc.transfer"`.
    ///
    /// # Returns
    /// `NamespaceNotFound` if nothing lives at `path`, or
    /// `NamespaceTypeMismatch` if the value there is not a `T`.
    pub fn extension<T: 'static>(&self, path: &str) -> Result<&T, QueryError> {
        self.extensions.get(path)
    }

    /// True when an extension value lives at `path`.
    pub fn has_extension(&self, path: &str) -> bool {
        self.extensions.contains(path)
    }

    /// Every extension path, sorted.
    pub fn extension_paths(&self) -> Vec<String> {
        self.extensions.paths()
    }

    /// The base shared with extensions.
    pub fn base(&self) -> &QueryClientBase {
        &self.base
    }

    /// The RPC client, for calls no extension covers.
    pub fn rpc(&self) -> &ProtobufRpcClient {
        &self.base.rpc
    }

    /// The type registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.base.registry
    }
}
