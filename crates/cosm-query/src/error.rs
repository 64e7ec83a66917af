//! Error types for query operations.

use cosm_proto::RegistryError;

/// Failures reported by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The node answered with a non-zero ABCI code.
    #[error("query failed with code {code}: {log}")]
    Status {
        /// ABCI response code.
        code: u32,
        /// Node-supplied log message.
        log: String,
    },

    /// The connection to the node failed.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Errors that can occur when building or using a query client.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The transport failed to complete the call.
    #[error("{method}: {source}")]
    Transport {
        /// Full method path, e.g. `/cosmos.bank.v1beta1.Query/Balance`.
        method: String,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The call did not complete within the configured timeout.
    #[error("{method}: request timed out")]
    Timeout {
        /// Full method path.
        method: String,
    },

    /// The response bytes did not decode as the expected message.
    #[error("{method}: failed to decode response: {source}")]
    Decode {
        /// Full method path.
        method: String,
        /// The protobuf decode failure.
        #[source]
        source: prost::DecodeError,
    },

    /// A paginated query returned a `next_key` it had already returned.
    #[error("{method}: pagination repeated a page key")]
    PaginationLoop {
        /// Full method path.
        method: String,
    },

    /// Two extensions claimed the same namespace path.
    #[error("extension namespace collision at '{path}'")]
    ExtensionNamespaceCollision {
        /// The contested dotted path.
        path: String,
    },

    /// A namespace path was empty or had an empty segment.
    #[error("invalid namespace path '{0}'")]
    InvalidNamespacePath(String),

    /// No extension is registered at the path.
    #[error("no extension at '{0}'")]
    NamespaceNotFound(String),

    /// The extension at the path is not of the requested type.
    #[error("extension at '{path}' is not a {expected}")]
    NamespaceTypeMismatch {
        /// The dotted path looked up.
        path: String,
        /// Rust type name the caller asked for.
        expected: &'static str,
    },

    /// A registry lookup or codec failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
