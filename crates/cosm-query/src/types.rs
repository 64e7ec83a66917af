//! Query client configuration.

use std::time::Duration;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`QueryClient`](crate::QueryClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryClientConfig {
    /// Upper bound on a single RPC call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}
