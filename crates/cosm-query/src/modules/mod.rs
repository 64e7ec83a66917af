//! Built-in extensions for the standard Cosmos SDK modules.
//!
//! Each module has two layers: a `*QueryClientImpl` that maps one Rust
//! method to one gRPC query method, and an extension type that wraps it with
//! the conveniences applications actually call. `setup_*_extension`
//! functions are the factories passed to
//! [`QueryClientBuilder::with_extension`](crate::QueryClientBuilder::with_extension).

pub mod auth;
pub mod bank;
pub mod staking;
