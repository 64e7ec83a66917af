#![deny(missing_docs)]

//! # cosm-query
//!
//! Async query client for a Cosmos node, composed from extensions.
//!
//! The client core knows only how to send a protobuf request to a method
//! path over a [`Transport`]. Module-specific queries (bank, auth, staking,
//! or anything an application adds) are contributed by extension factories
//! that each return a [`Namespace`] of values. Namespaces are merged when
//! the client is built; two extensions claiming the same path is a
//! construction error, never a silent overwrite.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo(transport: impl cosm_query::Transport + 'static) -> Result<(), cosm_query::QueryError> {
//! use cosm_query::modules::bank::{setup_bank_extension, BankExtension};
//! use cosm_query::QueryClient;
//!
//! let client = QueryClient::builder(transport)
//!     .with_extension(setup_bank_extension)
//!     .build()?;
//!
//! let bank = client.extension::<BankExtension>("bank")?;
//! let coin = bank.balance("cosmos1...", "uatom").await?;
//! println!("{} {}", coin.amount, coin.denom);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod modules;
pub mod namespace;
pub mod rpc;
pub mod transport;
pub mod types;


pub use client::{QueryClient, QueryClientBase, QueryClientBuilder};
pub use error::{QueryError, TransportError};
pub use namespace::Namespace;
pub use rpc::ProtobufRpcClient;
pub use transport::Transport;
pub use types::QueryClientConfig;
