//! # cosm-proto
//!
//! Protobuf message types for the Cosmos SDK modules the client speaks,
//! and the type-URL [`Registry`] that encodes and decodes them.
//!
//! Message structs are plain `prost` types. Each one implements
//! [`GeneratedType`], which pins its fully-qualified type URL, so the
//! registry can be an explicit map from URL to a pair of encode/decode
//! functions with no runtime reflection.
//!
//! # Example
//!
//! ```
//! use cosm_proto::cosmos::bank::MsgSend;
//! use cosm_proto::cosmos::base::Coin;
//! use cosm_proto::{EncodeObject, Registry};
//!
//! let registry = Registry::default();
//! let msg = EncodeObject::new(MsgSend {
//!     from_address: "cosmos1from".to_string(),
//!     to_address: "cosmos1to".to_string(),
//!     amount: vec![Coin::new("uatom", "1000")],
//! });
//! let bytes = registry.encode(&msg).unwrap();
//! let decoded = registry.decode_as::<MsgSend>(&msg.type_url, &bytes).unwrap();
//! assert_eq!(decoded.amount[0].denom, "uatom");
//! ```

pub mod any;
pub mod cosmos;
pub mod error;
pub mod registry;

pub use any::Any;
pub use error::RegistryError;
pub use registry::{DynMessage, EncodeObject, GeneratedType, Registry, RegistryBuilder, TypeEntry};
