#![deny(missing_docs)]

//! cosm SDK - Complete SDK.
//!
//! Re-exports all cosm SDK components for convenient single-crate usage,
//! plus [`logging`] for applications that want a ready-made subscriber.

pub use cosm_primitives as primitives;
pub use cosm_proto as proto;
pub use cosm_query as query;
pub use cosm_wallet as wallet;

pub mod logging;
