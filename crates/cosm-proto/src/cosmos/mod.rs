//! Cosmos SDK message types, one module per protobuf package.
//!
//! Field tags match the upstream `.proto` definitions. Fields the client
//! never reads (timestamps, commission rates) are left out; prost skips
//! unknown fields on decode.

/// Bind a message type to its fully-qualified type URL.
macro_rules! type_url {
    ($($ty:ty => $url:literal),* $(,)?) => {
        $(
            impl $crate::registry::GeneratedType for $ty {
                const TYPE_URL: &'static str = $url;
            }
        )*
    };
}

pub mod auth;
pub mod bank;
pub mod base;
pub mod crypto;
pub mod distribution;
pub mod gov;
pub mod staking;
pub mod tx;
