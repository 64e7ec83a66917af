//! Public key envelopes, `cosmos.crypto.*`.

pub mod secp256k1 {
    /// A 33-byte compressed secp256k1 public key.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct PubKey {
        #[prost(bytes = "vec", tag = "1")]
        pub key: Vec<u8>,
    }

    type_url! {
        PubKey => "/cosmos.crypto.secp256k1.PubKey",
    }
}

pub mod ed25519 {
    /// A 32-byte Ed25519 public key.
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct PubKey {
        #[prost(bytes = "vec", tag = "1")]
        pub key: Vec<u8>,
    }

    type_url! {
        PubKey => "/cosmos.crypto.ed25519.PubKey",
    }
}
