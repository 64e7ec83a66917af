/// Unified error type for all primitives operations.
///
/// Covers errors from mnemonic encoding, HD derivation, key parsing and signatures.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid entropy length: {0} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength(usize),

    #[error("invalid mnemonic word count: {0}")]
    InvalidWordCount(usize),

    #[error("unknown mnemonic word: {0}")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid derived key at {0}")]
    InvalidDerivedKey(String),

    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("cannot derive hardened child {0:#010x} from a public key")]
    HardenedPublicDerivation(u32),

    #[error("invalid seed length: {0} bytes")]
    InvalidSeedLength(usize),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("crypto backend self-test failed: {0}")]
    BackendSelfTest(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
