/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("primitives error: {0}")]
    Primitives(#[from] cosm_primitives::PrimitivesError),
    #[error("registry error: {0}")]
    Registry(#[from] cosm_proto::RegistryError),
    #[error("address not found in wallet: {0}")]
    AddressNotFound(String),
    #[error("bech32 error: {0}")]
    Bech32(String),
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    #[error("invalid wallet options: {0}")]
    InvalidOptions(String),
}
