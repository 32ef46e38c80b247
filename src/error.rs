//! Error types for the hdkey library

use thiserror::Error;

/// Custom error type for key derivation operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    #[error("Malformed derivation path: {0}")]
    MalformedPath(String),

    #[error("Hardened derivation requires a private key")]
    PrivateKeyRequired,

    #[error("Hardened derivation is not supported for public-only key material")]
    HardenedDerivationUnsupported,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid tweak: {0}")]
    InvalidTweak(String),
}

/// Result type for key derivation operations
pub type Result<T> = std::result::Result<T, Error>;
