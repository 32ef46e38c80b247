//! BIP32 hierarchical deterministic key derivation
//!
//! This library derives trees of secp256k1 key pairs from a seed following
//! BIP32, and encodes derived public keys as legacy (P2PKH) Bitcoin
//! addresses. It is a pure library: no I/O, no persistence, no shared
//! mutable state, so independent branches of the key tree may be derived
//! concurrently by the caller.

pub mod address;
pub mod bip32;
pub mod error;
pub mod mnemonic;
pub mod path;
pub mod primitives;

// Re-export commonly used types for convenience
pub use address::Network;
pub use bip32::{ExtendedPrivateKey, ExtendedPublicKey};
pub use error::{Error, Result};
pub use path::{ChildIndex, DerivationPath};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
