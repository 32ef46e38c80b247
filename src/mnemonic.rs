//! Mnemonic phrase handling
//!
//! Thin wrapper over the `bip39` crate; the derivation engine itself only
//! ever sees the resulting seed bytes.

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 12 words (128 bits of entropy)
    Words12,
    /// 24 words (256 bits of entropy)
    Words24,
}

impl MnemonicStrength {
    fn entropy_bytes(self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words24 => 32,
        }
    }
}

/// Generate a random mnemonic phrase with the specified strength
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<String> {
    let mut entropy = vec![0u8; strength.entropy_bytes()];
    OsRng.fill_bytes(&mut entropy);

    let mnemonic =
        Mnemonic::from_entropy(&entropy).map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Check that a phrase is a valid BIP39 mnemonic
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    Mnemonic::parse_normalized(phrase)
        .map(|_| ())
        .map_err(|e| Error::Mnemonic(e.to_string()))
}

/// Convert a mnemonic phrase and optional passphrase into a 64-byte seed
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<[u8; 64]> {
    let mnemonic =
        Mnemonic::parse_normalized(phrase).map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_seed(passphrase.unwrap_or("")))
}
