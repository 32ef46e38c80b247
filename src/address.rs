//! Legacy (P2PKH) Bitcoin address encoding

use crate::error::{Error, Result};
use crate::primitives;

/// Bitcoin network, selecting the address version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Network {
    /// Mainnet (addresses start with `1`)
    Mainnet,
    /// Testnet (addresses start with `m` or `n`)
    Testnet,
}

impl Network {
    fn p2pkh_version(self) -> u8 {
        match self {
            Self::Mainnet => 0x00,
            Self::Testnet => 0x6f,
        }
    }
}

/// Encode a compressed public key as a legacy P2PKH address.
///
/// Payload layout is `version ‖ hash160(public_key)`; the Base58Check
/// encoder appends the 4-byte double-SHA256 checksum.
pub fn p2pkh_address(public_key: &[u8], network: Network) -> Result<String> {
    if public_key.len() != 33 {
        return Err(Error::InvalidKey(format!(
            "Expected a 33-byte compressed public key, got {} bytes",
            public_key.len()
        )));
    }
    // Also rejects 33-byte strings that are not points on the curve.
    primitives::public_key_from_bytes(public_key)?;

    let hash = primitives::hash160(public_key);

    let mut payload = Vec::with_capacity(21);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(&hash);

    Ok(primitives::base58check_encode(&payload))
}
