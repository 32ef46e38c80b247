//! Thin wrappers around the hashing, secp256k1 and Base58Check primitives
//!
//! Everything above this module treats these operations as opaque
//! capabilities; no BIP32 semantics live here.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// SHA-256 digest
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// RIPEMD-160 digest
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// hash160: SHA-256 followed by RIPEMD-160, the standard Bitcoin
/// public-key digest
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// HMAC-SHA512 of `data` keyed by `key`
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut hmac = <Hmac<Sha512> as KeyInit>::new_from_slice(key)
        .map_err(|_| Error::InvalidKey("HMAC key error".to_string()))?;

    hmac.update(data);
    let result = hmac.finalize().into_bytes();

    let mut out = [0u8; 64];
    out.copy_from_slice(&result);
    Ok(out)
}

/// Parse a 32-byte scalar as a secp256k1 secret key.
///
/// Fails for the zero scalar and for values at or above the curve order.
pub fn secret_key_from_bytes(bytes: &[u8]) -> Result<SecretKey> {
    SecretKey::from_slice(bytes).map_err(|e| Error::InvalidKey(e.to_string()))
}

/// Derive the public key corresponding to a secret key
pub fn derive_public_key(secret_key: &SecretKey) -> PublicKey {
    let secp = Secp256k1::new();
    PublicKey::from_secret_key(&secp, secret_key)
}

/// Parse a compressed (33-byte) or uncompressed (65-byte) public key
pub fn public_key_from_bytes(bytes: &[u8]) -> Result<PublicKey> {
    PublicKey::from_slice(bytes).map_err(|e| Error::InvalidKey(e.to_string()))
}

/// Add a 32-byte tweak to a secret key (mod the curve order).
///
/// Fails when the tweak or the resulting scalar is zero or at or above the
/// curve order. Per BIP32 such a child is unusable and the error must reach
/// the caller; there is no retry at this layer.
pub fn scalar_tweak_add(secret_key: &SecretKey, tweak: &[u8; 32]) -> Result<SecretKey> {
    let tweak = SecretKey::from_slice(tweak)
        .map_err(|e| Error::InvalidTweak(e.to_string()))?;

    secret_key
        .add_tweak(&tweak.into())
        .map_err(|e| Error::InvalidTweak(e.to_string()))
}

/// Add `tweak * G` to a public key point.
///
/// Fails under the same degenerate-tweak conditions as
/// [`scalar_tweak_add`], including the resulting point at infinity.
pub fn point_tweak_add(public_key: &PublicKey, tweak: &[u8; 32]) -> Result<PublicKey> {
    let secp = Secp256k1::new();
    let tweak = SecretKey::from_slice(tweak)
        .map_err(|e| Error::InvalidTweak(e.to_string()))?;

    public_key
        .add_exp_tweak(&secp, &tweak.into())
        .map_err(|e| Error::InvalidTweak(e.to_string()))
}

/// Base58Check-encode a payload.
///
/// Contract: `payload` already includes any version byte but NOT the
/// checksum. This function computes the 4-byte double-SHA256 checksum,
/// appends it, and Base58-encodes the result.
pub fn base58check_encode(payload: &[u8]) -> String {
    let checksum = sha256(&sha256(payload));

    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[0..4]);

    bs58::encode(data).into_string()
}
