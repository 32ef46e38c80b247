//! BIP32 derivation engine
//!
//! Key material comes in two shapes: [`ExtendedPrivateKey`] carries the
//! private scalar and supports every derivation, [`ExtendedPublicKey`]
//! carries only the point and chain code and supports non-hardened
//! derivation. Both are immutable values; each derivation step produces a
//! fresh child and never touches the parent, so sibling derivations from
//! one parent are independent.

use secp256k1::{PublicKey, SecretKey};

use crate::error::{Error, Result};
use crate::path::{ChildIndex, DerivationPath};
use crate::primitives;

/// HMAC key for master key generation, fixed by BIP32
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// A private key with its chain code, the full BIP32 key material
#[derive(Debug, Clone)]
pub struct ExtendedPrivateKey {
    private_key: SecretKey,
    public_key: PublicKey,
    chain_code: [u8; 32],
}

/// A public key with its chain code, supporting only non-hardened derivation
#[derive(Debug, Clone)]
pub struct ExtendedPublicKey {
    public_key: PublicKey,
    chain_code: [u8; 32],
}

impl ExtendedPrivateKey {
    /// Generate the master key from a seed.
    ///
    /// Fails with [`Error::InvalidKey`] when the HMAC output is not a valid
    /// scalar; per BIP32 the caller must pick a different seed, this
    /// function never retries.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let i = primitives::hmac_sha512(MASTER_HMAC_KEY, seed)?;
        Self::from_split_hmac(&i)
    }

    /// Build key material from an existing private key and chain code
    pub fn from_parts(private_key: &[u8], chain_code: [u8; 32]) -> Result<Self> {
        let private_key = primitives::secret_key_from_bytes(private_key)?;
        let public_key = primitives::derive_public_key(&private_key);

        Ok(Self { private_key, public_key, chain_code })
    }

    fn from_split_hmac(i: &[u8; 64]) -> Result<Self> {
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..64]);

        let private_key = primitives::secret_key_from_bytes(&i[0..32])?;
        let public_key = primitives::derive_public_key(&private_key);

        Ok(Self { private_key, public_key, chain_code })
    }

    /// Derive one child, hardened or not
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        let mut data = Vec::with_capacity(37);

        if index.is_hardened() {
            data.push(0x00);
            data.extend_from_slice(&self.private_key.secret_bytes());
        } else {
            data.extend_from_slice(&self.public_key.serialize());
        }
        data.extend_from_slice(&index.to_u32().to_be_bytes());

        let i = primitives::hmac_sha512(&self.chain_code, &data)?;
        let (il, child_chain_code) = split_hmac(&i);

        let private_key = primitives::scalar_tweak_add(&self.private_key, &il)?;
        let public_key = primitives::point_tweak_add(&self.public_key, &il)?;

        Ok(Self { private_key, public_key, chain_code: child_chain_code })
    }

    /// Parse `path` and fold [`Self::derive_child`] over its segments.
    ///
    /// The first failing step aborts the whole derivation; no partial
    /// result is returned.
    pub fn derive_path(&self, path: &str) -> Result<Self> {
        let path: DerivationPath = path.parse()?;

        let mut key = self.clone();
        for index in path.iter() {
            key = key.derive_child(index)?;
        }
        Ok(key)
    }

    /// Drop the private half, keeping the watch-only material
    pub fn to_public(&self) -> ExtendedPublicKey {
        ExtendedPublicKey {
            public_key: self.public_key,
            chain_code: self.chain_code,
        }
    }

    /// The raw private key bytes
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.private_key.secret_bytes()
    }

    /// The compressed public key bytes
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.public_key.serialize()
    }

    /// The chain code
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Hex encoding of the private key
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.private_key_bytes())
    }

    /// Hex encoding of the compressed public key
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }
}

impl ExtendedPublicKey {
    /// Build watch-only key material from a public key and chain code
    pub fn from_parts(public_key: &[u8], chain_code: [u8; 32]) -> Result<Self> {
        let public_key = primitives::public_key_from_bytes(public_key)?;
        Ok(Self { public_key, chain_code })
    }

    /// Derive one non-hardened child.
    ///
    /// A hardened index fails with [`Error::PrivateKeyRequired`]: hardened
    /// derivation is keyed from the parent private key, which this type
    /// does not hold.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        if index.is_hardened() {
            return Err(Error::PrivateKeyRequired);
        }

        let mut data = Vec::with_capacity(37);
        data.extend_from_slice(&self.public_key.serialize());
        data.extend_from_slice(&index.to_u32().to_be_bytes());

        let i = primitives::hmac_sha512(&self.chain_code, &data)?;
        let (il, child_chain_code) = split_hmac(&i);

        let public_key = primitives::point_tweak_add(&self.public_key, &il)?;

        Ok(Self { public_key, chain_code: child_chain_code })
    }

    /// Parse `path` and fold [`Self::derive_child`] over its segments.
    ///
    /// A path containing any hardened segment is rejected up front with
    /// [`Error::HardenedDerivationUnsupported`], before any step runs.
    pub fn derive_path(&self, path: &str) -> Result<Self> {
        let path: DerivationPath = path.parse()?;

        if path.has_hardened() {
            return Err(Error::HardenedDerivationUnsupported);
        }

        let mut key = self.clone();
        for index in path.iter() {
            key = key.derive_child(index)?;
        }
        Ok(key)
    }

    /// The compressed public key bytes
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.public_key.serialize()
    }

    /// The chain code
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Hex encoding of the compressed public key
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }
}

fn split_hmac(i: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut il = [0u8; 32];
    let mut ir = [0u8; 32];
    il.copy_from_slice(&i[0..32]);
    ir.copy_from_slice(&i[32..64]);
    (il, ir)
}
