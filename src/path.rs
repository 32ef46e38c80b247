//! BIP32 derivation path parsing

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single child index in a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChildIndex {
    /// Non-hardened derivation, raw index in `0..2^31`
    Normal(u32),
    /// Hardened derivation, raw index in `0..2^31`
    Hardened(u32),
}

impl ChildIndex {
    /// Offset added to the raw index of a hardened child (2^31)
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// The effective 32-bit index used in the HMAC input
    pub fn to_u32(self) -> u32 {
        match self {
            Self::Normal(index) => index,
            Self::Hardened(index) => index + Self::HARDENED_OFFSET,
        }
    }

    /// The raw index before the hardened offset
    pub fn raw_index(self) -> u32 {
        match self {
            Self::Normal(index) | Self::Hardened(index) => index,
        }
    }

    /// Whether this index selects hardened derivation
    pub fn is_hardened(self) -> bool {
        matches!(self, Self::Hardened(_))
    }
}

impl From<u32> for ChildIndex {
    fn from(index: u32) -> Self {
        if index >= Self::HARDENED_OFFSET {
            Self::Hardened(index - Self::HARDENED_OFFSET)
        } else {
            Self::Normal(index)
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(index) => write!(f, "{}", index),
            Self::Hardened(index) => write!(f, "{}'", index),
        }
    }
}

/// An ordered, root-relative sequence of child indexes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationPath(Vec<ChildIndex>);

impl DerivationPath {
    /// Iterate the indexes in traversal order
    pub fn iter(&self) -> impl Iterator<Item = ChildIndex> + '_ {
        self.0.iter().copied()
    }

    /// Number of derivation steps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path is the root path `m`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any segment is hardened
    pub fn has_hardened(&self) -> bool {
        self.0.iter().any(|index| index.is_hardened())
    }
}

impl From<Vec<ChildIndex>> for DerivationPath {
    fn from(indexes: Vec<ChildIndex>) -> Self {
        Self(indexes)
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let mut components = path.split('/');

        if components.next() != Some("m") {
            return Err(Error::MalformedPath(format!(
                "Path must start with 'm': {}",
                path
            )));
        }

        let mut indexes = Vec::new();
        for component in components {
            indexes.push(parse_component(component)?);
        }

        Ok(Self(indexes))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

fn parse_component(component: &str) -> Result<ChildIndex> {
    let hardened = component.ends_with('\'');
    let raw = if hardened {
        component.trim_end_matches('\'')
    } else {
        component
    };

    let index = raw
        .parse::<u32>()
        .map_err(|_| Error::MalformedPath(format!("Invalid path component: {}", component)))?;

    if index >= ChildIndex::HARDENED_OFFSET {
        return Err(Error::MalformedPath(format!(
            "Index out of range (max 2^31 - 1): {}",
            component
        )));
    }

    if hardened {
        Ok(ChildIndex::Hardened(index))
    } else {
        Ok(ChildIndex::Normal(index))
    }
}
