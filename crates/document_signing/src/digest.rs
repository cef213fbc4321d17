// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use sha2::{Digest, Sha256};

use crate::error::DigestParseError;

/// SHA-256 fingerprint of a document's content.
///
/// The textual form is always 64 lowercase hex characters; that exact text is
/// what gets appended to the content when building the signed message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct ContentDigest([u8; Self::LEN]);

impl ContentDigest {
    pub const LEN: usize = 32;
    pub const HEX_LEN: usize = 2 * Self::LEN;

    pub fn compute(content: impl AsRef<[u8]>) -> Self {
        Self(Sha256::digest(content.as_ref()).into())
    }

    /// Recomputes the digest of `content` and compares. On its own this proves
    /// nothing about who produced the content.
    pub(crate) fn matches(&self, content: impl AsRef<[u8]>) -> bool {
        Self::compute(content) == *self
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; ContentDigest::LEN]> for ContentDigest {
    fn from(bytes: [u8; ContentDigest::LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentDigest")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for ContentDigest {
    type Err = DigestParseError;

    // Uppercase is rejected: the stored text must be byte-identical to what was signed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(DigestParseError);
        }
        let bytes = hex::decode(s)
            .map_err(|_| DigestParseError)?
            .try_into()
            .map_err(|_| DigestParseError)?;
        Ok(Self(bytes))
    }
}
