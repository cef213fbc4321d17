// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameters shared by key generation, signing and verification.
//!
//! A signature made under one [`SigningConfig`] only verifies under a config with
//! the same [`SaltLength`], so signer and verifier must agree on it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest RSA modulus accepted anywhere in this crate.
pub const MIN_KEY_BITS: usize = 2048;

/// Largest RSA modulus accepted anywhere in this crate. Public keys above
/// this size cannot be decoded from SPKI.
pub const MAX_KEY_BITS: usize = rsa::RsaPublicKey::MAX_SIZE;

/// Output size of SHA-256 in bytes.
const HASH_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltLength {
    /// The largest salt the modulus allows: `emLen - hLen - 2` bytes.
    #[default]
    Max,
    /// A salt as long as the SHA-256 output.
    DigestLength,
}

impl SaltLength {
    /// Salt length in bytes for an RSA modulus of `modulus_bits` bits.
    pub fn bytes_for(&self, modulus_bits: usize) -> usize {
        match self {
            Self::Max => {
                let em_len = modulus_bits.saturating_sub(1).div_ceil(8);
                em_len.saturating_sub(HASH_LEN + 2)
            }
            Self::DigestLength => HASH_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    pub key_bits: usize,
    pub salt_length: SaltLength,
}

impl SigningConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_bits < MIN_KEY_BITS {
            return Err(ConfigError::KeyTooSmall {
                bits: self.key_bits,
                min: MIN_KEY_BITS,
            });
        }
        if self.key_bits > MAX_KEY_BITS {
            return Err(ConfigError::KeyTooLarge {
                bits: self.key_bits,
                max: MAX_KEY_BITS,
            });
        }
        Ok(())
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            key_bits: MIN_KEY_BITS,
            salt_length: SaltLength::default(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("key size of {bits} bits is below the minimum of {min} bits")]
    KeyTooSmall { bits: usize, min: usize },
    #[error("key size of {bits} bits is above the maximum of {max} bits")]
    KeyTooLarge { bits: usize, max: usize },
}
