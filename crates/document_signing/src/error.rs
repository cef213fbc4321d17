// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use pem::PemError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug, PartialEq)]
pub enum KeyGenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The backend could not produce a key, e.g. the random source failed.
    #[error("unable to generate key pair: {0}")]
    Backend(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum KeyFormatError {
    #[error(transparent)]
    Pem(#[from] PemError),
    #[error("unexpected tag, expected {expected}, got {found}")]
    UnexpectedPemTag { expected: String, found: String },
    #[error("could not decode key: {0}")]
    Der(String),
    #[error("key of {bits} bits is below the minimum of {min} bits")]
    KeyTooSmall { bits: usize, min: usize },
    #[error("key of {bits} bits is above the maximum of {max} bits")]
    KeyTooLarge { bits: usize, max: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("could not DER encode: {0}")]
    DerEncode(String),
}

/// Obscure by design, so that no detail about the private key ends up in logs.
#[derive(Error, Debug, PartialEq)]
#[error("unable to sign with the supplied private key")]
pub struct SigningError;

#[derive(Error, Debug, PartialEq)]
#[error("signature could not be parsed")]
pub struct SignatureParseError;

#[derive(Error, Debug, PartialEq)]
#[error("digest must be 64 lowercase hexadecimal characters")]
pub struct DigestParseError;
