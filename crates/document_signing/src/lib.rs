// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proof of authorship and integrity for text documents.
//!
//! An owner signs content with [`IntegrityBinder::bind_and_sign`], which stores
//! the content's SHA-256 [`ContentDigest`] and an RSA-PSS [`Signature`] over
//! `content ‖ hex(digest)`. Anyone holding the owner's [`PublicKey`] can then
//! call [`IntegrityBinder::verify`] and get a [`VerificationVerdict`]: the
//! document was never signed, is authentic, or was altered or forged.
//!
//! Keys travel as PEM text (see [`PemEncodable`] / [`PemDecodable`]) and are
//! always passed explicitly; nothing here looks up whose key to use.

mod artifact;
mod config;
mod digest;
mod document;
mod encrypted;
mod error;
pub mod file;
mod keypair;
mod pem;
#[cfg(test)]
mod test_helpers;
mod verdict;

pub use crate::artifact::{canonical_message, IntegrityBinder, SignedArtifact};
pub use crate::config::{ConfigError, SaltLength, SigningConfig, MAX_KEY_BITS, MIN_KEY_BITS};
pub use crate::digest::ContentDigest;
pub use crate::document::{Document, SignableDocument};
pub use crate::encrypted::{
    EncryptedPrivateKey, KeyDecryptionError, KeyEncryptionError, KeyLoadError,
};
pub use crate::error::{
    DigestParseError, EncodeError, KeyFormatError, KeyGenerationError, SignatureParseError,
    SigningError,
};
pub use crate::keypair::{KeyMismatchError, KeyPair, PrivateKey, PublicKey, Signature};
pub use crate::pem::{FromDerBytes, PemDecodable, PemEncodable, PemTaggable, ToDerBytes};
pub use crate::verdict::{
    InvalidityCause, VerificationOutcome, VerificationVerdict, DIGEST_MISMATCH_TEXT,
    INVALID_SIGNATURE_TEXT, INVALID_TEXT, UNSIGNED_TEXT, VALID_TEXT,
};
