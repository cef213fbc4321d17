// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Passphrase-protected private keys, for owners who keep their key outside
//! the identity store.

use pkcs8::der::zeroize::ZeroizeOnDrop;
use pkcs8::pkcs5::pbes2;
use pkcs8::{DecodePrivateKey, EncodePrivateKey, PrivateKeyInfo, SecretDocument};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::RsaPrivateKey;
use thiserror::Error;

use crate::error::{EncodeError, KeyFormatError};
use crate::keypair::PrivateKey;
use crate::pem::{FromDerBytes, PemDecodable, PemEncodable, PemTaggable, ToDerBytes};

// The OWASP recommendation is 600,000 iterations, which makes tests crawl.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Pkcs8 encoded encrypted private key
pub struct EncryptedPrivateKey(SecretDocument);
impl ZeroizeOnDrop for EncryptedPrivateKey {}

impl PemTaggable for EncryptedPrivateKey {
    const TAG: &'static str = "ENCRYPTED PRIVATE KEY";
}

impl ToDerBytes for EncryptedPrivateKey {
    fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.0.as_bytes().into())
    }
}

impl FromDerBytes for EncryptedPrivateKey {
    fn from_der(data: &[u8]) -> Result<Self, KeyFormatError> {
        let doc = SecretDocument::try_from(data)
            .map_err(|err| KeyFormatError::Der(err.to_string()))?;
        Ok(Self(doc))
    }
}

impl PrivateKey {
    /// PBES2 with PBKDF2-SHA256 and AES-256-CBC, random salt and IV.
    pub fn to_encrypted_pem(
        &self,
        passphrase: impl AsRef<[u8]>,
    ) -> Result<String, KeyEncryptionError> {
        let encrypted = self.encrypt(passphrase)?;
        encrypted.to_pem().map_err(|_| KeyEncryptionError)
    }

    pub fn from_encrypted_pem(
        pem: impl AsRef<[u8]>,
        passphrase: impl AsRef<[u8]>,
    ) -> Result<Self, KeyLoadError> {
        let encrypted = EncryptedPrivateKey::from_pem(pem)?;
        let key = RsaPrivateKey::from_pkcs8_encrypted_der(encrypted.0.as_bytes(), passphrase)
            .map_err(|_| KeyDecryptionError)?;
        Ok(Self::from_rsa(key)?)
    }

    fn encrypt(
        &self,
        passphrase: impl AsRef<[u8]>,
    ) -> Result<EncryptedPrivateKey, KeyEncryptionError> {
        let der = self
            .inner()
            .to_pkcs8_der()
            .map_err(|_| KeyEncryptionError)?;
        let pki = PrivateKeyInfo::try_from(der.as_bytes()).map_err(|_| KeyEncryptionError)?;

        let mut salt = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        let mut iv = [0u8; 16];
        OsRng.fill_bytes(&mut iv);

        let params = pbes2::Parameters::pbkdf2_sha256_aes256cbc(PBKDF2_ITERATIONS, &salt, &iv)
            .map_err(|_| KeyEncryptionError)?;
        let doc = pki
            .encrypt_with_params(params, passphrase)
            .map_err(|_| KeyEncryptionError)?;
        Ok(EncryptedPrivateKey(doc))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum KeyLoadError {
    #[error(transparent)]
    Format(#[from] KeyFormatError),
    #[error(transparent)]
    Decrypt(#[from] KeyDecryptionError),
}

#[derive(Debug, Error, PartialEq)]
#[error("unable to encrypt key")]
pub struct KeyEncryptionError;

#[derive(Debug, Error, PartialEq)]
#[error("unable to decrypt key")]
pub struct KeyDecryptionError;
