// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::encrypted::{KeyEncryptionError, KeyLoadError};
use crate::keypair::{KeyPair, PrivateKey, PublicKey};
use crate::pem::{PemDecodable, PemEncodable};

pub const KEY_PRIV_EXT: &str = "priv";
pub const KEY_PUB_EXT: &str = "pub";

/// Writes the passphrase-protected private key to `path` and the public key
/// next to it with a `.pub` extension. Neither file may already exist.
pub fn save_keypair_to_file<B: AsRef<[u8]>>(
    keypair: &KeyPair,
    passphrase: B,
    path: &Path,
) -> Result<(PathBuf, PathBuf), FileError> {
    validate_extension(path, KEY_PRIV_EXT)?;

    let pub_path = path.with_extension(KEY_PUB_EXT);
    save_public_key_to_file(keypair.public_key(), &pub_path)?;

    let pem = keypair.private_key().to_encrypted_pem(passphrase)?;
    let mut priv_file = create_new_file(path, FileMode::Sensitive)?;
    write!(priv_file, "{}", pem).map_err(|err| FileError::FileWriteError(err.to_string()))?;
    Ok((path.to_path_buf(), pub_path))
}

pub fn load_keypair_from_file(
    path: &Path,
    passphrase: impl AsRef<[u8]>,
) -> Result<KeyPair, FileError> {
    validate_extension(path, KEY_PRIV_EXT)?;
    let contents = fs::read(path).map_err(|_| FileError::CouldNotReadFromFile(path.to_owned()))?;
    let private = PrivateKey::from_encrypted_pem(contents, passphrase)?;
    Ok(KeyPair::from_private_key(private))
}

pub fn save_public_key_to_file(public_key: &PublicKey, path: &Path) -> Result<(), FileError> {
    validate_extension(path, KEY_PUB_EXT)?;
    let pem = public_key
        .to_pem()
        .map_err(|_| FileError::CouldNotSaveKey)?;
    save_to_file(pem, path)
}

pub fn load_public_key_from_file(path: &Path) -> Result<PublicKey, FileError> {
    validate_extension(path, KEY_PUB_EXT)?;
    let contents = fs::read(path).map_err(|_| FileError::CouldNotReadFromFile(path.to_owned()))?;
    let key = PublicKey::from_pem(contents).map_err(|_| FileError::PublicKeyError)?;
    Ok(key)
}

#[derive(PartialEq)]
enum FileMode {
    Regular,
    Sensitive,
}

fn create_new_file(path: &Path, mode: FileMode) -> Result<File, FileError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| FileError::FileCreation(path.to_owned(), err.to_string()))?;

    if mode == FileMode::Sensitive {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(PermissionsExt::from_mode(0o600))
                .map_err(|_| FileError::FilePermissionSetting(path.to_owned()))?;
        }
    }

    Ok(file)
}

fn save_to_file(contents: String, path: &Path) -> Result<(), FileError> {
    let mut file = create_new_file(path, FileMode::Regular)?;
    write!(file, "{}", contents).map_err(|err| FileError::FileWriteError(err.to_string()))?;
    Ok(())
}

fn validate_extension(path: &Path, expected_ext: &str) -> Result<(), FileError> {
    if let Some(ext) = path.extension() {
        if ext == expected_ext {
            return Ok(());
        }
    }
    Err(FileError::UnexpectedFileExtension(
        path.to_owned(),
        expected_ext.to_string(),
    ))
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FileError {
    #[error("Unable to create the file {:?}. Error: {}.", .0, .1)]
    FileCreation(PathBuf, String),
    #[error("Unable to save key.")]
    CouldNotSaveKey,
    #[error("Unable to read from {:?}. Perhaps the file does not exist.", .0)]
    CouldNotReadFromFile(PathBuf),
    #[error("The supplied file {:?} does not have the expected extension ({}).", .0, .1)]
    UnexpectedFileExtension(PathBuf, String),
    #[error("Public key supplied could not be parsed.")]
    PublicKeyError,
    #[error("Unable to load the private key.")]
    KeyLoadError(#[from] KeyLoadError),
    #[error("Unable to encrypt the private key.")]
    KeyEncryptionError(#[from] KeyEncryptionError),
    #[error("Unable to write to file. {0}.")]
    FileWriteError(String),
    #[error("Unable to set appropriate permissions on file {0:?}.")]
    FilePermissionSetting(PathBuf),
}
