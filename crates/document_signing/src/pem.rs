// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use pem::{encode_config, parse, EncodeConfig, LineEnding, Pem};

use crate::error::{EncodeError, KeyFormatError};

pub trait ToDerBytes {
    /// Converts to a DER-encoded byte vector.
    fn to_der(&self) -> Result<Vec<u8>, EncodeError>;
}

pub trait FromDerBytes: Sized {
    /// Converts from a DER-encoded byte slice.
    fn from_der(data: &[u8]) -> Result<Self, KeyFormatError>;
}

/// The label between `-----BEGIN ` and `-----`. Decoding checks it before the
/// body is parsed, so a public key is never accepted where a private key is
/// expected and vice versa.
pub trait PemTaggable {
    const TAG: &'static str;
}

pub trait PemEncodable: ToDerBytes + PemTaggable {
    /// Converts to PEM string.
    fn to_pem(&self) -> Result<String, EncodeError>;
}

pub trait PemDecodable: FromDerBytes + PemTaggable {
    fn from_pem<T: AsRef<[u8]>>(data: T) -> Result<Self, KeyFormatError>;
}

impl<T: ToDerBytes + PemTaggable> PemEncodable for T {
    fn to_pem(&self) -> Result<String, EncodeError> {
        let pem = Pem::new(T::TAG, self.to_der()?);
        let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
        Ok(encode_config(&pem, config))
    }
}

impl<T: FromDerBytes + PemTaggable> PemDecodable for T {
    fn from_pem<K: AsRef<[u8]>>(data: K) -> Result<Self, KeyFormatError> {
        let pem = parse(data)?;
        if pem.tag() != T::TAG {
            return Err(KeyFormatError::UnexpectedPemTag {
                expected: T::TAG.to_owned(),
                found: pem.tag().to_owned(),
            });
        }
        T::from_der(pem.contents())
    }
}
