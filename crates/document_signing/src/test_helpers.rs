// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key pairs shared across unit tests. RSA generation is slow, so each is made once.

use once_cell::sync::Lazy;

use crate::config::SigningConfig;
use crate::keypair::KeyPair;

static ALICE: Lazy<KeyPair> =
    Lazy::new(|| KeyPair::generate(&SigningConfig::default()).expect("could not generate key"));

static BOB: Lazy<KeyPair> =
    Lazy::new(|| KeyPair::generate(&SigningConfig::default()).expect("could not generate key"));

pub fn alice() -> &'static KeyPair {
    &ALICE
}

pub fn bob() -> &'static KeyPair {
    &BOB
}
