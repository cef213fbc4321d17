// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;
use crate::keypair::Signature;

/// A record that carries content plus the digest and signature stored with it.
///
/// Implemented by whatever the storage layer persists; see [`Document`] for a
/// ready-made one.
pub trait SignableDocument {
    fn content(&self) -> &[u8];
    fn digest(&self) -> Option<&ContentDigest>;
    fn signature(&self) -> Option<&Signature>;
    /// Replaces digest and signature together.
    fn set_signed(&mut self, digest: ContentDigest, signature: Signature);
}

/// A titled text document with a single owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub owner: String,
    pub title: String,
    content: String,
    #[serde(default)]
    digest: Option<ContentDigest>,
    #[serde(default)]
    signature: Option<Signature>,
}

impl Document {
    pub fn new(
        owner: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            title: title.into(),
            content: content.into(),
            digest: None,
            signature: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Leaves any digest and signature in place, so a later verification
    /// reports the edit as tampering until the document is signed again.
    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl SignableDocument for Document {
    fn content(&self) -> &[u8] {
        self.content.as_bytes()
    }

    fn digest(&self) -> Option<&ContentDigest> {
        self.digest.as_ref()
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    fn set_signed(&mut self, digest: ContentDigest, signature: Signature) {
        self.digest = Some(digest);
        self.signature = Some(signature);
    }
}
