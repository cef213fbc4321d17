// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binding content to its digest and signature, and checking that binding.
//!
//! The signed message is the content followed by the digest's 64-character hex
//! text. Because the digest is inside the signed payload, swapping in a
//! different (content, digest) pair cannot produce a verifying signature
//! without the private key. [`canonical_message`] is the only place that
//! message is built, for both signing and verification.

use tracing::{debug, trace, warn};

use crate::config::SigningConfig;
use crate::digest::ContentDigest;
use crate::document::SignableDocument;
use crate::error::SigningError;
use crate::keypair::{PrivateKey, PublicKey, Signature};
use crate::verdict::{InvalidityCause, VerificationOutcome, VerificationVerdict};

/// `content ‖ hex(digest)`.
pub fn canonical_message(content: &[u8], digest: &ContentDigest) -> Vec<u8> {
    let digest_text = digest.to_string();
    let mut message = Vec::with_capacity(content.len() + digest_text.len());
    message.extend_from_slice(content);
    message.extend_from_slice(digest_text.as_bytes());
    message
}

/// Content together with its digest and signature. A freshly signed artifact
/// has all three; an unsigned one has neither digest nor signature. Anything
/// in between verifies as [`VerificationVerdict::Unsigned`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedArtifact {
    pub content: Vec<u8>,
    pub digest: Option<ContentDigest>,
    pub signature: Option<Signature>,
}

impl SignedArtifact {
    pub fn unsigned(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            digest: None,
            signature: None,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.digest.is_some() && self.signature.is_some()
    }
}

impl SignableDocument for SignedArtifact {
    fn content(&self) -> &[u8] {
        &self.content
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

/// Signs and verifies content under one [`SigningConfig`]. Holds no key
/// material; keys are passed to each call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrityBinder {
    config: SigningConfig,
}

impl IntegrityBinder {
    pub fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    pub fn bind_and_sign(
        &self,
        content: impl Into<Vec<u8>>,
        private_key: &PrivateKey,
    ) -> Result<SignedArtifact, SigningError> {
        let content = content.into();
        let (digest, signature) = self.seal(&content, private_key)?;
        Ok(SignedArtifact {
            content,
            digest: Some(digest),
            signature: Some(signature),
        })
    }

    /// Signs the document's current content, replacing any earlier digest and
    /// signature. On error the document is left untouched.
    pub fn sign_document<D: SignableDocument + ?Sized>(
        &self,
        document: &mut D,
        private_key: &PrivateKey,
    ) -> Result<(), SigningError> {
        let (digest, signature) = self.seal(document.content(), private_key)?;
        document.set_signed(digest, signature);
        Ok(())
    }

    pub fn verify<D: SignableDocument + ?Sized>(
        &self,
        document: &D,
        public_key: &PublicKey,
    ) -> VerificationVerdict {
        self.verify_detailed(document, public_key).verdict()
    }

    pub fn verify_detailed<D: SignableDocument + ?Sized>(
        &self,
        document: &D,
        public_key: &PublicKey,
    ) -> VerificationOutcome {
        self.verify_parts(
            document.content(),
            document.digest(),
            document.signature(),
            public_key,
        )
    }

    /// Verifies fields exactly as a text-oriented store keeps them: the digest
    /// as hex text and the signature as raw bytes. A digest that does not
    /// parse counts as tampering, not as an error.
    pub fn verify_stored(
        &self,
        content: &[u8],
        digest: Option<&str>,
        signature: Option<&[u8]>,
        public_key: &PublicKey,
    ) -> VerificationOutcome {
        let signature = signature.map(|bytes| Signature::from(bytes.to_vec()));
        let digest = match digest.map(str::parse::<ContentDigest>) {
            Some(Err(_)) if signature.is_some() => {
                debug!("stored digest is not canonical hex");
                return VerificationOutcome::Invalid(InvalidityCause::DigestMismatch);
            }
            Some(Err(_)) => {
                warn!("partially signed document treated as unsigned");
                return VerificationOutcome::Unsigned;
            }
            parsed => parsed.and_then(Result::ok),
        };
        self.verify_parts(content, digest.as_ref(), signature.as_ref(), public_key)
    }

    fn seal(
        &self,
        content: &[u8],
        private_key: &PrivateKey,
    ) -> Result<(ContentDigest, Signature), SigningError> {
        let digest = ContentDigest::compute(content);
        let message = canonical_message(content, &digest);
        trace!(len = message.len(), "built canonical message");
        let signature = private_key.sign(&message, self.config.salt_length)?;
        debug!(content_len = content.len(), %digest, "signed content");
        Ok((digest, signature))
    }

    fn verify_parts(
        &self,
        content: &[u8],
        digest: Option<&ContentDigest>,
        signature: Option<&Signature>,
        public_key: &PublicKey,
    ) -> VerificationOutcome {
        let (digest, signature) = match (digest, signature) {
            (Some(digest), Some(signature)) => (digest, signature),
            (None, None) => return VerificationOutcome::Unsigned,
            (digest, signature) => {
                warn!(
                    has_digest = digest.is_some(),
                    has_signature = signature.is_some(),
                    "partially signed document treated as unsigned"
                );
                return VerificationOutcome::Unsigned;
            }
        };

        let outcome = if !digest.matches(content) {
            VerificationOutcome::Invalid(InvalidityCause::DigestMismatch)
        } else {
            let message = canonical_message(content, digest);
            if public_key.verify(&message, signature, self.config.salt_length) {
                VerificationOutcome::Valid
            } else {
                VerificationOutcome::Invalid(InvalidityCause::SignatureFailure)
            }
        };
        debug!(%digest, ?outcome, "verified content");
        outcome
    }
}
