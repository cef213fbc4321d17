// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const UNSIGNED_TEXT: &str = "Not signed";
pub const VALID_TEXT: &str = "The signature is valid";
pub const INVALID_TEXT: &str = "The signature is invalid";
pub const DIGEST_MISMATCH_TEXT: &str = "The content does not match the signed digest";
pub const INVALID_SIGNATURE_TEXT: &str = "The signature failed verification";

/// Outcome of verifying a document. "Never signed" and "tampered or forged"
/// are deliberately distinct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationVerdict {
    Unsigned,
    Valid,
    Invalid,
}

impl VerificationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl Display for VerificationVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned => write!(f, "{}", UNSIGNED_TEXT),
            Self::Valid => write!(f, "{}", VALID_TEXT),
            Self::Invalid => write!(f, "{}", INVALID_TEXT),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidityCause {
    /// The content no longer hashes to the stored digest.
    DigestMismatch,
    /// The digest matches but the signature does not verify under the key.
    SignatureFailure,
}

impl Display for InvalidityCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidityCause::DigestMismatch => write!(f, "{}", DIGEST_MISMATCH_TEXT),
            InvalidityCause::SignatureFailure => write!(f, "{}", INVALID_SIGNATURE_TEXT),
        }
    }
}

/// [`VerificationVerdict`] plus the reason for an `Invalid` verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Unsigned,
    Valid,
    Invalid(InvalidityCause),
}

impl VerificationOutcome {
    pub fn verdict(&self) -> VerificationVerdict {
        match self {
            Self::Unsigned => VerificationVerdict::Unsigned,
            Self::Valid => VerificationVerdict::Valid,
            Self::Invalid(_) => VerificationVerdict::Invalid,
        }
    }

    pub fn cause(&self) -> Option<InvalidityCause> {
        match self {
            Self::Invalid(cause) => Some(*cause),
            _ => None,
        }
    }
}

impl From<VerificationOutcome> for VerificationVerdict {
    fn from(outcome: VerificationOutcome) -> Self {
        outcome.verdict()
    }
}

impl Display for VerificationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(cause) => write!(f, "INVALID: {}", cause),
            other => write!(f, "{}", other.verdict()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_collapses_to_tri_state_verdict() {
        assert_eq!(
            VerificationOutcome::Unsigned.verdict(),
            VerificationVerdict::Unsigned
        );
        assert_eq!(VerificationOutcome::Valid.verdict(), VerificationVerdict::Valid);
        for cause in [InvalidityCause::DigestMismatch, InvalidityCause::SignatureFailure] {
            let outcome = VerificationOutcome::Invalid(cause);
            assert_eq!(outcome.verdict(), VerificationVerdict::Invalid);
            assert_eq!(outcome.cause(), Some(cause));
        }
        assert_eq!(VerificationOutcome::Valid.cause(), None);
    }

    #[test]
    fn only_valid_is_valid() {
        assert!(VerificationVerdict::Valid.is_valid());
        assert!(!VerificationVerdict::Invalid.is_valid());
        assert!(!VerificationVerdict::Unsigned.is_valid());
    }

    #[test]
    fn display_text() {
        assert_eq!(
            VerificationOutcome::Invalid(InvalidityCause::SignatureFailure).to_string(),
            format!("INVALID: {}", INVALID_SIGNATURE_TEXT)
        );
        assert_eq!(VerificationOutcome::Unsigned.to_string(), UNSIGNED_TEXT);
    }

    #[test]
    fn verdict_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&VerificationVerdict::Unsigned).unwrap(),
            "\"unsigned\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationOutcome::Invalid(
                InvalidityCause::DigestMismatch
            ))
            .unwrap(),
            r#"{"invalid":"digest_mismatch"}"#
        );
    }
}
