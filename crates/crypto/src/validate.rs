//! Validation of encoded `<prefix><hex>` signatures.

use std::fmt;

use crate::{constant_time_compare, sign_hex, Algorithm, Result, SignatureError, VerifierConfig};

/// Shortest signature worth parsing; anything shorter cannot carry a prefix.
pub const MIN_SIGNATURE_LEN: usize = 5;

/// Validate `signature` for `payload` against `key`, accepting every supported algorithm.
///
/// # Arguments
/// * `payload` - The message as received
/// * `signature` - Encoded signature, e.g. `sha256=41f8...`
/// * `key` - Shared secret; text keys are used as their UTF-8 bytes
///
/// # Returns
/// `Ok(())` if the signature matches, otherwise the reason it was rejected
///
/// # Example
///
/// ```
/// use hooksig_crypto::validate;
///
/// let signature = "sha1=6791a762f7568f945c2e1e396cea243e944100a6";
/// assert!(validate(b"sign this message", signature, "my key").is_ok());
/// assert!(validate(b"sign this message!", signature, "my key").is_err());
/// ```
pub fn validate(payload: &[u8], signature: &str, key: impl AsRef<[u8]>) -> Result<()> {
    check(payload, signature, key.as_ref(), &Algorithm::ALL)
}

fn check(payload: &[u8], signature: &str, key: &[u8], accepted: &[Algorithm]) -> Result<()> {
    if signature.len() < MIN_SIGNATURE_LEN {
        tracing::debug!(len = signature.len(), "signature too short");
        return Err(SignatureError::TooShort {
            len: signature.len(),
        });
    }

    let Some((algorithm, provided)) =
        Algorithm::split_prefix(signature).filter(|(algorithm, _)| accepted.contains(algorithm))
    else {
        tracing::debug!("signature has no accepted hash prefix");
        return Err(SignatureError::UnsupportedAlgorithm {
            accepted: accepted.iter().map(|algorithm| algorithm.prefix()).collect(),
            got: signature.to_string(),
        });
    };

    tracing::trace!(%algorithm, payload_len = payload.len(), "recomputing digest");
    let expected = sign_hex(payload, key, algorithm);

    if constant_time_compare(expected.as_bytes(), provided.as_bytes()) {
        Ok(())
    } else {
        tracing::debug!(%algorithm, "signature mismatch");
        Err(SignatureError::Mismatch)
    }
}

/// A key bound to a set of accepted algorithms.
///
/// Immutable once built, so it can be shared across threads.
#[derive(Clone)]
pub struct Verifier {
    key: Vec<u8>,
    accepted: Vec<Algorithm>,
}

impl Verifier {
    /// Verifier accepting every supported algorithm.
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: key.as_ref().to_vec(),
            accepted: Algorithm::ALL.to_vec(),
        }
    }

    /// Verifier accepting only the given algorithms.
    ///
    /// Order and duplicates in `algorithms` are irrelevant; prefixes are always
    /// matched and reported in [`Algorithm::ALL`] order.
    pub fn with_algorithms(
        key: impl AsRef<[u8]>,
        algorithms: impl IntoIterator<Item = Algorithm>,
    ) -> Result<Self> {
        let mut accepted: Vec<Algorithm> = algorithms.into_iter().collect();
        accepted.sort();
        accepted.dedup();
        if accepted.is_empty() {
            return Err(SignatureError::NoAlgorithms);
        }
        Ok(Self {
            key: key.as_ref().to_vec(),
            accepted,
        })
    }

    /// Verifier built from a [`VerifierConfig`].
    pub fn from_config(key: impl AsRef<[u8]>, config: &VerifierConfig) -> Result<Self> {
        Self::with_algorithms(key, config.algorithms.iter().copied())
    }

    /// Accepted algorithms, in canonical order.
    pub fn algorithms(&self) -> &[Algorithm] {
        &self.accepted
    }

    /// Validate `signature` for `payload`.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<()> {
        check(payload, signature, &self.key, &self.accepted)
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("key", &"<redacted>")
            .field("accepted", &self.accepted)
            .finish()
    }
}
