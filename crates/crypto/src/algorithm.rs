//! Supported hash algorithms and their wire prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SignatureError;

/// Hash function underlying the HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// HMAC-SHA1 (legacy providers)
    Sha1,
    /// HMAC-SHA256
    #[default]
    Sha256,
}

impl Algorithm {
    /// Every supported algorithm, in the order prefixes are reported.
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha1, Algorithm::Sha256];

    /// Prefix used in encoded signatures, e.g. `sha256=`.
    pub fn prefix(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1=",
            Algorithm::Sha256 => "sha256=",
        }
    }

    /// Lowercase algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Raw digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }

    /// Hex-encoded digest length.
    #[inline]
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Splits an encoded signature into its algorithm and the hex remainder.
    ///
    /// Returns `None` when no supported prefix matches.
    pub fn split_prefix(signature: &str) -> Option<(Algorithm, &str)> {
        Self::ALL.iter().find_map(|&algorithm| {
            signature
                .strip_prefix(algorithm.prefix())
                .map(|digest| (algorithm, digest))
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SignatureError;

    /// Accepts `sha1`, `sha256` (any case) and the prefixed forms `sha1=`, `sha256=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix('=').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SignatureError::UnknownAlgorithm(s.to_string()))
    }
}
