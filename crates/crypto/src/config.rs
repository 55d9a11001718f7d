//! Verifier configuration.
//!
//! Meant to be embedded in a host application's own config file:
//!
//! ```toml
//! [webhook.signature]
//! algorithms = ["sha256"]
//! ```

use serde::{Deserialize, Serialize};

use crate::Algorithm;

/// Which algorithms a [`crate::Verifier`] accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Accepted hash algorithms. Defaults to every supported one.
    pub algorithms: Vec<Algorithm>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl VerifierConfig {
    /// Config accepting only `algorithm`.
    pub fn only(algorithm: Algorithm) -> Self {
        Self {
            algorithms: vec![algorithm],
        }
    }
}
