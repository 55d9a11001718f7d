//! HMAC webhook signatures for hooksig.
//!
//! This crate provides:
//! - HMAC-SHA1 and HMAC-SHA256 signing
//! - Validation of `sha1=` / `sha256=` prefixed signatures
//! - Constant-time comparison for security
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use hooksig_crypto::{sign_encoded, validate, Algorithm};
//!
//! let body = br#"{"action":"opened"}"#;
//! let header = sign_encoded(body, "shared secret", Algorithm::Sha256);
//! assert!(header.starts_with("sha256="));
//! assert!(validate(body, &header, "shared secret").is_ok());
//! ```

#![warn(missing_docs)]

mod algorithm;
mod config;
mod error;
mod hmac_impl;
mod timing;
mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use algorithm::Algorithm;
pub use config::VerifierConfig;
pub use error::{Result, SignatureError, SignatureErrorCode};
pub use hmac_impl::{hmac_sha1, hmac_sha256, sign, sign_encoded, sign_hex};
pub use timing::constant_time_compare;
pub use validate::{validate, Verifier, MIN_SIGNATURE_LEN};
