//! HMAC signing for the supported hash algorithms.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::Algorithm;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

fn compute<M: Mac + KeyInit>(key: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// Compute the raw HMAC digest of `payload` under `key`.
///
/// Deterministic and infallible for any payload or key length, including empty.
///
/// # Arguments
/// * `payload` - Message to sign
/// * `key` - Secret key; text keys are used as their UTF-8 bytes
/// * `algorithm` - Hash function to use
///
/// # Returns
/// Digest bytes (20 for SHA-1, 32 for SHA-256)
pub fn sign(payload: &[u8], key: impl AsRef<[u8]>, algorithm: Algorithm) -> Vec<u8> {
    let key = key.as_ref();
    match algorithm {
        Algorithm::Sha1 => compute::<HmacSha1>(key, payload),
        Algorithm::Sha256 => compute::<HmacSha256>(key, payload),
    }
}

/// Compute the HMAC digest as lowercase hex.
pub fn sign_hex(payload: &[u8], key: impl AsRef<[u8]>, algorithm: Algorithm) -> String {
    hex::encode(sign(payload, key, algorithm))
}

/// Compute the encoded signature `<prefix><hex>`, e.g. `sha256=41f8...`.
///
/// The result is accepted by [`crate::validate`] for the same payload and key.
pub fn sign_encoded(payload: &[u8], key: impl AsRef<[u8]>, algorithm: Algorithm) -> String {
    format!("{}{}", algorithm.prefix(), sign_hex(payload, key, algorithm))
}

/// Generate HMAC-SHA256 signature as a hex string.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> String {
    sign_hex(message, key, Algorithm::Sha256)
}

/// Generate HMAC-SHA1 signature as a hex string.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> String {
    sign_hex(message, key, Algorithm::Sha1)
}
