//! WASM bindings for signing and validation.
//!
//! Algorithms are passed by name (`"sha1"` or `"sha256"`).

use base64::Engine;
use wasm_bindgen::prelude::*;

use crate::Algorithm;

fn parse_algorithm(algorithm: &str) -> Result<Algorithm, JsValue> {
    algorithm
        .parse()
        .map_err(|e: crate::SignatureError| JsValue::from_str(&e.to_string()))
}

/// Generate an HMAC signature and return it as a hex string.
#[wasm_bindgen(js_name = signHex)]
pub fn sign_hex(key: &str, message: &str, algorithm: &str) -> Result<String, JsValue> {
    Ok(crate::sign_hex(message.as_bytes(), key, parse_algorithm(algorithm)?))
}

/// Generate an HMAC signature and return it as a base64 string.
#[wasm_bindgen(js_name = signBase64)]
pub fn sign_base64(key: &str, message: &str, algorithm: &str) -> Result<String, JsValue> {
    let digest = crate::sign(message.as_bytes(), key, parse_algorithm(algorithm)?);
    Ok(base64::engine::general_purpose::STANDARD.encode(digest))
}

/// Generate an encoded `<prefix><hex>` signature.
#[wasm_bindgen(js_name = signEncoded)]
pub fn sign_encoded(key: &str, message: &str, algorithm: &str) -> Result<String, JsValue> {
    Ok(crate::sign_encoded(message.as_bytes(), key, parse_algorithm(algorithm)?))
}

/// Validate an encoded signature.
///
/// Resolves to nothing on success and throws the rejection message otherwise.
#[wasm_bindgen(js_name = validateSignature)]
pub fn validate_signature(key: &str, message: &str, signature: &str) -> Result<(), JsValue> {
    crate::validate(message.as_bytes(), signature, key).map_err(|e| JsValue::from_str(&e.to_string()))
}
